use criterion::{black_box, criterion_group, criterion_main, Criterion};
use perfect_butler::actions::ActionKind;
use perfect_butler::simulation::{EventRecorder, PetEngine};

fn bench_tick(c: &mut Criterion) {
    c.bench_function("tick_with_recorder", |b| {
        b.iter_batched(
            || {
                let mut engine = PetEngine::default();
                engine.subscribe(EventRecorder::new());
                engine
            },
            |mut engine| {
                for _ in 0..100 {
                    black_box(engine.tick(black_box(0.5)));
                }
                engine
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_actions(c: &mut Criterion) {
    c.bench_function("clean_action", |b| {
        let mut engine = PetEngine::default();
        let mut now = 0.0;
        b.iter(|| {
            now += 1.0;
            if engine.phase().is_terminal() {
                engine = PetEngine::default();
            }
            black_box(engine.perform(ActionKind::Clean, now))
        })
    });
}

criterion_group!(benches, bench_tick, bench_actions);
criterion_main!(benches);
