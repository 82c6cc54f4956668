//! Perfect Butler - Entry Point
//!
//! Interactive driver for the simulation core. Each `tick` advances the game
//! clock by the configured interval and decays the cat's stats; caretaker
//! actions are checked against that same clock.
//!
//! Usage: `perfect-butler [config.toml]`

use perfect_butler::actions::{ActionKind, MiniGameResult};
use perfect_butler::core::error::Result;
use perfect_butler::core::types::{GameTime, StatType};
use perfect_butler::rules::load_config_or_default;
use perfect_butler::simulation::{ActionOutcome, PetEngine, TickOutcome, TracingObserver};

use std::io::{self, Write};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("perfect_butler=info")
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config_or_default(config_path.as_deref())?;

    let mut engine = PetEngine::try_new(config)?;
    let pet_id = engine.id();
    engine.subscribe(TracingObserver::new(pet_id));

    tracing::info!("Perfect Butler starting (pet {})", pet_id);

    let mut now: GameTime = 0.0;

    // Display welcome message
    println!("\n=== PERFECT BUTLER ===");
    println!("Keep your cat fed, clean, entertained and healthy.");
    println!();
    println!("Commands:");
    println!("  tick / t          - Advance one tick");
    println!("  run <n>           - Advance n ticks");
    println!("  feed              - Feed the cat");
    println!("  clean             - Clean up");
    println!("  play [grade]      - Play a minigame (fail | normal | perfect)");
    println!("  hospital          - Visit the vet");
    println!("  cooldowns / c     - Show action cooldowns");
    println!("  pause / resume    - Suspend or resume the simulation");
    println!("  status / s        - Show detailed status");
    println!("  quit / q          - Exit the game");
    println!();

    // Main game loop
    loop {
        display_status(&engine, now);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let argument = parts.next();

        match command {
            "quit" | "q" => break,
            "tick" | "t" => advance(&mut engine, &mut now, 1),
            "run" => match argument.and_then(|n| n.parse::<u32>().ok()) {
                Some(n) => advance(&mut engine, &mut now, n),
                None => println!("Usage: run <number>"),
            },
            "play" => {
                let grade = match argument {
                    Some(name) => match MiniGameResult::parse(name) {
                        Some(grade) => grade,
                        None => {
                            println!("Usage: play [fail | normal | perfect]");
                            continue;
                        }
                    },
                    None => MiniGameResult::Normal,
                };
                let request = ActionKind::play(grade);
                let outcome = engine.try_perform_action(&request, now);
                report_action("play", outcome);
            }
            "cooldowns" | "c" => display_cooldowns(&engine, now),
            "pause" => {
                if !engine.pause() {
                    println!("Can only pause while playing.");
                }
            }
            "resume" => {
                if !engine.resume() {
                    println!("Not paused.");
                }
            }
            "status" | "s" => display_detailed_status(&engine, now),
            other => match ActionKind::parse(other) {
                Some(kind) => {
                    let outcome = engine.perform(kind, now);
                    report_action(kind.label(), outcome);
                }
                None => println!(
                    "Unknown command. Available: tick, run <n>, feed, clean, play, hospital, cooldowns, pause, resume, status, quit"
                ),
            },
        }

        if engine.phase().is_terminal() {
            println!("\n*** {} ***", engine.phase().to_string().to_uppercase());
            break;
        }
    }

    let state = engine.state();
    println!(
        "\nGoodbye! Final state: {} (level {}), {:.0} time units elapsed.",
        state.level_name(),
        state.level(),
        now
    );
    Ok(())
}

/// Run `n` ticks, stopping early if the game ends
fn advance(engine: &mut PetEngine, now: &mut GameTime, n: u32) {
    let interval = engine.config().tick_interval;
    for _ in 0..n {
        match engine.tick_default() {
            TickOutcome::Decayed => *now += interval,
            TickOutcome::GameOver(stat) => {
                *now += interval;
                println!("{} dropped to zero!", stat);
                break;
            }
            TickOutcome::Skipped(phase) => {
                println!("Not ticking: {}", phase);
                break;
            }
        }
    }
}

fn report_action(label: &str, outcome: ActionOutcome) {
    match outcome {
        ActionOutcome::Performed { stat, value, .. } => {
            println!("{} done: {} is now {:.1}", label, stat, value);
        }
        ActionOutcome::OnCooldown { remaining } => {
            println!("{} is on cooldown... {:.1}s left", label, remaining);
        }
        ActionOutcome::NotPlaying(phase) => {
            println!("Cannot {} right now ({})", label, phase);
        }
    }
}

/// Display a brief status line
fn display_status(engine: &PetEngine, now: GameTime) {
    let state = engine.state();
    let (lowest, value) = state.stats.lowest();
    println!();
    println!(
        "--- t={:.0} | {} | {} (lv {}, {:.0} exp) | Lowest: {} {:.1} ---",
        now,
        state.phase,
        state.level_name(),
        state.level(),
        state.experience(),
        lowest,
        value
    );
}

/// Display every stat and the progression track
fn display_detailed_status(engine: &PetEngine, now: GameTime) {
    let state = engine.state();
    println!();
    println!("=== Detailed Status (t={:.0}) ===", now);
    for stat in StatType::all() {
        let value = state.stat(stat);
        println!("  {:<12} {:>5.1}  {}", stat, value, bar(value / 100.0, 20));
    }
    let track = if state.progression.is_max_level() {
        "to completion"
    } else {
        "to next level"
    };
    println!(
        "  Level: {} ({}), {:.0}% {}",
        state.level(),
        state.level_name(),
        state.progression.progress() * 100.0,
        track
    );
    println!();
}

fn display_cooldowns(engine: &PetEngine, now: GameTime) {
    for status in engine.cooldown_status(now) {
        let kind = ActionKind::for_stat(status.stat);
        if status.ready {
            println!("  {:<10} ready", kind.label());
        } else {
            println!("  {:<10} {:.1}s left", kind.label(), status.remaining);
        }
    }
}

fn bar(fraction: f32, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f32).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}
