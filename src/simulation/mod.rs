pub mod engine;
pub mod events;

pub use engine::{ActionOutcome, PetEngine, TickOutcome};
pub use events::{EventRecorder, PetEvent, PetObserver, SubscriptionId, TracingObserver};
