//! Notifications published by the pet engine and the bundled observers

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::types::{PetId, StatType};

/// Something observable happened to the pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PetEvent {
    StatChanged {
        stat: StatType,
        value: f32,
    },
    LevelChanged {
        level: u8,
        experience: f32,
        level_name: String,
    },
    GameOver,
    GameComplete,
}

impl PetEvent {
    pub fn is_stat_changed(&self) -> bool {
        matches!(self, PetEvent::StatChanged { .. })
    }

    pub fn is_level_changed(&self) -> bool {
        matches!(self, PetEvent::LevelChanged { .. })
    }
}

/// Receives every event an engine publishes, in order, synchronously
pub trait PetObserver {
    fn on_event(&mut self, event: &PetEvent);
}

impl<F> PetObserver for F
where
    F: FnMut(&PetEvent),
{
    fn on_event(&mut self, event: &PetEvent) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Shared in-memory event log
///
/// Clones share the same buffer, so one clone can be handed to the engine
/// while another is kept to inspect what was published.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<PetEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn events(&self) -> Vec<PetEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn count(&self, predicate: impl Fn(&PetEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| predicate(e)).count()
    }
}

impl PetObserver for EventRecorder {
    fn on_event(&mut self, event: &PetEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Writes every event to the `tracing` log
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    pet: PetId,
}

impl TracingObserver {
    pub fn new(pet: PetId) -> Self {
        Self { pet }
    }
}

impl PetObserver for TracingObserver {
    fn on_event(&mut self, event: &PetEvent) {
        match event {
            PetEvent::StatChanged { stat, value } => {
                tracing::debug!(pet = %self.pet, "{} -> {:.1}", stat, value);
            }
            PetEvent::LevelChanged {
                level, level_name, ..
            } => {
                tracing::info!(pet = %self.pet, "Level up! Now level {} ({})", level, level_name);
            }
            PetEvent::GameOver => {
                tracing::warn!(pet = %self.pet, "Game over: a stat reached 0");
            }
            PetEvent::GameComplete => {
                tracing::info!(pet = %self.pet, "Game complete: became the perfect butler");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_clones_share_buffer() {
        let recorder = EventRecorder::new();
        let mut handle = recorder.clone();

        handle.on_event(&PetEvent::GameOver);
        handle.on_event(&PetEvent::StatChanged {
            stat: StatType::Fun,
            value: 10.0,
        });

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.count(PetEvent::is_stat_changed), 1);

        assert_eq!(recorder.events()[0], PetEvent::GameOver);
        recorder.clear();
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_closures_are_observers() {
        let mut seen = 0;
        {
            let mut observer = |_: &PetEvent| seen += 1;
            observer.on_event(&PetEvent::GameComplete);
            observer.on_event(&PetEvent::GameComplete);
        }
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_event_serializes() {
        let event = PetEvent::LevelChanged {
            level: 1,
            experience: 0.0,
            level_name: "apprentice".into(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("apprentice"));
    }
}
