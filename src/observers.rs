use log::{info, warn};

use crate::events::CirculationEvent;

/// Trait for circulation observation
pub trait CirculationObserver {
    /// Called after every successful copy mutation routed through a library
    fn on_event(&self, event: &CirculationEvent);
}

/// Logs the new copy ratio after each event
#[derive(Debug)]
pub struct CirculationLogger;

impl CirculationObserver for CirculationLogger {
    fn on_event(&self, event: &CirculationEvent) {
        info!("{} now has {} copies.", event.title(), event.copies());
    }
}

/// Flags titles that run out, and notes when they come back
#[derive(Debug)]
pub struct StockWatcher;

impl CirculationObserver for StockWatcher {
    fn on_event(&self, event: &CirculationEvent) {
        match event {
            CirculationEvent::CheckedOut { title, copies } if copies.available == 0 => {
                warn!("Last copy of {title} is out");
            }
            CirculationEvent::CheckedIn { title, copies } if copies.available == 1 => {
                info!("{title} is available again");
            }
            _ => {}
        }
    }
}
