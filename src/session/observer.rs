//! Feedback hooks fired after the grid changes

use crate::voxel::EditOutcome;

/// Receives every outcome that modified the grid (sound, flash, redraw)
pub trait EditObserver {
    fn on_edit(&mut self, outcome: &EditOutcome);
}

/// Observer that logs each change at debug level
#[derive(Debug, Default)]
pub struct LogObserver;

impl EditObserver for LogObserver {
    fn on_edit(&mut self, outcome: &EditOutcome) {
        log::debug!("Edit: {}", outcome);
    }
}

impl<F: FnMut(&EditOutcome)> EditObserver for F {
    fn on_edit(&mut self, outcome: &EditOutcome) {
        self(outcome)
    }
}
