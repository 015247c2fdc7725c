use crate::display::interface::{DisplayState, LabelDisplay};
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Records every state it is asked to show.
#[derive(Clone, Default)]
pub struct LabelDisplayFake {
    shown: Arc<Mutex<Vec<DisplayState>>>,
}

impl LabelDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<DisplayState> {
        self.shown.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl LabelDisplay for LabelDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn show(&mut self, state: &DisplayState) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.shown
            .lock()
            .map_err(|e| e.to_string())?
            .push(state.clone());
        Ok(())
    }
}
