use crate::display::interface::{DisplayState, LabelDisplay};
use std::error::Error;

pub struct LabelDisplayConsole {
    current: DisplayState,
}

impl LabelDisplayConsole {
    pub fn new() -> Self {
        Self {
            current: DisplayState::Idle,
        }
    }

    fn render(&self) -> String {
        let text = self.current.text();
        let width = text.chars().count();
        format!(
            "┌{bar}┐\n│{text}│\n└{bar}┘",
            bar = "─".repeat(width),
            text = text
        )
    }
}

impl LabelDisplay for LabelDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("{}", self.render());
        Ok(())
    }

    fn show(&mut self, state: &DisplayState) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.current = state.clone();
        println!("{}", self.render());
        Ok(())
    }
}
