use std::error::Error;

/// What the result field currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayState {
    #[default]
    Idle,
    /// Winning label, or "Unknown".
    Label(String),
    /// Classification did not produce a result.
    Failed(String),
}

impl DisplayState {
    pub fn text(&self) -> String {
        match self {
            DisplayState::Idle => "Take a photo".to_string(),
            DisplayState::Label(label) => label.clone(),
            DisplayState::Failed(reason) => format!("Classification failed: {}", reason),
        }
    }
}

/// The single text field results are written to.
pub trait LabelDisplay: Send {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn show(&mut self, state: &DisplayState) -> Result<(), Box<dyn Error + Send + Sync>>;
}
