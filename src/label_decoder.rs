use crate::error::ClassifierError;

pub const UNKNOWN_LABEL: &str = "Unknown";

/// Scores produced by one inference call, one per model class.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputVector(pub Vec<f32>);

impl OutputVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Class names; line `i` names output position `i`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelTable(Vec<String>);

impl LabelTable {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(lines.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fails when the table cannot line up one-to-one with the model output.
    pub fn validate_len(&self, output_len: usize) -> Result<(), ClassifierError> {
        if self.len() != output_len {
            return Err(ClassifierError::LabelCountMismatch {
                labels: self.len(),
                outputs: output_len,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub index: usize,
    pub label: String,
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationResult {
    Label(Classification),
    Unknown,
}

impl ClassificationResult {
    pub fn label(&self) -> &str {
        match self {
            ClassificationResult::Label(classification) => &classification.label,
            ClassificationResult::Unknown => UNKNOWN_LABEL,
        }
    }
}

impl std::fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Picks the best-scoring label. Equal maxima resolve to the earliest
/// position and NaN scores never win. An empty pairing gives `Unknown`.
pub fn decode(output: &OutputVector, labels: &LabelTable) -> ClassificationResult {
    let mut best: Option<(usize, f32)> = None;

    for (index, &score) in output.0.iter().enumerate().take(labels.len()) {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    match best {
        Some((index, confidence)) => ClassificationResult::Label(Classification {
            index,
            label: labels.0[index].clone(),
            confidence,
        }),
        None => ClassificationResult::Unknown,
    }
}
