use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Two-class probability distribution. Class 0 is "no purchase", class 1 is
/// the positive "purchase" class whose probability drives the decision rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    pub no_purchase: f64,
    pub purchase: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// 1 iff the purchase probability reaches the decision threshold.
    pub label: u8,
    pub p_purchase: f64,
    pub p_no_purchase: f64,
}

/// Status surface for the loaded model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    pub model_loaded: bool,
    pub model_path: String,
    pub classes: usize,
    pub loaded_at: DateTime<Utc>,
}
