use crate::Result;
use crate::features::{ScalingParameters, UserInput};
use crate::model::{Classifier, ModelStatus, PredictionResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Fixed threshold on the purchase-class probability, boundary inclusive on
/// the purchase side. Not exposed to the user.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Stateless inference pipeline over the two loaded artifacts: validate,
/// normalize, run the classifier, apply the decision rule. Shared read-only
/// across requests; no locking since the artifacts never change after load.
pub struct Predictor {
    classifier: Arc<dyn Classifier>,
    scaling: ScalingParameters,
    prediction_count: AtomicU64,
}

impl Predictor {
    pub fn new(classifier: Arc<dyn Classifier>, scaling: ScalingParameters) -> Self {
        Self {
            classifier,
            scaling,
            prediction_count: AtomicU64::new(0),
        }
    }

    pub fn predict(&self, input: &UserInput) -> Result<PredictionResult> {
        input.validate()?;

        let features = self.scaling.normalize(input);
        let probabilities = self.classifier.predict_proba(&features);
        let label = if probabilities.purchase >= DECISION_THRESHOLD {
            1
        } else {
            0
        };

        self.prediction_count.fetch_add(1, Ordering::Relaxed);
        debug!(
            "Prediction: label={} p_purchase={:.4} p_no_purchase={:.4}",
            label, probabilities.purchase, probabilities.no_purchase
        );

        Ok(PredictionResult {
            label,
            p_purchase: probabilities.purchase,
            p_no_purchase: probabilities.no_purchase,
        })
    }

    pub fn model_status(&self) -> ModelStatus {
        self.classifier.status()
    }

    pub fn prediction_count(&self) -> u64 {
        self.prediction_count.load(Ordering::Relaxed)
    }
}
