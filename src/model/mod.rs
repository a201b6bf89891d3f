mod gaussian_nb;
mod types;

pub use gaussian_nb::{CLASS_COUNT, FEATURE_COUNT, GaussianNb};
pub use types::{ClassProbabilities, ModelStatus, PredictionResult};

use crate::features::FeatureVector;

/// Seam over the pre-trained probabilistic classifier. Implementations are
/// pure functions of the input and the loaded parameters.
pub trait Classifier: Send + Sync {
    /// Returns the two-class probability distribution for one feature vector.
    /// The pair sums to 1 up to floating-point rounding.
    fn predict_proba(&self, features: &FeatureVector) -> ClassProbabilities;

    fn status(&self) -> ModelStatus;
}
