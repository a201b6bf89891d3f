use super::Classifier;
use super::types::{ClassProbabilities, ModelStatus};
use crate::features::FeatureVector;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, info};

pub const CLASS_COUNT: usize = 2;
pub const FEATURE_COUNT: usize = 3;

/// Fitted Gaussian Naive Bayes parameters as exported by the offline
/// training step: one prior per class, one (mean, variance) pair per class
/// and feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GaussianNbParams {
    class_priors: Vec<f64>,
    means: Vec<Vec<f64>>,
    variances: Vec<Vec<f64>>,
}

/// Pre-trained Gaussian Naive Bayes classifier. Loaded once at startup,
/// immutable afterwards; inference is a pure function.
#[derive(Debug, Clone)]
pub struct GaussianNb {
    params: GaussianNbParams,
    model_path: String,
    loaded_at: DateTime<Utc>,
}

impl GaussianNb {
    pub async fn load(path: &str) -> Result<Self> {
        debug!("Loading classifier from: {}", path);

        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::artifact(format!("failed to read classifier '{}': {}", path, e))
        })?;
        let params: GaussianNbParams = serde_json::from_str(&raw)
            .map_err(|e| Error::artifact(format!("malformed classifier '{}': {}", path, e)))?;
        Self::validate(&params)?;

        info!(
            "Classifier loaded from {}: {} classes, {} features",
            path, CLASS_COUNT, FEATURE_COUNT
        );
        Ok(Self {
            params,
            model_path: path.to_string(),
            loaded_at: Utc::now(),
        })
    }

    /// Builds a classifier directly from parameters, bypassing the artifact
    /// file. Used for fixtures.
    pub fn from_params(
        class_priors: [f64; CLASS_COUNT],
        means: [[f64; FEATURE_COUNT]; CLASS_COUNT],
        variances: [[f64; FEATURE_COUNT]; CLASS_COUNT],
    ) -> Result<Self> {
        let params = GaussianNbParams {
            class_priors: class_priors.to_vec(),
            means: means.iter().map(|row| row.to_vec()).collect(),
            variances: variances.iter().map(|row| row.to_vec()).collect(),
        };
        Self::validate(&params)?;
        Ok(Self {
            params,
            model_path: "<in-memory>".to_string(),
            loaded_at: Utc::now(),
        })
    }

    fn validate(params: &GaussianNbParams) -> Result<()> {
        if params.class_priors.len() != CLASS_COUNT {
            return Err(Error::artifact(format!(
                "expected {} class priors, got {}",
                CLASS_COUNT,
                params.class_priors.len()
            )));
        }
        let prior_sum: f64 = params.class_priors.iter().sum();
        if params.class_priors.iter().any(|p| !p.is_finite() || *p <= 0.0) {
            return Err(Error::artifact("class priors must be positive and finite"));
        }
        if (prior_sum - 1.0).abs() > 1e-6 {
            return Err(Error::artifact(format!(
                "class priors must sum to 1, got {}",
                prior_sum
            )));
        }

        for (name, matrix) in [("means", &params.means), ("variances", &params.variances)] {
            if matrix.len() != CLASS_COUNT {
                return Err(Error::artifact(format!(
                    "expected {} rows in {}, got {}",
                    CLASS_COUNT,
                    name,
                    matrix.len()
                )));
            }
            for (class, row) in matrix.iter().enumerate() {
                if row.len() != FEATURE_COUNT {
                    return Err(Error::artifact(format!(
                        "expected {} features in {}[{}], got {}",
                        FEATURE_COUNT,
                        name,
                        class,
                        row.len()
                    )));
                }
                if row.iter().any(|v| !v.is_finite()) {
                    return Err(Error::artifact(format!(
                        "{}[{}] contains a non-finite value",
                        name, class
                    )));
                }
            }
        }

        // A zero variance collapses the Gaussian likelihood, same hazard as
        // a zero standard deviation in the scaling parameters.
        for (class, row) in params.variances.iter().enumerate() {
            if row.iter().any(|v| *v <= 0.0) {
                return Err(Error::artifact(format!(
                    "variances[{}] must be strictly positive",
                    class
                )));
            }
        }

        Ok(())
    }

    /// Unnormalized log posterior: ln prior plus the per-feature Gaussian
    /// log-likelihoods.
    fn log_joint(&self, class: usize, x: &[f64; FEATURE_COUNT]) -> f64 {
        let mut score = self.params.class_priors[class].ln();
        for feature in 0..FEATURE_COUNT {
            let mean = self.params.means[class][feature];
            let var = self.params.variances[class][feature];
            let diff = x[feature] - mean;
            score += -0.5 * (2.0 * PI * var).ln() - diff * diff / (2.0 * var);
        }
        score
    }
}

impl Classifier for GaussianNb {
    fn predict_proba(&self, features: &FeatureVector) -> ClassProbabilities {
        let x = features.as_array();
        let scores = [self.log_joint(0, &x), self.log_joint(1, &x)];

        // Normalize in log space to avoid underflow on extreme inputs.
        let max = scores[0].max(scores[1]);
        let exp0 = (scores[0] - max).exp();
        let exp1 = (scores[1] - max).exp();
        let total = exp0 + exp1;

        ClassProbabilities {
            no_purchase: exp0 / total,
            purchase: exp1 / total,
        }
    }

    fn status(&self) -> ModelStatus {
        ModelStatus {
            model_loaded: true,
            model_path: self.model_path.clone(),
            classes: CLASS_COUNT,
            loaded_at: self.loaded_at,
        }
    }
}
