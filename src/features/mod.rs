use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Bounds mirroring the input widgets of the original form: an age slider
/// and a salary slider. The HTTP boundary enforces the same ranges so the
/// normalizer never sees unconstrained input.
pub const AGE_MIN: u32 = 18;
pub const AGE_MAX: u32 = 100;
pub const SALARY_MIN: u32 = 0;
pub const SALARY_MAX: u32 = 200_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

/// One prediction request worth of raw user attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub gender: Gender,
    pub age: u32,
    pub salary: u32,
}

impl UserInput {
    pub fn validate(&self) -> Result<()> {
        if self.age < AGE_MIN || self.age > AGE_MAX {
            return Err(Error::OutOfRange {
                field: "age",
                value: self.age as i64,
                min: AGE_MIN as i64,
                max: AGE_MAX as i64,
            });
        }
        if self.salary > SALARY_MAX {
            return Err(Error::OutOfRange {
                field: "salary",
                value: self.salary as i64,
                min: SALARY_MIN as i64,
                max: SALARY_MAX as i64,
            });
        }
        Ok(())
    }
}

/// Numeric feature vector in the layout the classifier was trained on:
/// binary-encoded gender followed by the two standardized features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub gender_encoded: f64,
    pub age_scaled: f64,
    pub salary_scaled: f64,
}

impl FeatureVector {
    pub fn as_array(&self) -> [f64; 3] {
        [self.gender_encoded, self.age_scaled, self.salary_scaled]
    }
}

/// Training-time statistics used for z-score standardization. Loaded once
/// at startup and immutable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingParameters {
    pub mean_age: f64,
    pub std_age: f64,
    pub mean_salary: f64,
    pub std_salary: f64,
}

impl ScalingParameters {
    pub async fn load(path: &str) -> Result<Self> {
        debug!("Loading scaling parameters from: {}", path);

        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::artifact(format!("failed to read scaling parameters '{}': {}", path, e))
        })?;
        let params: Self = serde_json::from_str(&raw)
            .map_err(|e| Error::artifact(format!("malformed scaling parameters '{}': {}", path, e)))?;
        params.validate()?;

        info!(
            "Scaling parameters loaded: mean_age={} std_age={} mean_salary={} std_salary={}",
            params.mean_age, params.std_age, params.mean_salary, params.std_salary
        );
        Ok(params)
    }

    /// Degenerate training statistics would scale every input to infinity
    /// or NaN, so a non-positive standard deviation is fatal at load time.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("mean_age", self.mean_age),
            ("std_age", self.std_age),
            ("mean_salary", self.mean_salary),
            ("std_salary", self.std_salary),
        ] {
            if !value.is_finite() {
                return Err(Error::artifact(format!(
                    "scaling parameter {} is not finite: {}",
                    name, value
                )));
            }
        }
        if self.std_age <= 0.0 {
            return Err(Error::artifact(format!(
                "std_age must be positive, got {}",
                self.std_age
            )));
        }
        if self.std_salary <= 0.0 {
            return Err(Error::artifact(format!(
                "std_salary must be positive, got {}",
                self.std_salary
            )));
        }
        Ok(())
    }

    /// Maps raw user input to the feature vector the classifier expects.
    /// Deterministic; callers validate the input range beforehand.
    pub fn normalize(&self, input: &UserInput) -> FeatureVector {
        let gender_encoded = match input.gender {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        };
        FeatureVector {
            gender_encoded,
            age_scaled: (input.age as f64 - self.mean_age) / self.std_age,
            salary_scaled: (input.salary as f64 - self.mean_salary) / self.std_salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training_stats() -> ScalingParameters {
        ScalingParameters {
            mean_age: 38.0,
            std_age: 10.0,
            mean_salary: 69000.0,
            std_salary: 34000.0,
        }
    }

    #[test]
    fn test_normalize_known_values() {
        let input = UserInput {
            gender: Gender::Male,
            age: 30,
            salary: 50000,
        };
        let features = training_stats().normalize(&input);

        assert_eq!(features.gender_encoded, 1.0);
        assert!((features.age_scaled - (-0.8)).abs() < 1e-12);
        assert!((features.salary_scaled - (-19000.0 / 34000.0)).abs() < 1e-12);
    }

    #[test]
    fn test_gender_encoding() {
        let stats = training_stats();
        let female = UserInput {
            gender: Gender::Female,
            age: 40,
            salary: 60000,
        };
        let male = UserInput {
            gender: Gender::Male,
            ..female
        };

        assert_eq!(stats.normalize(&female).gender_encoded, 0.0);
        assert_eq!(stats.normalize(&male).gender_encoded, 1.0);
    }

    #[test]
    fn test_slider_boundaries_stay_finite() {
        let stats = training_stats();
        for age in [AGE_MIN, AGE_MAX] {
            for salary in [SALARY_MIN, SALARY_MAX] {
                let features = stats.normalize(&UserInput {
                    gender: Gender::Female,
                    age,
                    salary,
                });
                assert!(features.age_scaled.is_finite());
                assert!(features.salary_scaled.is_finite());
            }
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_age() {
        let too_young = UserInput {
            gender: Gender::Male,
            age: 17,
            salary: 0,
        };
        let too_old = UserInput { age: 101, ..too_young };

        assert!(too_young.validate().is_err());
        assert!(too_old.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_salary() {
        let input = UserInput {
            gender: Gender::Female,
            age: 30,
            salary: SALARY_MAX + 1,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_boundaries() {
        for (age, salary) in [(AGE_MIN, SALARY_MIN), (AGE_MAX, SALARY_MAX)] {
            let input = UserInput {
                gender: Gender::Male,
                age,
                salary,
            };
            assert!(input.validate().is_ok());
        }
    }

    #[test]
    fn test_zero_std_is_rejected() {
        let mut stats = training_stats();
        stats.std_age = 0.0;
        assert!(stats.validate().is_err());

        let mut stats = training_stats();
        stats.std_salary = 0.0;
        assert!(stats.validate().is_err());
    }

    #[test]
    fn test_non_finite_parameter_is_rejected() {
        let mut stats = training_stats();
        stats.mean_salary = f64::NAN;
        assert!(stats.validate().is_err());
    }
}
