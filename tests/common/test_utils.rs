#![allow(dead_code)]

use axum::Router;
use purchase_predict_rust::{
    config::{Config, LogsConfig, ModelConfig, ServerConfig},
    features::ScalingParameters,
    model::GaussianNb,
    predictor::Predictor,
    server::{self, handlers::AppState},
};
use std::path::Path;
use std::sync::Arc;

/// Training statistics used across tests: mean_age=38, std_age=10,
/// mean_salary=69000, std_salary=34000.
pub fn training_scaling() -> ScalingParameters {
    ScalingParameters {
        mean_age: 38.0,
        std_age: 10.0,
        mean_salary: 69000.0,
        std_salary: 34000.0,
    }
}

/// Fixture classifier with a known decision surface: equal priors, unit
/// variances, class means at the origin and at (1, 1, 1).
pub fn fixture_classifier() -> GaussianNb {
    GaussianNb::from_params(
        [0.5, 0.5],
        [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
        [[1.0, 1.0, 1.0], [1.0, 1.0, 1.0]],
    )
    .unwrap()
}

pub fn test_predictor() -> Predictor {
    Predictor::new(Arc::new(fixture_classifier()), training_scaling())
}

pub fn test_state() -> AppState {
    AppState {
        predictor: Arc::new(test_predictor()),
    }
}

pub fn test_app() -> Router {
    server::router(test_state())
}

/// Writes valid artifact files into `dir` and returns their paths.
pub fn write_artifact_files(dir: &Path) -> (String, String) {
    let classifier_path = dir.join("naive_bayes_model.json");
    let scaling_path = dir.join("scaling_params.json");

    std::fs::write(
        &classifier_path,
        serde_json::json!({
            "class_priors": [0.5, 0.5],
            "means": [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
            "variances": [[1.0, 1.0, 1.0], [1.0, 1.0, 1.0]],
        })
        .to_string(),
    )
    .unwrap();

    std::fs::write(
        &scaling_path,
        serde_json::json!({
            "mean_age": 38.0,
            "std_age": 10.0,
            "mean_salary": 69000.0,
            "std_salary": 34000.0,
        })
        .to_string(),
    )
    .unwrap();

    (
        classifier_path.to_string_lossy().to_string(),
        scaling_path.to_string_lossy().to_string(),
    )
}

/// Create a test configuration with sensible defaults
pub fn create_test_config(classifier_path: &str, scaling_path: &str) -> Config {
    Config {
        model: ModelConfig {
            classifier_path: classifier_path.to_string(),
            scaling_path: scaling_path.to_string(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
    }
}
