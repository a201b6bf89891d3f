use crate::features::Gender;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub gender: Gender,
    pub age: u32,
    pub salary: u32,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub request_id: String,
    pub label: u8,
    pub outcome: String,
    pub p_purchase: f64,
    pub p_no_purchase: f64,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub model_loaded: bool,
    pub model_path: String,
    pub classes: usize,
    pub loaded_at: DateTime<Utc>,
    pub prediction_count: u64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
