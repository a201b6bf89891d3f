use super::types::{ErrorResponse, PredictRequest, PredictResponse, StatusResponse};
use crate::features::UserInput;
use crate::predictor::Predictor;
use crate::Error;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

const INDEX_PAGE: &str = include_str!("../../assets/index.html");

#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4().to_string();

    info!(
        "Received prediction request {}: gender={:?} age={} salary={}",
        request_id, request.gender, request.age, request.salary
    );

    let input = UserInput {
        gender: request.gender,
        age: request.age,
        salary: request.salary,
    };

    match state.predictor.predict(&input) {
        Ok(result) => {
            let outcome = if result.label == 1 {
                "purchase"
            } else {
                "no_purchase"
            };
            Ok(Json(PredictResponse {
                request_id,
                label: result.label,
                outcome: outcome.to_string(),
                p_purchase: result.p_purchase,
                p_no_purchase: result.p_no_purchase,
            }))
        }
        Err(e @ Error::OutOfRange { .. }) => {
            warn!("Rejected prediction request {}: {}", request_id, e);
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
        Err(e) => {
            warn!("Failed prediction request {}: {}", request_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Prediction error: {}", e),
                }),
            ))
        }
    }
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let model = state.predictor.model_status();
    Json(StatusResponse {
        model_loaded: model.model_loaded,
        model_path: model.model_path,
        classes: model.classes,
        loaded_at: model.loaded_at,
        prediction_count: state.predictor.prediction_count(),
    })
}
