pub mod handlers;
pub mod types;

use crate::features::ScalingParameters;
use crate::model::GaussianNb;
use crate::predictor::Predictor;
use crate::{Result, config::Config};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // Load the pre-trained artifacts. Absence or incompatibility is fatal:
    // without them the server cannot serve a single prediction.
    let scaling = ScalingParameters::load(&config.model.scaling_path).await?;
    let classifier = GaussianNb::load(&config.model.classifier_path).await?;

    let predictor = Predictor::new(Arc::new(classifier), scaling);

    // Create application state
    let app_state = handlers::AppState {
        predictor: Arc::new(predictor),
    };

    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/predict", post(handlers::predict))
        .route("/status", get(handlers::status))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
