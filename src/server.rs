// http server mode - the relay behind /api/filter-tweets

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::{Classifier, Error};

struct AppState {
    // none when the provider failed to come up; requests get a 503
    classifier: Option<Classifier>,
}

#[derive(Deserialize)]
struct FilterRequest {
    tweets: Vec<String>,
    #[serde(default)]
    prompt: Option<String>,
}

#[derive(Serialize)]
struct FilterResponse {
    results: Vec<bool>,
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
}

pub struct Server;

impl Server {
    pub fn router(classifier: Option<Classifier>) -> Router {
        let state = Arc::new(AppState { classifier });

        Router::new()
            .route("/", get(root))
            .route("/api/filter-tweets", post(filter_tweets))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    pub async fn run(classifier: Option<Classifier>, host: &str, port: u16) -> Result<(), Error> {
        match &classifier {
            Some(c) => info!(
                provider = c.provider_name(),
                policy = ?c.policy(),
                "classifier ready"
            ),
            None => error!("no classifier available, filter requests will get 503"),
        }

        let app = Self::router(classifier);

        let addr = format!("{host}:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::Server(e.to_string()))?;

        info!("server running at http://{addr}");

        axum::serve(listener, app)
            .await
            .map_err(|e| Error::Server(e.to_string()))?;

        Ok(())
    }
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "X-Filter Backend is running.",
    })
}

async fn filter_tweets(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FilterRequest>,
) -> Result<Json<FilterResponse>, (StatusCode, Json<ErrorResponse>)> {
    // reject before touching the provider
    if req.tweets.is_empty() {
        return Err(reject(Error::NoItems));
    }

    let Some(classifier) = &state.classifier else {
        return Err(reject(Error::Unavailable(
            "model client is not initialized".to_string(),
        )));
    };

    match classifier.classify(&req.tweets, req.prompt.as_deref()).await {
        Ok(results) => Ok(Json(FilterResponse { results })),
        Err(e) => {
            error!(error = %e, count = req.tweets.len(), "filter request failed");
            Err(reject(e))
        }
    }
}

fn reject(e: Error) -> (StatusCode, Json<ErrorResponse>) {
    (
        e.status(),
        Json(ErrorResponse {
            detail: e.to_string(),
        }),
    )
}
