//! Route handlers
//!
//! Handlers only gather raw fields and render; validation, fallback and
//! rounding all happen inside the pipeline.

use super::AppState;
use super::pages::{self, FormEcho};
use axum::Form;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use pricing_domain::{ModelKey, RawFeatureInput, RawValue};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info, instrument, warn};

/// Fields of the HTML prediction form. All optional: a missing field
/// surfaces as a validation message, not an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub(super) struct PredictForm {
    total_sqft: Option<String>,
    bath: Option<String>,
    bhk: Option<String>,
    location: Option<String>,
}

impl PredictForm {
    fn features(&self) -> RawFeatureInput {
        let field = |value: &Option<String>| value.as_deref().map(RawValue::from);
        RawFeatureInput {
            total_sqft: field(&self.total_sqft),
            bath: field(&self.bath),
            bhk: field(&self.bhk),
            location: field(&self.location),
        }
    }

    fn echo(&self) -> FormEcho {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        FormEcho {
            total_sqft: field(&self.total_sqft),
            bath: field(&self.bath),
            bhk: field(&self.bhk),
            location: field(&self.location),
        }
    }
}

#[instrument(skip_all)]
pub(super) async fn home(State(state): State<AppState>) -> Html<String> {
    Html(pages::home(state.catalog()))
}

#[instrument(skip_all)]
pub(super) async fn predict_form(State(state): State<AppState>) -> Html<String> {
    Html(pages::predict(
        state.catalog(),
        &ModelKey::default_selection(),
        None,
    ))
}

#[instrument(skip_all)]
pub(super) async fn predict_submit(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> Response {
    let models = ModelKey::default_selection();
    match state.predict(form.features(), Some(models.clone())) {
        Ok(outcome) => Html(pages::results(&form.echo(), &outcome)).into_response(),
        Err(e) => {
            info!("Rejected form submission: {}", e);
            let message = format!("Error making prediction: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Html(pages::predict(state.catalog(), &models, Some(&message))),
            )
                .into_response()
        }
    }
}

#[instrument(skip_all)]
pub(super) async fn api_predict(State(state): State<AppState>, body: Bytes) -> Response {
    let body: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            debug!("Malformed JSON body: {}", e);
            return api_error(format!("Invalid JSON body: {}", e));
        }
    };

    let models = match requested_models(&body) {
        Ok(models) => models,
        Err(message) => return api_error(message),
    };

    match state.predict(RawFeatureInput::from_json(&body), models) {
        Ok(outcome) => Json(json!({
            "status": "success",
            "predictions": outcome.price_map(),
            "input": body,
        }))
        .into_response(),
        Err(e) => {
            info!("Rejected API request: {}", e);
            api_error(e.to_string())
        }
    }
}

/// `models` is optional; a single string counts as a one-element list
fn requested_models(body: &Value) -> Result<Option<Vec<ModelKey>>, String> {
    match body.get("models") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(key)) => Ok(Some(vec![ModelKey::from(key.as_str())])),
        Some(Value::Array(keys)) => keys
            .iter()
            .map(|key| match key {
                Value::String(key) => Ok(ModelKey::from(key.as_str())),
                other => Err(format!("model keys must be strings, got {}", other)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(other) => Err(format!("models must be a list of model keys, got {}", other)),
    }
}

fn api_error(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "status": "error",
            "message": message,
        })),
    )
        .into_response()
}

#[instrument(skip_all)]
pub(super) async fn api_locations(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "locations": state.catalog(),
        "count": state.locations_available(),
    }))
}

#[instrument(skip_all)]
pub(super) async fn about() -> Html<String> {
    Html(pages::about())
}

#[instrument(skip_all)]
pub(super) async fn health(State(state): State<AppState>) -> Json<Value> {
    let models_loaded = state.models_loaded();
    if models_loaded == 0 {
        warn!("Health check: no model artifact loaded, serving fallback prices");
    }
    Json(json!({
        "status": "healthy",
        "models_loaded": models_loaded,
        "locations_available": state.locations_available(),
    }))
}
