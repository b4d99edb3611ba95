use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiFailure, ApiSuccess};

pub mod contact;
pub mod health;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Ocurrió un error al procesar tu solicitud. Por favor intenta nuevamente.",
    )
}

fn success(message: &'static str) -> Response {
    Json(ApiSuccess {
        success: true,
        message,
    })
    .into_response()
}

fn error(code: StatusCode, error: impl Into<String>) -> Response {
    (
        code,
        Json(ApiFailure {
            success: false,
            error: error.into(),
        }),
    )
        .into_response()
}
