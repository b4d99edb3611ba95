use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    routing, Json, Router,
};
use chrono::Local;
use ironprime_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use ironprime_models::contact::ContactForm;

use super::{error, internal_server_error, success};

/// The contact endpoint is called cross-origin by the website frontend; it is
/// guarded by the CORS layer only and deliberately carries no same-origin
/// token check. The router restricts it to POST.
pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contacto/", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Response {
    let Ok(Json(form)) = payload else {
        return error(StatusCode::BAD_REQUEST, "Formato de datos inválidos");
    };

    let submission = match form.into_submission(Local::now()) {
        Ok(submission) => submission,
        Err(err) => return error(StatusCode::BAD_REQUEST, err.to_string()),
    };

    match service.submit(submission).await {
        Ok(()) => success("¡Gracias por contactarnos! Te responderemos pronto."),
        Err(ContactSubmitError::InvalidHeader) => {
            error(StatusCode::BAD_REQUEST, "Datos inválidos detectados")
        }
        Err(ContactSubmitError::Send) => {
            internal_server_error(anyhow!("smtp server rejected the notification email"))
        }
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request},
    };
    use ironprime_core_contact_contracts::MockContactFeatureService;
    use ironprime_models::contact::{PHONE_NOT_PROVIDED, PROJECT_NOT_SPECIFIED};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn submit_ok() {
        // Arrange
        let mut service = MockContactFeatureService::new();
        service
            .expect_submit()
            .once()
            .withf(|submission| {
                *submission.name == "Ana"
                    && *submission.email == "ana@x.com"
                    && submission.phone == PHONE_NOT_PROVIDED
                    && submission.project_type == PROJECT_NOT_SPECIFIED
                    && *submission.message == "Hola"
            })
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));

        // Act
        let (status, body) = request(
            service,
            post(r#"{"nombre":"Ana","email":"ana@x.com","mensaje":"Hola"}"#),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "¡Gracias por contactarnos! Te responderemos pronto."
            })
        );
    }

    #[tokio::test]
    async fn missing_fields() {
        // Arrange: no expectations, the service must not be called
        let service = MockContactFeatureService::new();

        // Act
        let (status, body) = request(service, post(r#"{"email":"ana@x.com"}"#)).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "Campos requeridos faltantes: nombre, mensaje"
            })
        );
    }

    #[tokio::test]
    async fn name_too_long() {
        let payload = json!({
            "nombre": "x".repeat(101),
            "email": "ana@x.com",
            "mensaje": "Hola"
        });

        let (status, body) =
            request(MockContactFeatureService::new(), post(&payload.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "Los campos nombre y email no pueden exceder 100 caracteres"
            })
        );
    }

    #[tokio::test]
    async fn message_too_long() {
        let payload = json!({
            "nombre": "Ana",
            "email": "ana@x.com",
            "mensaje": "x".repeat(2001)
        });

        let (status, body) =
            request(MockContactFeatureService::new(), post(&payload.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "El mensaje no puede exceder 2000 caracteres"
            })
        );
    }

    #[tokio::test]
    async fn invalid_json() {
        let (status, body) = request(MockContactFeatureService::new(), post("not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"success": false, "error": "Formato de datos inválidos"})
        );
    }

    #[tokio::test]
    async fn header_injection() {
        // Arrange
        let mut service = MockContactFeatureService::new();
        service
            .expect_submit()
            .once()
            .return_once(|_| Box::pin(std::future::ready(Err(ContactSubmitError::InvalidHeader))));

        // Act
        let (status, body) = request(
            service,
            post(r#"{"nombre":"Ana\nBcc: x@y.com","email":"ana@x.com","mensaje":"Hola"}"#),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"success": false, "error": "Datos inválidos detectados"})
        );
    }

    #[tokio::test]
    async fn email_delivery_failure() {
        // Arrange
        let mut service = MockContactFeatureService::new();
        service
            .expect_submit()
            .once()
            .return_once(|_| Box::pin(std::future::ready(Err(ContactSubmitError::Send))));

        // Act
        let (status, body) = request(
            service,
            post(r#"{"nombre":"Ana","email":"ana@x.com","mensaje":"Hola"}"#),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "Ocurrió un error al procesar tu solicitud. Por favor intenta nuevamente."
            })
        );
    }

    #[tokio::test]
    async fn get_is_rejected() {
        let response = router(Arc::new(MockContactFeatureService::new()))
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/api/contacto/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    fn post(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/contacto/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn request(
        service: MockContactFeatureService,
        request: Request<Body>,
    ) -> (StatusCode, serde_json::Value) {
        let response = router(Arc::new(service)).oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }
}
