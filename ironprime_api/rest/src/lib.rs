use std::net::IpAddr;

use anyhow::Context;
use axum::{http::HeaderValue, Router};
use ironprime_core_contact_contracts::ContactFeatureService;
use ironprime_core_health_contracts::HealthFeatureService;
use ironprime_utils::Apply;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact> {
    config: RestServerConfig,
    health: Health,
    contact: Contact,
}

#[derive(Debug, Clone, Default)]
pub struct RestServerConfig {
    /// Origins allowed by the CORS layer; `None` allows any origin.
    pub allowed_origins: Option<Vec<String>>,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
{
    pub fn new(config: RestServerConfig, health: Health, contact: Contact) -> Self {
        Self {
            config,
            health,
            contact,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router()?;
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> anyhow::Result<Router<()>> {
        let cors = cors_layer(self.config.allowed_origins)?;

        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .layer(cors);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        Ok(router)
    }
}

fn cors_layer(allowed_origins: Option<Vec<String>>) -> anyhow::Result<CorsLayer> {
    let origins = allowed_origins
        .map(|origins| {
            origins
                .iter()
                .map(|origin| origin.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()
        .context("Invalid allowed origin")?;

    Ok(CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(AllowOrigin::any())
        .apply_map(origins, |layer, origins| {
            layer.allow_origin(AllowOrigin::list(origins))
        }))
}
