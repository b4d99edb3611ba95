use ironprime_api_rest::{RestServer, RestServerConfig};
use ironprime_backup_file::FileBackupServiceImpl;
use ironprime_config::Config;
use ironprime_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use ironprime_core_health_impl::HealthFeatureServiceImpl;
use ironprime_email_contracts::EmailService;
use ironprime_templates_impl::TemplateServiceImpl;
use tracing::info;

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email).await?;
    email.ping().await?;

    let template = TemplateServiceImpl::default();
    let backup = FileBackupServiceImpl::new(config.contact.backup_file.clone());
    let contact = ContactFeatureServiceImpl::new(
        email.clone(),
        template,
        backup,
        ContactFeatureConfig {
            recipients: config.contact.recipients.clone().into(),
        },
    );
    let health = HealthFeatureServiceImpl::new(email);

    let server = RestServer::new(
        RestServerConfig {
            allowed_origins: config.http.allowed_origins.clone(),
        },
        health,
        contact,
    );
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
