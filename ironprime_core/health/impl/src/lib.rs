use ironprime_core_health_contracts::{HealthFeatureService, HealthStatus};
use ironprime_email_contracts::EmailService;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Email> {
    email: Email,
}

impl<Email> HealthFeatureServiceImpl<Email> {
    pub fn new(email: Email) -> Self {
        Self { email }
    }
}

impl<EmailS> HealthFeatureService for HealthFeatureServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping smtp server: {err}"))
            .is_ok();

        HealthStatus { email }
    }
}
