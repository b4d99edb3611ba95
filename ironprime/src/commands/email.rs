use anyhow::ensure;
use clap::Subcommand;
use ironprime_config::Config;
use ironprime_email_contracts::{Email, EmailService};
use ironprime_email_impl::EmailServiceImpl;
use ironprime_models::email_address::EmailAddress;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddress },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddress) -> anyhow::Result<()> {
    let email_service = EmailServiceImpl::new(&config.email.smtp_url, config.email.from).await?;

    let ok = email_service
        .send(Email {
            recipients: vec![recipient],
            subject: "Email Deliverability Test".into(),
            text_body: "Email deliverability seems to be working!".into(),
            html_body: None,
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
