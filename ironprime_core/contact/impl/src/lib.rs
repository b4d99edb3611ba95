use std::sync::Arc;

use ironprime_backup_contracts::BackupService;
use ironprime_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use ironprime_email_contracts::{Email, EmailService};
use ironprime_models::{contact::ContactSubmission, email_address::EmailAddress};
use ironprime_templates_contracts::{ContactNotificationTemplate, TemplateService};
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Email, Template, Backup> {
    email: Email,
    template: Template,
    backup: Backup,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub recipients: Arc<[EmailAddress]>,
}

impl<Email, Template, Backup> ContactFeatureServiceImpl<Email, Template, Backup> {
    pub fn new(email: Email, template: Template, backup: Backup, config: ContactFeatureConfig) -> Self {
        Self {
            email,
            template,
            backup,
            config,
        }
    }
}

impl<EmailS, TemplateS, BackupS> ContactFeatureService
    for ContactFeatureServiceImpl<EmailS, TemplateS, BackupS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
    BackupS: BackupService,
{
    async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactSubmitError> {
        // The name is interpolated into the subject header. The email field
        // stays in the body, but gets the same blanket treatment.
        if contains_crlf(&submission.name) || contains_crlf(&submission.email) {
            error!(
                "Rejected contact submission with CR/LF in header fields (email: {:?})",
                *submission.email
            );
            return Err(ContactSubmitError::InvalidHeader);
        }

        info!(
            "New contact submission from {} ({})",
            *submission.name, *submission.email
        );

        let email = Email {
            recipients: self.config.recipients.to_vec(),
            subject: format!("🔨 Nuevo Contacto IronPrime: {}", *submission.name),
            text_body: text_body(&submission),
            html_body: Some(self.template.render(&notification(&submission))?),
        };

        if !self.email.send(email).await? {
            return Err(ContactSubmitError::Send);
        }

        info!("Contact notification sent for {}", *submission.name);

        // Backup failure must never fail the submission.
        if let Err(err) = self.backup.append(submission).await {
            warn!("Failed to write contact backup: {err:#}");
        }

        Ok(())
    }
}

fn contains_crlf(value: &str) -> bool {
    value.contains(['\r', '\n'])
}

fn text_body(submission: &ContactSubmission) -> String {
    format!(
        "NUEVO CONTACTO - IRONPRIME CONSTRUCCIÓN\n\
         ========================================\n\
         \n\
         Nombre: {}\n\
         Email: {}\n\
         Teléfono: {}\n\
         Tipo de proyecto: {}\n\
         \n\
         Mensaje:\n\
         {}\n\
         \n\
         Fecha: {}\n",
        *submission.name,
        *submission.email,
        submission.phone,
        submission.project_type,
        *submission.message,
        submission.received_at.format("%d/%m/%Y %H:%M:%S"),
    )
}

fn notification(submission: &ContactSubmission) -> ContactNotificationTemplate {
    ContactNotificationTemplate {
        name: (*submission.name).clone(),
        email: (*submission.email).clone(),
        phone: submission.phone.clone(),
        project_type: submission.project_type.clone(),
        message: (*submission.message).clone(),
        received_at: submission
            .received_at
            .format("%d/%m/%Y a las %H:%M:%S")
            .to_string(),
    }
}
