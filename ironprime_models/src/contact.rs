use chrono::{DateTime, Local};
use nutype::nutype;
use serde::Deserialize;
use thiserror::Error;

/// Sentinel rendered when the visitor left the phone field out.
pub const PHONE_NOT_PROVIDED: &str = "No proporcionado";
/// Sentinel rendered when the visitor left the project type field out.
pub const PROJECT_NOT_SPECIFIED: &str = "No especificado";

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactEmail(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 2000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageText(String);

/// A validated contact submission, created per request and discarded after
/// the notification email and the backup append.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub phone: String,
    pub project_type: String,
    pub message: ContactMessageText,
    pub received_at: DateTime<Local>,
}

/// The raw wire form as posted by the website (`POST /api/contacto/`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    #[serde(rename = "tipoProyecto")]
    pub tipo_proyecto: Option<String>,
    pub mensaje: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("Campos requeridos faltantes: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Los campos nombre y email no pueden exceder 100 caracteres")]
    NameOrEmailTooLong,
    #[error("El mensaje no puede exceder 2000 caracteres")]
    MessageTooLong,
}

impl ContactForm {
    /// Validates the form and turns it into a [`ContactSubmission`].
    ///
    /// A required field that is absent, `null` or blank after trimming counts
    /// as missing; all missing fields are reported at once, by their wire
    /// names. Length ceilings are checked on the trimmed values.
    pub fn into_submission(
        self,
        received_at: DateTime<Local>,
    ) -> Result<ContactSubmission, ContactFormError> {
        let required = [
            ("nombre", &self.nombre),
            ("email", &self.email),
            ("mensaje", &self.mensaje),
        ];
        let missing = required
            .iter()
            .filter(|(_, value)| !matches!(value.as_deref().map(str::trim), Some(v) if !v.is_empty()))
            .map(|&(field, _)| field)
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(ContactFormError::MissingFields(missing));
        }

        let name = ContactName::try_new(self.nombre.unwrap_or_default())
            .map_err(|_| ContactFormError::NameOrEmailTooLong)?;
        let email = ContactEmail::try_new(self.email.unwrap_or_default())
            .map_err(|_| ContactFormError::NameOrEmailTooLong)?;
        let message = ContactMessageText::try_new(self.mensaje.unwrap_or_default())
            .map_err(|_| ContactFormError::MessageTooLong)?;

        Ok(ContactSubmission {
            name,
            email,
            phone: self
                .telefono
                .map_or_else(|| PHONE_NOT_PROVIDED.into(), |v| v.trim().to_owned()),
            project_type: self
                .tipo_proyecto
                .map_or_else(|| PROJECT_NOT_SPECIFIED.into(), |v| v.trim().to_owned()),
            message,
            received_at,
        })
    }
}
