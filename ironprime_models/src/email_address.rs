use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A validated email address used for mailbox headers (`From`, `To`).
///
/// Not to be confused with the `email` field of a contact submission, which is
/// free text supplied by the visitor and only ever rendered into the
/// notification body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(pub lettre::Address);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl FromStr for EmailAddress {
    type Err = <lettre::Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<EmailAddress> for lettre::message::Mailbox {
    fn from(value: EmailAddress) -> Self {
        Self::new(None, value.0)
    }
}
