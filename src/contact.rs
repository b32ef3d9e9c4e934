//! Contact form validation and `mailto:` composition.
//!
//! DESIGN
//! ======
//! There is no submission endpoint. A valid form is handed to the visitor's
//! mail client through a generated `mailto:` link after a short simulated
//! delay. Validation produces one [`FieldError`] per failed field; the page
//! shows a single aggregate toast and the individual errors only reach the
//! log.
//!
//! TRADE-OFFS
//! ==========
//! The form is cleared after the handoff even when the browser refused the
//! navigation, so the fallback toast carries the literal address instead.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::SiteConfig;
use crate::toast::ToastKind;

pub const INVALID_FORM_MESSAGE: &str = "Please fill in all required fields correctly";
pub const SENT_MESSAGE: &str = "Thank you for your message! Your email client should open shortly.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex"));

/// Loose shape check: `local@domain.tld` with no whitespace and one `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameMissing,
    #[error("Email is required")]
    EmailMissing,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Subject is required")]
    SubjectMissing,
    #[error("Message is required")]
    MessageMissing,
}

/// The four contact fields, as typed. Missing inputs read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Every failed field, in form order. Empty means the form is valid.
    #[must_use]
    pub fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::NameMissing);
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError::EmailMissing);
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError::EmailInvalid);
        }
        if self.subject.trim().is_empty() {
            errors.push(FieldError::SubjectMissing);
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::MessageMissing);
        }
        errors
    }

    /// Plain-text mail body embedding the sender's details.
    #[must_use]
    pub fn mail_body(&self) -> String {
        format!("Name: {}\nEmail: {}\n\nMessage:\n{}", self.name, self.email, self.message)
    }

    /// `mailto:` URI addressed to `recipient` with encoded subject and body.
    #[must_use]
    pub fn mailto_uri(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.mail_body())
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadySending,
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),
}

/// Submit control state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    /// Control disabled and relabelled until the handoff completes.
    Sending { message: ContactMessage, original_label: String },
}

/// What the page shows once the handoff attempt is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub toast_message: String,
    pub toast_kind: ToastKind,
    /// Label to put back on the re-enabled submit control.
    pub restore_label: String,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    state: SubmitState,
    recipient: String,
    pending_label: String,
}

impl ContactForm {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            state: SubmitState::Idle,
            recipient: config.contact_address.clone(),
            pending_label: config.pending_label.clone(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self.state, SubmitState::Sending { .. })
    }

    /// Validate `message` and enter the sending state.
    ///
    /// Returns the label to show on the submit control while pending.
    pub fn begin(&mut self, message: ContactMessage, current_label: &str) -> Result<&str, SubmitError> {
        if self.is_sending() {
            return Err(SubmitError::AlreadySending);
        }
        let errors = message.field_errors();
        if !errors.is_empty() {
            tracing::debug!(?errors, "contact form rejected");
            return Err(SubmitError::Invalid(errors));
        }
        self.state = SubmitState::Sending { message, original_label: current_label.to_owned() };
        Ok(&self.pending_label)
    }

    /// `mailto:` URI for the submission in flight.
    #[must_use]
    pub fn pending_uri(&self) -> Option<String> {
        match &self.state {
            SubmitState::Sending { message, .. } => Some(message.mailto_uri(&self.recipient)),
            SubmitState::Idle => None,
        }
    }

    /// Leave the sending state after the handoff attempt.
    ///
    /// `opened` is whether the browser accepted the navigation to the link.
    pub fn complete(&mut self, opened: bool) -> Option<SubmitOutcome> {
        let SubmitState::Sending { original_label, .. } = std::mem::take(&mut self.state) else {
            return None;
        };
        let outcome = if opened {
            tracing::info!("mail client handoff");
            SubmitOutcome { toast_message: SENT_MESSAGE.to_owned(), toast_kind: ToastKind::Success, restore_label: original_label }
        } else {
            tracing::warn!("mail client handoff failed");
            SubmitOutcome {
                toast_message: fallback_message(&self.recipient),
                toast_kind: ToastKind::Info,
                restore_label: original_label,
            }
        };
        Some(outcome)
    }
}

/// Toast text when the mail client could not be opened.
#[must_use]
pub fn fallback_message(address: &str) -> String {
    format!("Thank you for your message! Please email me directly at {address}")
}
