//! Contact form - validation and delivery
//!
//! The form checks its fields locally, then hands the message to an
//! `Outbox`. Delivery itself is opaque: the shipped outbox opens the
//! platform mail client through a `mailto:` link.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use eframe::egui;
use regex::Regex;
use thiserror::Error;

/// Address shown when delivery fails and used by the mailto outbox
pub const CONTACT_ADDRESS: &str = "thirugst7@gmail.com";

/// How long the success banner stays up, in seconds
pub const SENT_BANNER_SECS: f64 = 6.0;
/// How long the failure banner stays up, in seconds
pub const FAILED_BANNER_SECS: f64 = 8.0;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Errors that can occur while delivering a message
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Mail client could not be opened: {0}")]
    MailClient(String),
}

/// A field that failed validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Name,
    Email,
    Message,
}

impl FieldError {
    /// Inline hint shown under the field
    pub fn hint(&self) -> &'static str {
        match self {
            FieldError::Name => "Please enter your name.",
            FieldError::Email => "Please enter a valid email address.",
            FieldError::Message => "Please enter a message.",
        }
    }
}

/// A validated message ready for delivery
#[derive(Clone, Debug, PartialEq)]
pub struct OutgoingMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    /// Local time the message was composed, already formatted
    pub sent_at: String,
}

/// Send time as shown in the message body, e.g. "18 Oct 2026, 3:04 pm"
pub fn format_sent_at(time: NaiveDateTime) -> String {
    time.format("%-d %b %Y, %-I:%M %P").to_string()
}

/// Where validated messages go
pub trait Outbox {
    fn send(&mut self, message: &OutgoingMessage) -> Result<(), ContactError>;
}

/// Delivers by opening a prefilled `mailto:` link
pub struct MailtoOutbox {
    ctx: egui::Context,
    recipient: String,
}

impl MailtoOutbox {
    pub fn new(ctx: egui::Context, recipient: impl Into<String>) -> Self {
        Self {
            ctx,
            recipient: recipient.into(),
        }
    }
}

/// Build the `mailto:` URL for a message
pub fn mailto_url(recipient: &str, message: &OutgoingMessage) -> String {
    // form_urlencoded writes spaces as '+', which mail clients show literally
    let encode = |s: &str| url::form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20");

    let subject = format!("Portfolio contact from {}", message.from_name);
    let body = format!(
        "{}\n\n{} <{}>\nSent {}",
        message.message, message.from_name, message.from_email, message.sent_at
    );
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        encode(&subject),
        encode(&body)
    )
}

impl Outbox for MailtoOutbox {
    fn send(&mut self, message: &OutgoingMessage) -> Result<(), ContactError> {
        let url = mailto_url(&self.recipient, message);
        if url.len() > 2000 {
            return Err(ContactError::MailClient(format!(
                "message too long for a mail link ({} bytes)",
                url.len()
            )));
        }
        self.ctx.open_url(egui::OpenUrl::new_tab(url));
        Ok(())
    }
}

/// Outcome banner shown under the form for a limited time
#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub success: bool,
    pub text: String,
    shown_at: f64,
    duration: f64,
}

impl Banner {
    pub fn is_visible(&self, now: f64) -> bool {
        now >= self.shown_at && now - self.shown_at < self.duration
    }

    /// Seconds until the banner hides
    pub fn remaining(&self, now: f64) -> f64 {
        (self.shown_at + self.duration - now).max(0.0)
    }
}

/// Contact form state
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    errors: Vec<FieldError>,
    banner: Option<Banner>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every field, reporting all failures at once
    pub fn validate(&self) -> Result<OutgoingMessage, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::Name);
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.push(FieldError::Email);
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::Message);
        }

        if errors.is_empty() {
            Ok(OutgoingMessage {
                from_name: self.name.trim().to_string(),
                from_email: self.email.clone(),
                message: self.message.trim().to_string(),
                sent_at: format_sent_at(chrono::Local::now().naive_local()),
            })
        } else {
            Err(errors)
        }
    }

    /// Validate and deliver
    ///
    /// `now` is the current time in seconds, used to expire the banner.
    /// Returns whether the message was handed off.
    pub fn submit(&mut self, outbox: &mut dyn Outbox, now: f64) -> bool {
        self.banner = None;

        let message = match self.validate() {
            Ok(message) => message,
            Err(errors) => {
                self.errors = errors;
                return false;
            }
        };
        self.errors.clear();

        match outbox.send(&message) {
            Ok(()) => {
                log::info!("Contact message handed off");
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.banner = Some(Banner {
                    success: true,
                    text: "✓ Message sent! I'll get back to you soon.".to_string(),
                    shown_at: now,
                    duration: SENT_BANNER_SECS,
                });
                true
            }
            Err(e) => {
                log::error!("Contact delivery failed: {}", e);
                self.banner = Some(Banner {
                    success: false,
                    text: format!(
                        "✗ Failed to send. Please email {} directly.",
                        CONTACT_ADDRESS
                    ),
                    shown_at: now,
                    duration: FAILED_BANNER_SECS,
                });
                false
            }
        }
    }

    pub fn has_error(&self, field: FieldError) -> bool {
        self.errors.contains(&field)
    }

    /// The outcome banner, if it should still be shown at `now`
    pub fn banner(&self, now: f64) -> Option<&Banner> {
        self.banner.as_ref().filter(|b| b.is_visible(now))
    }

    /// Seconds until the visible banner hides, `None` when nothing is shown
    pub fn banner_remaining(&self, now: f64) -> Option<f64> {
        self.banner(now).map(|b| b.remaining(now))
    }
}
