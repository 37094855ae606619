//! Showcase module - the page content in front of the background
//!
//! This module provides:
//! - Static project catalog
//! - Project modal with a wrapping slide carousel
//! - Contact form validation and delivery

mod carousel;
mod contact;
mod projects;

pub use carousel::{ModalKey, ProjectModal};
pub use contact::{ContactForm, FieldError, MailtoOutbox, CONTACT_ADDRESS};
pub use projects::catalog;
