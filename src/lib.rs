//! # Helpdesk Core
//!
//! Core business logic and domain models for a single-screen support
//! ticket tracker.
//!
//! This crate provides the fundamental types and operations for managing
//! tickets and the form draft that edits them, without any dependency on
//! specific UI implementations. All state is in-memory and process-lifetime
//! only.

pub mod domain;
pub mod error;

// Re-export commonly used types
pub use domain::{
    form::{DeleteConfirmation, Draft, DraftField, FormSession},
    store::TicketStore,
    ticket::{Rating, Ticket, TicketId, TicketStatus},
};
pub use error::{HelpdeskError, Result};
