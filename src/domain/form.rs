use crate::{
    domain::store::TicketStore,
    domain::ticket::{Ticket, TicketId, TicketStatus},
    error::{HelpdeskError, Result},
};
use serde::{Deserialize, Serialize};

/// Uncommitted edit state for the ticket form.
///
/// `target` is `None` while creating a new ticket and holds the ticket's ID
/// while editing an existing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub target: Option<TicketId>,
}

impl Draft {
    fn empty() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TicketStatus::Created,
            target: None,
        }
    }

    fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            status: ticket.status,
            target: Some(ticket.id.clone()),
        }
    }
}

/// A single field edit coming from the form inputs
#[derive(Debug, Clone)]
pub enum DraftField {
    Title(String),
    Description(String),
    Status(TicketStatus),
}

/// Lifecycle of the ticket form modal.
///
/// A draft is present exactly while the modal is open. `start_create` and
/// `start_edit` open it, `cancel` and a successful `commit` close it; a
/// failed `commit` keeps the draft so the user can correct the input.
#[derive(Debug, Default)]
pub struct FormSession {
    draft: Option<Draft>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the form with an empty draft for a new ticket
    pub fn start_create(&mut self) {
        self.draft = Some(Draft::empty());
    }

    /// Opens the form seeded from an existing ticket
    pub fn start_edit(&mut self, ticket: &Ticket) {
        self.draft = Some(Draft::from_ticket(ticket));
    }

    /// Applies one field edit to the active draft. Validation is deferred to
    /// [`FormSession::commit`]. Ignored when no draft is active.
    pub fn set_field(&mut self, field: DraftField) {
        if let Some(draft) = &mut self.draft {
            match field {
                DraftField::Title(title) => draft.title = title,
                DraftField::Description(description) => draft.description = description,
                DraftField::Status(status) => draft.status = status,
            }
        }
    }

    /// Saves the draft into the store, creating or updating depending on the
    /// draft's target. On success the form closes and the resulting ticket is
    /// returned; on failure the store is untouched and the draft stays open.
    pub fn commit(&mut self, store: &mut TicketStore) -> Result<Ticket> {
        let draft = self.draft.as_ref().ok_or(HelpdeskError::NoActiveDraft)?;

        let result = match &draft.target {
            None => store.create(draft.title.clone(), draft.description.clone(), draft.status),
            Some(id) => store.update(
                id,
                draft.title.clone(),
                draft.description.clone(),
                draft.status,
            ),
        };

        if result.is_ok() {
            self.draft = None;
        }
        result
    }

    /// Discards the draft without touching the store
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// The active draft, if the form is open
    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Checks whether the open form is editing an existing ticket
    pub fn is_editing(&self) -> bool {
        self.draft
            .as_ref()
            .map(|d| d.target.is_some())
            .unwrap_or(false)
    }
}

/// Two-step delete intent: a delete request is held here until the user
/// confirms or cancels it.
#[derive(Debug, Default)]
pub struct DeleteConfirmation {
    pending: Option<TicketId>,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a delete request, replacing any earlier pending one
    pub fn request(&mut self, id: TicketId) {
        self.pending = Some(id);
    }

    /// The ticket awaiting confirmation, if any
    pub fn pending(&self) -> Option<&TicketId> {
        self.pending.as_ref()
    }

    /// Performs the pending delete. A no-op when nothing is pending; the
    /// delete itself is idempotent, so a ticket removed in the meantime is
    /// not an error.
    pub fn confirm(&mut self, store: &mut TicketStore) {
        if let Some(id) = self.pending.take() {
            store.delete(&id);
        }
    }

    /// Drops the pending request without touching the store
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
