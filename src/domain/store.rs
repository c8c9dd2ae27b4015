use crate::{
    domain::ticket::{Rating, Ticket, TicketId, TicketStatus},
    error::{HelpdeskError, Result},
};
use serde::{Deserialize, Serialize};

/// In-memory collection of tickets, kept in insertion order.
///
/// The store is the only write path to the ticket list; the presentation
/// layer reads through [`TicketStore::list`] and funnels every user intent
/// through the mutating methods below.
#[derive(Debug, Serialize, Deserialize)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
    next_ticket_number: u32,
}

impl TicketStore {
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
            next_ticket_number: 1,
        }
    }

    /// Generates the next ticket ID. IDs are never reused, even after deletes.
    fn next_ticket_id(&mut self) -> TicketId {
        let id = TicketId::new(self.next_ticket_number);
        self.next_ticket_number += 1;
        id
    }

    /// Rejects a field that is empty once surrounding whitespace is ignored.
    /// The stored value keeps the caller's whitespace as given.
    fn validate_field(name: &'static str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            Err(HelpdeskError::EmptyField(name))
        } else {
            Ok(())
        }
    }

    /// Creates a ticket with a fresh ID. The rating starts empty regardless
    /// of the initial status.
    pub fn create(
        &mut self,
        title: String,
        description: String,
        status: TicketStatus,
    ) -> Result<Ticket> {
        Self::validate_field("Title", &title)?;
        Self::validate_field("Description", &description)?;

        let id = self.next_ticket_id();
        let ticket = Ticket::new(id, title, description, status);
        self.tickets.push(ticket.clone());
        Ok(ticket)
    }

    /// Updates a ticket in place. Leaving `Completed` clears its rating;
    /// staying in or entering `Completed` preserves it.
    pub fn update(
        &mut self,
        id: &TicketId,
        title: String,
        description: String,
        status: TicketStatus,
    ) -> Result<Ticket> {
        Self::validate_field("Title", &title)?;
        Self::validate_field("Description", &description)?;

        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| HelpdeskError::TicketNotFound(id.to_string()))?;

        ticket.title = title;
        ticket.description = description;
        ticket.set_status(status);
        Ok(ticket.clone())
    }

    /// Removes a ticket. Deleting an absent ID is a no-op.
    pub fn delete(&mut self, id: &TicketId) {
        self.tickets.retain(|t| &t.id != id);
    }

    /// Rates a ticket. The value is validated before the lookup, and only
    /// completed tickets accept a rating.
    pub fn rate(&mut self, id: &TicketId, value: u8) -> Result<Ticket> {
        let rating = Rating::new(value)?;

        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| HelpdeskError::TicketNotFound(id.to_string()))?;

        ticket.rate(rating)?;
        Ok(ticket.clone())
    }

    /// Looks up a ticket by ID
    pub fn get(&self, id: &TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| &t.id == id)
    }

    /// All tickets, in insertion order
    pub fn list(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}
