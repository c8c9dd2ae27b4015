use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a ticket (e.g., HD1, HD2, HD100)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(String);

impl TicketId {
    // Default prefix for ticket IDs (could be made configurable in the future)
    const DEFAULT_PREFIX: &'static str = "HD";

    /// Creates a new TicketId from a counter
    pub fn new(counter: u32) -> Self {
        Self(format!("{}{}", Self::DEFAULT_PREFIX, counter))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TicketId {
    type Err = crate::error::HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Convert to uppercase for case-insensitive comparison
        let normalized = s.to_uppercase();
        let prefix = TicketId::DEFAULT_PREFIX;

        if normalized.starts_with(prefix) && normalized.len() > prefix.len() {
            // Verify the rest is a valid number
            if normalized[prefix.len()..].parse::<u32>().is_ok() {
                Ok(Self(normalized))
            } else {
                Err(crate::error::HelpdeskError::InvalidTicketId(s.to_string()))
            }
        } else {
            Err(crate::error::HelpdeskError::InvalidTicketId(s.to_string()))
        }
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Progress of a support ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Created,
    UnderAssistance,
    Completed,
}

impl TicketStatus {
    /// All statuses in display order, for rendering selectable options
    pub fn all() -> [TicketStatus; 3] {
        [Self::Created, Self::UnderAssistance, Self::Completed]
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "Created"),
            Self::UnderAssistance => write!(f, "Under Assistance"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = crate::error::HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created" => Ok(Self::Created),
            "under assistance" | "underassistance" => Ok(Self::UnderAssistance),
            "completed" => Ok(Self::Completed),
            _ => Err(crate::error::HelpdeskError::InvalidStatus(s.to_string())),
        }
    }
}

/// Satisfaction score for a completed ticket, constrained to 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a rating, rejecting values outside 1..=5
    pub fn new(value: u8) -> Result<Self, crate::error::HelpdeskError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(crate::error::HelpdeskError::RatingOutOfRange(value))
        }
    }

    /// Returns the numeric value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A support ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub rating: Option<Rating>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Creates a new ticket. Rating always starts empty, whatever the status.
    pub fn new(id: TicketId, title: String, description: String, status: TicketStatus) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            status,
            rating: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Changes the ticket status.
    ///
    /// Leaving `Completed` clears any rating; entering `Completed` keeps a
    /// pre-existing rating (a reopened-then-recompleted ticket keeps its old
    /// score until re-rated).
    pub fn set_status(&mut self, status: TicketStatus) {
        self.status = status;
        if self.status != TicketStatus::Completed {
            self.rating = None;
        }
        self.updated_at = Utc::now();
    }

    /// Applies a satisfaction rating. Only completed tickets can be rated.
    pub fn rate(&mut self, rating: Rating) -> Result<(), crate::error::HelpdeskError> {
        if self.status != TicketStatus::Completed {
            return Err(crate::error::HelpdeskError::TicketNotCompleted {
                id: self.id.to_string(),
                status: self.status.to_string(),
            });
        }
        self.rating = Some(rating);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Checks whether the ticket is completed
    pub fn is_completed(&self) -> bool {
        self.status == TicketStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_id_creation() {
        let id = TicketId::new(1);
        assert_eq!(id.as_str(), "HD1");

        let id = TicketId::new(42);
        assert_eq!(id.as_str(), "HD42");
    }

    #[test]
    fn test_ticket_id_parsing() {
        let id = TicketId::from_str("HD1").unwrap();
        assert_eq!(id.as_str(), "HD1");

        let id = TicketId::from_str("hd123").unwrap();
        assert_eq!(id.as_str(), "HD123");

        assert!(TicketId::from_str("INVALID").is_err());
        assert!(TicketId::from_str("HD").is_err());
        assert!(TicketId::from_str("HDabc").is_err());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            TicketStatus::from_str("Created").unwrap(),
            TicketStatus::Created
        );
        assert_eq!(
            TicketStatus::from_str("under assistance").unwrap(),
            TicketStatus::UnderAssistance
        );
        assert_eq!(
            TicketStatus::from_str("COMPLETED").unwrap(),
            TicketStatus::Completed
        );
        assert!(TicketStatus::from_str("archived").is_err());
    }

    #[test]
    fn test_status_display_round_trip() {
        for status in TicketStatus::all() {
            let parsed = TicketStatus::from_str(&status.to_string()).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());

        for value in 1..=5 {
            assert_eq!(Rating::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn test_new_ticket_has_no_rating() {
        let ticket = Ticket::new(
            TicketId::new(1),
            "Test".to_string(),
            "Desc".to_string(),
            TicketStatus::Completed,
        );
        assert!(ticket.rating.is_none());
    }

    #[test]
    fn test_rate_requires_completed_status() {
        let mut ticket = Ticket::new(
            TicketId::new(1),
            "Test".to_string(),
            "Desc".to_string(),
            TicketStatus::Created,
        );

        let err = ticket.rate(Rating::new(4).unwrap()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::HelpdeskError::TicketNotCompleted { .. }
        ));
        assert!(ticket.rating.is_none());
    }

    #[test]
    fn test_leaving_completed_clears_rating() {
        let mut ticket = Ticket::new(
            TicketId::new(1),
            "Test".to_string(),
            "Desc".to_string(),
            TicketStatus::Completed,
        );
        ticket.rate(Rating::new(5).unwrap()).unwrap();
        assert!(ticket.rating.is_some());

        ticket.set_status(TicketStatus::UnderAssistance);
        assert!(ticket.rating.is_none());
    }

    #[test]
    fn test_entering_completed_preserves_rating() {
        let mut ticket = Ticket::new(
            TicketId::new(1),
            "Test".to_string(),
            "Desc".to_string(),
            TicketStatus::Completed,
        );
        ticket.rate(Rating::new(3).unwrap()).unwrap();

        // Re-completing an already-completed ticket keeps the score
        ticket.set_status(TicketStatus::Completed);
        assert_eq!(ticket.rating, Some(Rating::new(3).unwrap()));
    }

    #[test]
    fn test_set_status_updates_updated_at() {
        let mut ticket = Ticket::new(
            TicketId::new(1),
            "Test".to_string(),
            "Desc".to_string(),
            TicketStatus::Created,
        );
        let initial_updated_at = ticket.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        ticket.set_status(TicketStatus::UnderAssistance);
        assert!(ticket.updated_at > initial_updated_at);
    }

    #[test]
    fn test_ticket_serialization_round_trip() {
        let mut ticket = Ticket::new(
            TicketId::new(1),
            "Fix login bug".to_string(),
            "Users cannot log in with special characters".to_string(),
            TicketStatus::Completed,
        );
        ticket.rate(Rating::new(4).unwrap()).unwrap();

        let json = serde_json::to_string(&ticket).unwrap();
        let deserialized: Ticket = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.id, ticket.id);
        assert_eq!(deserialized.status, TicketStatus::Completed);
        assert_eq!(deserialized.rating, Some(Rating::new(4).unwrap()));
    }
}
