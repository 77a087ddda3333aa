//! Appointment entity definitions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::UserId;

/// Identifier assigned to an appointment by its store.
pub type AppointmentId = i64;

/// A booked slot on the practice calendar.
///
/// The `*_id` fields reference users by id but are not validated against any
/// user store. The `*_name` fields are denormalized display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Store-assigned identifier. Ignored on create.
    #[serde(default)]
    pub id: AppointmentId,
    /// When the appointment begins.
    pub start: DateTime<Utc>,
    /// When the appointment ends. Expected, not enforced, to follow `start`.
    pub end: DateTime<Utc>,
    /// Whether the customer asked for a dentist to be present.
    #[serde(default)]
    pub req_dentist: bool,
    #[serde(default)]
    pub customer_id: UserId,
    #[serde(default)]
    pub hygienist_id: UserId,
    #[serde(default)]
    pub dentist_id: UserId,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub hygienist_name: String,
    #[serde(default)]
    pub dentist_name: String,
}

impl Appointment {
    /// Creates an unassigned appointment covering `[start, end]`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            start,
            end,
            req_dentist: false,
            customer_id: 0,
            hygienist_id: 0,
            dentist_id: 0,
            customer_name: String::new(),
            hygienist_name: String::new(),
            dentist_name: String::new(),
        }
    }

    /// Creates an appointment starting at `start` and lasting `length`.
    pub fn starting_at(start: DateTime<Utc>, length: Duration) -> Self {
        Self::new(start, start + length)
    }

    /// Sets the customer reference.
    pub fn with_customer(mut self, id: UserId, name: impl Into<String>) -> Self {
        self.customer_id = id;
        self.customer_name = name.into();
        self
    }

    /// Sets the hygienist reference.
    pub fn with_hygienist(mut self, id: UserId, name: impl Into<String>) -> Self {
        self.hygienist_id = id;
        self.hygienist_name = name.into();
        self
    }

    /// Sets the dentist reference.
    pub fn with_dentist(mut self, id: UserId, name: impl Into<String>) -> Self {
        self.dentist_id = id;
        self.dentist_name = name.into();
        self
    }

    /// Marks whether a dentist was requested.
    pub fn with_req_dentist(mut self, req_dentist: bool) -> Self {
        self.req_dentist = req_dentist;
        self
    }

    /// Returns true if this appointment lies entirely within `[start, end]`.
    ///
    /// Both bounds are inclusive. An appointment that merely overlaps the
    /// window is not contained in it.
    pub fn is_within(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start >= start && self.end <= end
    }
}
