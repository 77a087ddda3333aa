//! Store trait definitions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entities::{Appointment, AppointmentId, User, UserId};

use crate::StoreResult;

/// Trait for appointment storage operations.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Stores a new appointment and returns it as stored.
    ///
    /// The store assigns the next sequential identifier, overwriting whatever
    /// `id` the caller supplied.
    async fn add_appointment(&self, appointment: Appointment) -> StoreResult<Appointment>;

    /// Deletes an appointment.
    ///
    /// Deleting an identifier that is not stored succeeds without effect.
    async fn delete_appointment(&self, id: AppointmentId) -> StoreResult<()>;

    /// Replaces the stored appointment with the same `id` in full.
    ///
    /// Returns [`StoreError::NotFound`](crate::StoreError::NotFound) if no
    /// appointment has that `id`.
    async fn update_appointment(&self, appointment: Appointment) -> StoreResult<()>;

    /// Lists every appointment lying entirely within `[start, end]`.
    ///
    /// Both bounds are inclusive. Appointments that only overlap the window
    /// are not returned.
    async fn query_by_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<Vec<Appointment>>;
}

/// Trait for user storage operations.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Stores a new user and returns it as stored.
    ///
    /// Unlike [`AppointmentStore::add_appointment`], the caller's `id` is kept
    /// verbatim.
    async fn add_user(&self, user: User) -> StoreResult<User>;

    /// Deletes a user.
    ///
    /// Deleting an identifier that is not stored succeeds without effect.
    /// Appointments referencing the user are left untouched.
    async fn delete_user(&self, id: UserId) -> StoreResult<()>;

    /// Replaces the stored user with the same `id` in full.
    ///
    /// Returns [`StoreError::NotFound`](crate::StoreError::NotFound) if no
    /// user has that `id`.
    async fn update_user(&self, user: User) -> StoreResult<()>;

    /// Looks up the first user whose email matches exactly.
    ///
    /// Returns `Ok(None)` when nobody matches. Users carry no stored
    /// credential, so the in-memory store accepts the password but matches
    /// on the email alone.
    async fn authenticate(&self, email: &str, password: &str) -> StoreResult<Option<User>>;

    /// Lists all users.
    async fn list_users(&self) -> StoreResult<Vec<User>>;
}
