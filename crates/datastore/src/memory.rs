//! In-memory store implementations.
//!
//! Both stores keep records in insertion order behind a single lock per
//! store, so every mutation is serialized with every other operation on the
//! same store. Nothing is persisted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entities::{Appointment, AppointmentId, User, UserId};
use tokio::sync::RwLock;

use crate::{AppointmentStore, StoreError, StoreResult, UserStore};

const INITIAL_CAPACITY: usize = 8;

#[derive(Debug)]
struct AppointmentTable {
    next_id: AppointmentId,
    appointments: Vec<Appointment>,
}

impl Default for AppointmentTable {
    fn default() -> Self {
        Self {
            next_id: 0,
            appointments: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }
}

/// In-memory appointment store.
///
/// Identifiers come from a per-store counter starting at zero and are never
/// handed out twice, even after the record holding one is deleted.
#[derive(Debug, Default)]
pub struct MemoryAppointmentStore {
    table: RwLock<AppointmentTable>,
}

impl MemoryAppointmentStore {
    /// Creates a new, empty in-memory appointment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentStore for MemoryAppointmentStore {
    async fn add_appointment(&self, mut appointment: Appointment) -> StoreResult<Appointment> {
        let mut table = self.table.write().await;
        appointment.id = table.next_id;
        table.next_id += 1;
        table.appointments.push(appointment.clone());
        tracing::debug!(appointment_id = appointment.id, "Appointment added");
        Ok(appointment)
    }

    async fn delete_appointment(&self, id: AppointmentId) -> StoreResult<()> {
        let mut table = self.table.write().await;
        match table.appointments.iter().position(|a| a.id == id) {
            Some(index) => {
                table.appointments.remove(index);
                tracing::debug!(appointment_id = id, "Appointment deleted");
            }
            None => tracing::debug!(appointment_id = id, "Appointment already absent"),
        }
        Ok(())
    }

    async fn update_appointment(&self, appointment: Appointment) -> StoreResult<()> {
        let mut table = self.table.write().await;
        let stored = table
            .appointments
            .iter_mut()
            .find(|a| a.id == appointment.id)
            .ok_or_else(|| StoreError::not_found("Appointment", appointment.id))?;
        *stored = appointment;
        tracing::debug!(appointment_id = stored.id, "Appointment updated");
        Ok(())
    }

    async fn query_by_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<Vec<Appointment>> {
        let table = self.table.read().await;
        Ok(table
            .appointments
            .iter()
            .filter(|a| a.is_within(start, end))
            .cloned()
            .collect())
    }
}

/// In-memory user store.
///
/// Users are stored with the identifier they arrive with. Nothing prevents
/// two users from sharing an identifier; keyed operations act on the first
/// match.
#[derive(Debug)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self {
            users: RwLock::new(Vec::with_capacity(INITIAL_CAPACITY)),
        }
    }
}

impl MemoryUserStore {
    /// Creates a new, empty in-memory user store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn add_user(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        users.push(user.clone());
        tracing::debug!(user_id = user.id, "User added");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> StoreResult<()> {
        let mut users = self.users.write().await;
        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                tracing::debug!(user_id = id, "User deleted");
            }
            None => tracing::debug!(user_id = id, "User already absent"),
        }
        Ok(())
    }

    async fn update_user(&self, user: User) -> StoreResult<()> {
        let mut users = self.users.write().await;
        let stored = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| StoreError::not_found("User", user.id))?;
        *stored = user;
        tracing::debug!(user_id = stored.id, "User updated");
        Ok(())
    }

    async fn authenticate(&self, email: &str, _password: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }
}
