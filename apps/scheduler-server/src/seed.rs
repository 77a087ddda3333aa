//! Demo data loaded at startup.

use chrono::{Duration, Utc};
use datastore::{AppointmentStore, StoreResult, UserStore};
use entities::{Appointment, Role, User};

/// Email of the seeded administrator.
pub const DEMO_ADMIN_EMAIL: &str = "test@test.com";

/// Adds a default administrator and one two-hour appointment starting now.
pub async fn seed_demo_data(
    appointments: &dyn AppointmentStore,
    users: &dyn UserStore,
) -> StoreResult<()> {
    let admin = User::new(0, DEMO_ADMIN_EMAIL)
        .with_name("Admin", "Jones")
        .with_role(Role::Admin);
    users.add_user(admin).await?;

    let appointment = Appointment::starting_at(Utc::now(), Duration::minutes(120))
        .with_customer(1, "Joe")
        .with_hygienist(2, "Bob")
        .with_dentist(3, "Jill")
        .with_req_dentist(true);
    let appointment = appointments.add_appointment(appointment).await?;

    tracing::info!(appointment_id = appointment.id, "Demo data seeded");

    Ok(())
}
