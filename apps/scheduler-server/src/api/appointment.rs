//! Appointment API endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, Utc};
use entities::{Appointment, AppointmentId};
use serde::Deserialize;

use super::EmptyResponse;
use crate::error::{ServerError, ServerResult};
use crate::state::SharedState;

/// Query parameters for a range lookup, as Unix epoch milliseconds.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Body of an appointment update.
///
/// Unlike creation, the target `id` is required.
#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub id: AppointmentId,
    #[serde(flatten)]
    pub appointment: Appointment,
}

/// Body of an appointment deletion.
#[derive(Debug, Deserialize)]
pub struct DeleteAppointmentRequest {
    pub id: AppointmentId,
}

/// Parses an epoch-millisecond bound. Zero is rejected along with garbage.
fn parse_millis(raw: Option<&str>, name: &str) -> ServerResult<DateTime<Utc>> {
    raw.and_then(|v| v.parse::<i64>().ok())
        .filter(|ms| *ms != 0)
        .and_then(DateTime::from_timestamp_millis)
        .ok_or_else(|| ServerError::InvalidRequest(format!("{name} time is invalid")))
}

/// Lists appointments lying entirely within the requested window.
pub async fn query_appointments(
    State(state): State<SharedState>,
    Query(query): Query<RangeQuery>,
) -> ServerResult<Json<Vec<Appointment>>> {
    let start = parse_millis(query.start_date.as_deref(), "start")?;
    let end = parse_millis(query.end_date.as_deref(), "end")?;

    let appointments = state.appointments.query_by_range(start, end).await?;

    tracing::debug!(%start, %end, count = appointments.len(), "Appointments queried");

    Ok(Json(appointments))
}

/// Creates an appointment. Any `id` in the body is replaced by the store's.
pub async fn add_appointment(
    State(state): State<SharedState>,
    Json(appointment): Json<Appointment>,
) -> ServerResult<Json<Appointment>> {
    let appointment = state.appointments.add_appointment(appointment).await?;

    tracing::info!(appointment_id = appointment.id, "Appointment created");

    Ok(Json(appointment))
}

/// Replaces an existing appointment.
pub async fn update_appointment(
    State(state): State<SharedState>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> ServerResult<Json<EmptyResponse>> {
    let appointment_id = request.id;
    let appointment = Appointment {
        id: appointment_id,
        ..request.appointment
    };
    state.appointments.update_appointment(appointment).await?;

    tracing::info!(appointment_id, "Appointment updated");

    Ok(Json(EmptyResponse {}))
}

/// Deletes an appointment. Unknown ids succeed.
pub async fn delete_appointment(
    State(state): State<SharedState>,
    Json(request): Json<DeleteAppointmentRequest>,
) -> ServerResult<Json<EmptyResponse>> {
    state.appointments.delete_appointment(request.id).await?;

    tracing::info!(appointment_id = request.id, "Appointment deleted");

    Ok(Json(EmptyResponse {}))
}
