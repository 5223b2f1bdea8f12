use crate::backend::AppointmentBackend;
use crate::error::BookingError;
use crate::types::Appointment;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Single source of truth for confirmed appointments. Handles are cheap to
/// clone and share one appointment list; every mutation re-serializes the
/// full list to the backend before the call returns.
#[derive(Debug, Clone)]
pub struct AppointmentStore<B: AppointmentBackend> {
    appointments: Arc<Mutex<Vec<Appointment>>>,
    backend: B,
}

impl<B: AppointmentBackend> AppointmentStore<B> {
    pub fn new(backend: B) -> Self {
        let appointments = backend.load();
        debug!(count = appointments.len(), "Loaded persisted appointments");
        Self {
            appointments: Arc::new(Mutex::new(appointments)),
            backend,
        }
    }

    /// Read-only snapshot of the confirmed appointments.
    pub fn appointments(&self) -> Vec<Appointment> {
        self.appointments.lock().unwrap().clone()
    }

    /// Confirms a booking. The collision check and the append happen under
    /// one lock, so a slot that was still open when the caller rendered it
    /// is re-checked authoritatively here. Rejections leave the list
    /// untouched and unpersisted.
    pub fn add_appointment(&self, appointment: Appointment) -> Result<(), BookingError> {
        let mut appointments = self.appointments.lock().unwrap();

        if appointments.iter().any(|existing| existing.id == appointment.id) {
            warn!(id = %appointment.id, "Rejected appointment with a reused id");
            return Err(BookingError::DuplicateId(appointment.id));
        }
        if appointments.iter().any(|existing| existing.collides_with(&appointment)) {
            warn!(
                doctor_id = %appointment.doctor.id,
                date = %appointment.date,
                time = %appointment.time,
                "Time slot was already booked"
            );
            return Err(BookingError::SlotConflict {
                doctor_id: appointment.doctor.id,
                date: appointment.date,
                time: appointment.time,
            });
        }

        info!(id = %appointment.id, doctor_id = %appointment.doctor.id, "Appointment booked");
        appointments.push(appointment);
        self.backend.persist(&appointments);
        Ok(())
    }

    /// Removes the appointment with the given id. Cancelling an unknown id
    /// is a no-op, and the unchanged list is not rewritten to the backend.
    pub fn cancel_appointment(&self, id: &str) {
        let mut appointments = self.appointments.lock().unwrap();
        let count_before = appointments.len();
        appointments.retain(|appointment| appointment.id != id);

        if appointments.len() == count_before {
            debug!(id, "No appointment with this id, nothing to cancel");
            return;
        }

        info!(id, "Appointment cancelled");
        self.backend.persist(&appointments);
    }
}
