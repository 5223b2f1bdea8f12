//! Drives one user's booking attempt: pick a doctor, pick a slot, confirm.
//! Availability is checked when the doctor is picked, re-checked when the
//! slot is picked, and checked once more inside the store when confirming.
//! That last check is the authoritative one.

use crate::backend::AppointmentBackend;
use crate::error::FlowError;
use crate::store::AppointmentStore;
use crate::types::{Appointment, Doctor, SlotTime};
use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    Idle,
    DoctorSelected {
        doctor: Doctor,
    },
    SlotSelected {
        doctor: Doctor,
        date: NaiveDate,
        time: SlotTime,
    },
    Confirmed {
        appointment: Appointment,
    },
    Rejected,
}

pub struct BookingFlow<B: AppointmentBackend> {
    store: AppointmentStore<B>,
    state: FlowState,
}

impl<B: AppointmentBackend> BookingFlow<B> {
    pub fn new(store: AppointmentStore<B>) -> Self {
        Self {
            store,
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Starts an attempt for this doctor. A doctor without a single open
    /// slot is rejected here, before the store is ever involved.
    pub fn select_doctor(&mut self, doctor: Doctor) -> Result<(), FlowError> {
        if !self.store.has_available_slots(&doctor) {
            debug!(doctor_id = %doctor.id, "Doctor has no open slots, rejecting attempt");
            self.state = FlowState::Rejected;
            return Err(FlowError::NoAvailableSlots);
        }
        self.state = FlowState::DoctorSelected { doctor };
        Ok(())
    }

    /// Picks a concrete date and time. The slot the user clicked may have
    /// been booked since the list was rendered, so it is re-validated here;
    /// a stale pick drops back to the doctor with the selection cleared.
    pub fn select_slot(&mut self, date: NaiveDate, time: SlotTime) -> Result<(), FlowError> {
        let doctor = match &self.state {
            FlowState::DoctorSelected { doctor } | FlowState::SlotSelected { doctor, .. } => {
                doctor.clone()
            }
            _ => return Err(FlowError::NoDoctorSelected),
        };

        if self.store.is_time_slot_booked(&doctor, date, time) {
            debug!(doctor_id = %doctor.id, %date, %time, "Selected slot is already taken");
            self.state = FlowState::DoctorSelected { doctor };
            return Err(FlowError::SlotUnavailable);
        }

        self.state = FlowState::SlotSelected { doctor, date, time };
        Ok(())
    }

    /// Commits the selected slot. The store performs its own check right
    /// before mutating, so a slot grabbed between selection and confirm
    /// fails here instead of double-booking; the flow then returns to the
    /// doctor so another slot can be picked in the same attempt.
    pub fn confirm(&mut self) -> Result<Appointment, FlowError> {
        let FlowState::SlotSelected { doctor, date, time } = self.state.clone() else {
            return Err(FlowError::NoSlotSelected);
        };

        let appointment = Appointment {
            id: next_appointment_id(),
            doctor: doctor.clone(),
            date,
            time,
        };

        match self.store.add_appointment(appointment.clone()) {
            Ok(()) => {
                self.state = FlowState::Confirmed {
                    appointment: appointment.clone(),
                };
                Ok(appointment)
            }
            Err(err) => {
                self.state = FlowState::DoctorSelected { doctor };
                Err(err.into())
            }
        }
    }

    /// User-initiated abort: clears the selection, never touches the store.
    pub fn abort(&mut self) {
        self.state = FlowState::Idle;
    }
}

fn next_appointment_id() -> String {
    format!("appointment-{}", Uuid::new_v4())
}
