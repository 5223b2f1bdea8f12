use crate::types::SlotTime;
use chrono::NaiveDate;
use thiserror::Error;

/// Failures the booking store reports without mutating any state. Both are
/// recoverable from the caller's point of view.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("time slot {date} {time} of doctor {doctor_id} was already booked")]
    SlotConflict {
        doctor_id: String,
        date: NaiveDate,
        time: SlotTime,
    },

    #[error("an appointment with id {0} already exists")]
    DuplicateId(String),
}

/// Failures of a user's booking attempt. Every variant leaves the flow in a
/// state the user can continue from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("this doctor has no available appointment slots")]
    NoAvailableSlots,

    #[error("this time slot is no longer available")]
    SlotUnavailable,

    #[error("no doctor has been selected")]
    NoDoctorSelected,

    #[error("no time slot has been selected")]
    NoSlotSelected,

    #[error(transparent)]
    Store(#[from] BookingError),
}
