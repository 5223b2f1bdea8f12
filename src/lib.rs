//! Appointment booking engine for a doctor directory: derives which slots
//! are still bookable, enforces at most one booking per doctor/date/time,
//! and keeps the confirmed appointments in a persisted blob.

mod availability;
mod backend;
mod configuration;
mod directory;
mod error;
mod file_storage;
mod flow;
mod memory_storage;
mod store;
#[cfg(test)]
mod testutils;
mod types;

pub use availability::{
    available_slots, doctor_availability, has_available_slots, is_time_slot_booked,
};
pub use backend::AppointmentBackend;
pub use configuration::{Configuration, ConfigurationHandler, STORAGE_FILE_NAME};
pub use directory::{example_doctors, filter_doctors, AvailabilityFilter, SPECIALTIES};
pub use error::{BookingError, FlowError};
pub use file_storage::FileStorage;
pub use flow::{BookingFlow, FlowState};
pub use memory_storage::MemoryStorage;
pub use store::AppointmentStore;
pub use types::{Appointment, AvailabilitySlot, Doctor, SlotTime};
