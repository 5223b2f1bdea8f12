//! Derives a doctor's still-bookable slots from the appointment list. All
//! functions here are pure; the store adapters below take one snapshot per
//! call and re-derive instead of maintaining a second source of truth.

use crate::backend::AppointmentBackend;
use crate::store::AppointmentStore;
use crate::types::{Appointment, AvailabilitySlot, Doctor, SlotTime};
use chrono::NaiveDate;

/// True iff an appointment exists for exactly this doctor, date and time.
pub fn is_time_slot_booked(
    appointments: &[Appointment],
    doctor: &Doctor,
    date: NaiveDate,
    time: SlotTime,
) -> bool {
    appointments
        .iter()
        .any(|appointment| {
            appointment.doctor.id == doctor.id
                && appointment.date == date
                && appointment.time == time
        })
}

/// The doctor's nominal slots for `date` with booked ones removed, original
/// order preserved. Empty when the calendar has no entry for `date`.
pub fn available_slots(
    appointments: &[Appointment],
    doctor: &Doctor,
    date: NaiveDate,
) -> Vec<SlotTime> {
    doctor
        .availability
        .iter()
        .find(|entry| entry.date == date)
        .map(|entry| {
            entry
                .slots
                .iter()
                .copied()
                .filter(|&time| !is_time_slot_booked(appointments, doctor, date, time))
                .collect()
        })
        .unwrap_or_default()
}

/// The canonical "what can still be booked" view: every calendar entry with
/// its booked slots removed, dates left without slots dropped, calendar
/// order preserved.
pub fn doctor_availability(appointments: &[Appointment], doctor: &Doctor) -> Vec<AvailabilitySlot> {
    doctor
        .availability
        .iter()
        .map(|entry| AvailabilitySlot {
            date: entry.date,
            slots: available_slots(appointments, doctor, entry.date),
        })
        .filter(|entry| !entry.slots.is_empty())
        .collect()
}

/// True iff any date still has an unbooked slot. Early-exits on the first
/// one found.
pub fn has_available_slots(appointments: &[Appointment], doctor: &Doctor) -> bool {
    doctor.availability.iter().any(|entry| {
        entry
            .slots
            .iter()
            .any(|&time| !is_time_slot_booked(appointments, doctor, entry.date, time))
    })
}

impl<B: AppointmentBackend> AppointmentStore<B> {
    pub fn is_time_slot_booked(&self, doctor: &Doctor, date: NaiveDate, time: SlotTime) -> bool {
        is_time_slot_booked(&self.appointments(), doctor, date, time)
    }

    pub fn available_slots(&self, doctor: &Doctor, date: NaiveDate) -> Vec<SlotTime> {
        available_slots(&self.appointments(), doctor, date)
    }

    pub fn doctor_availability(&self, doctor: &Doctor) -> Vec<AvailabilitySlot> {
        doctor_availability(&self.appointments(), doctor)
    }

    pub fn has_available_slots(&self, doctor: &Doctor) -> bool {
        has_available_slots(&self.appointments(), doctor)
    }
}
