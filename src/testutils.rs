use crate::backend::AppointmentBackend;
use crate::directory::example_doctors;
use crate::types::{Appointment, Doctor, SlotTime};
use chrono::NaiveDate;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn date(raw: &str) -> NaiveDate {
    raw.parse().unwrap()
}

pub fn time(raw: &str) -> SlotTime {
    raw.parse().unwrap()
}

pub fn example_doctor(id: &str) -> Doctor {
    example_doctors()
        .into_iter()
        .find(|doctor| doctor.id == id)
        .unwrap()
}

pub fn booked(id: &str, doctor_id: &str, day: &str, slot: &str) -> Appointment {
    Appointment {
        id: id.into(),
        doctor: example_doctor(doctor_id),
        date: date(day),
        time: time(slot),
    }
}

pub fn example_appointment(id: &str, day: &str, slot: &str) -> Appointment {
    booked(id, "doctor-1", day, slot)
}

pub struct RecordingBackendInner {
    pub calls_to_load: AtomicU64,
    pub calls_to_persist: AtomicU64,
    pub blob: Mutex<Option<String>>,
}

/// Backend double that counts every load and persist and keeps the blob in
/// its serialized form, so tests can assert exactly when the store writes
/// through and what ends up stored.
#[derive(Clone)]
pub struct RecordingBackend(pub Arc<RecordingBackendInner>);

impl RecordingBackend {
    pub fn new() -> Self {
        Self(Arc::new(RecordingBackendInner {
            calls_to_load: AtomicU64::default(),
            calls_to_persist: AtomicU64::default(),
            blob: Mutex::default(),
        }))
    }

    pub fn load_calls(&self) -> u64 {
        self.0.calls_to_load.load(Ordering::SeqCst)
    }

    pub fn persist_calls(&self) -> u64 {
        self.0.calls_to_persist.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<Appointment> {
        match self.0.blob.lock().unwrap().as_deref() {
            Some(raw) => serde_json::from_str(raw).unwrap(),
            None => Vec::new(),
        }
    }
}

impl AppointmentBackend for RecordingBackend {
    fn load(&self) -> Vec<Appointment> {
        self.0.calls_to_load.fetch_add(1, Ordering::SeqCst);
        self.stored()
    }

    fn persist(&self, appointments: &[Appointment]) {
        self.0.calls_to_persist.fetch_add(1, Ordering::SeqCst);
        let raw = serde_json::to_string(appointments).unwrap();
        *self.0.blob.lock().unwrap() = Some(raw);
    }
}
