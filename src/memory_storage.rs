use crate::backend::{parse_blob, AppointmentBackend};
use crate::types::Appointment;
use std::sync::{Arc, Mutex};
use tracing::error;

/// Blob storage that lives for the current session only. The appointments
/// still round-trip through their serialized form on every load and persist,
/// so a clone of this handle behaves exactly like a reopened durable blob.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the blob with raw serialized content, parsable or not.
    pub fn with_blob(raw: impl Into<String>) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }
}

impl AppointmentBackend for MemoryStorage {
    fn load(&self) -> Vec<Appointment> {
        let blob = self.blob.lock().unwrap();
        match blob.as_deref() {
            Some(raw) => parse_blob(raw),
            None => Vec::new(),
        }
    }

    fn persist(&self, appointments: &[Appointment]) {
        match serde_json::to_string(appointments) {
            Ok(raw) => *self.blob.lock().unwrap() = Some(raw),
            Err(err) => error!(?err, "Failed to serialize appointments"),
        }
    }
}
