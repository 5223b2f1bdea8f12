use crate::backend::{parse_blob, AppointmentBackend};
use crate::configuration::Configuration;
use crate::types::Appointment;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fs, io};
use tracing::{error, warn};

/// Durable blob storage: the serialized appointment list written to a single
/// JSON file. The file is the fixed-name key the whole store persists under.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(configuration: &impl Configuration) -> Self {
        Self::with_path(configuration.storage_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_blob(&self, raw: &str) -> io::Result<()> {
        fs::write(&self.path, raw)
    }
}

impl AppointmentBackend for FileStorage {
    fn load(&self) -> Vec<Appointment> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => parse_blob(&raw),
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                warn!(?err, path = %self.path.display(), "Failed to read stored appointments");
                Vec::new()
            }
        }
    }

    fn persist(&self, appointments: &[Appointment]) {
        let raw = match serde_json::to_string(appointments) {
            Ok(raw) => raw,
            Err(err) => {
                error!(?err, "Failed to serialize appointments");
                return;
            }
        };
        if let Err(err) = self.write_blob(&raw) {
            error!(?err, path = %self.path.display(), "Failed to persist appointments");
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testutils::example_appointment;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::with_path(dir.path().join("appointments.json"));
        assert_eq!(storage.load(), vec![]);
    }

    #[test]
    fn unparsable_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        fs::write(&path, "definitely not an appointment list").unwrap();

        let storage = FileStorage::with_path(path);
        assert_eq!(storage.load(), vec![]);
    }

    #[test]
    fn persisted_appointments_survive_a_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        let appointments = vec![
            example_appointment("appointment-1", "2025-04-21", "09:00"),
            example_appointment("appointment-2", "2025-04-23", "14:00"),
        ];

        FileStorage::with_path(&path).persist(&appointments);

        // fresh handle, like a new session
        let reopened = FileStorage::with_path(&path);
        assert_eq!(reopened.load(), appointments);
    }

    #[test]
    fn persist_overwrites_the_previous_blob() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        let storage = FileStorage::with_path(&path);

        storage.persist(&[example_appointment("appointment-1", "2025-04-21", "09:00")]);
        let second = vec![example_appointment("appointment-2", "2025-04-23", "14:00")];
        storage.persist(&second);

        assert_eq!(storage.load(), second);
    }

    #[test]
    fn unwritable_path_is_not_fatal() {
        let storage = FileStorage::with_path("/nonexistent-dir/appointments.json");
        storage.persist(&[example_appointment("appointment-1", "2025-04-21", "09:00")]);
        assert_eq!(storage.load(), vec![]);
    }
}
