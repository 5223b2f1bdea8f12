use crate::types::Appointment;
use tracing::warn;

/// Storage behind the booking store: one named blob holding the serialized
/// appointment list. Implementations must never surface read or write
/// failures to the caller; the in-memory list stays authoritative for the
/// session regardless.
pub trait AppointmentBackend: Clone + Send + Sync + 'static {
    /// Reads the persisted appointments. A missing or unparsable blob yields
    /// an empty list.
    fn load(&self) -> Vec<Appointment>;

    /// Overwrites the blob with the full appointment list. Called after
    /// every mutation, no batching.
    fn persist(&self, appointments: &[Appointment]);
}

pub(crate) fn parse_blob(raw: &str) -> Vec<Appointment> {
    match serde_json::from_str(raw) {
        Ok(appointments) => appointments,
        Err(err) => {
            warn!(?err, "Stored appointments are unparsable, starting with an empty list");
            Vec::new()
        }
    }
}
