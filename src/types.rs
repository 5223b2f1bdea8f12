use chrono::{NaiveDate, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Time of day of a bookable slot. Serializes as `"HH:MM"`, the format the
/// persisted blob uses; anything else fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime(NaiveTime);

const SLOT_TIME_FORMAT: &str = "%H:%M";

impl SlotTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SLOT_TIME_FORMAT))
    }
}

impl FromStr for SlotTime {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, SLOT_TIME_FORMAT).map(Self)
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// A doctor's nominal open slots on one calendar date, independent of any
/// bookings made against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub date: NaiveDate,
    pub slots: Vec<SlotTime>,
}

/// Immutable reference data about a doctor. The booking engine never mutates
/// a doctor; it only reads the availability calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub photo: String,
    pub specialty: String,
    pub rating: f32,
    pub location: String,
    pub availability: Vec<AvailabilitySlot>,
}

/// A confirmed booking. Embeds a full snapshot of the doctor at booking time
/// rather than a reference, so cancelling never dangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub doctor: Doctor,
    pub date: NaiveDate,
    pub time: SlotTime,
}

impl Appointment {
    /// Two appointments collide when they claim the same doctor at the same
    /// date and time. Exact match on all three fields, no interval overlap.
    pub fn collides_with(&self, other: &Appointment) -> bool {
        self.doctor.id == other.doctor.id && self.date == other.date && self.time == other.time
    }
}
