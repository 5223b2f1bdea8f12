//! Static doctor directory: reference data the engine reads but never
//! mutates, plus the browse filters over it.

use crate::availability;
use crate::types::{Appointment, AvailabilitySlot, Doctor, SlotTime};
use chrono::NaiveDate;

pub const SPECIALTIES: [&str; 8] = [
    "Cardiology",
    "Dermatology",
    "Neurology",
    "Orthopedics",
    "Pediatrics",
    "Psychiatry",
    "Ophthalmology",
    "Gynecology",
];

/// Which doctors a browse should keep with respect to bookable slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityFilter {
    All,
    AvailableOnly,
}

/// Filters the directory the way the browse page does: an optional exact
/// specialty match, and optionally only doctors that still have at least one
/// unbooked slot given the current appointments.
pub fn filter_doctors<'a>(
    doctors: &'a [Doctor],
    appointments: &[Appointment],
    specialty: Option<&str>,
    filter: AvailabilityFilter,
) -> Vec<&'a Doctor> {
    doctors
        .iter()
        .filter(|doctor| specialty.is_none_or(|wanted| doctor.specialty == wanted))
        .filter(|doctor| match filter {
            AvailabilityFilter::All => true,
            AvailabilityFilter::AvailableOnly => {
                availability::has_available_slots(appointments, doctor)
            }
        })
        .collect()
}

fn entry(year: i32, month: u32, day: u32, slots: &[(u32, u32)]) -> AvailabilitySlot {
    AvailabilitySlot {
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid example date"),
        slots: slots
            .iter()
            .map(|&(hour, minute)| SlotTime::new(hour, minute).expect("valid example time"))
            .collect(),
    }
}

fn doctor(
    id: &str,
    name: &str,
    specialty: &str,
    rating: f32,
    location: &str,
    availability: Vec<AvailabilitySlot>,
) -> Doctor {
    Doctor {
        id: id.into(),
        name: name.into(),
        photo: "/placeholder.svg?height=400&width=400".into(),
        specialty: specialty.into(),
        rating,
        location: location.into(),
        availability,
    }
}

/// The example directory consumers can seed a session with. `doctor-9`
/// deliberately carries an empty calendar.
pub fn example_doctors() -> Vec<Doctor> {
    vec![
        doctor(
            "doctor-1",
            "Sarah Johnson",
            "Cardiology",
            4.8,
            "Downtown Medical Center",
            vec![
                entry(2025, 4, 21, &[(9, 0), (11, 30)]),
                entry(2025, 4, 23, &[(14, 0)]),
                entry(2025, 4, 25, &[(10, 0)]),
            ],
        ),
        doctor(
            "doctor-2",
            "Michael Chen",
            "Dermatology",
            4.9,
            "Westside Health Clinic",
            vec![
                entry(2025, 4, 22, &[(8, 30), (13, 0)]),
                entry(2025, 4, 24, &[(15, 30)]),
            ],
        ),
        doctor(
            "doctor-3",
            "Emily Rodriguez",
            "Pediatrics",
            4.7,
            "Children's Medical Center",
            vec![
                entry(2025, 4, 21, &[(10, 0)]),
                entry(2025, 4, 23, &[(9, 30), (14, 30)]),
                entry(2025, 4, 25, &[(11, 0)]),
            ],
        ),
        doctor(
            "doctor-4",
            "David Wilson",
            "Orthopedics",
            4.6,
            "Sports Medicine Clinic",
            vec![
                entry(2025, 4, 22, &[(11, 0)]),
                entry(2025, 4, 24, &[(9, 0), (16, 0)]),
            ],
        ),
        doctor(
            "doctor-5",
            "Olivia Thompson",
            "Neurology",
            4.9,
            "Neuroscience Institute",
            vec![
                entry(2025, 4, 21, &[(14, 0)]),
                entry(2025, 4, 23, &[(10, 30)]),
                entry(2025, 4, 25, &[(13, 30)]),
            ],
        ),
        doctor(
            "doctor-6",
            "James Parker",
            "Psychiatry",
            4.7,
            "Behavioral Health Center",
            vec![
                entry(2025, 4, 22, &[(9, 30), (15, 0)]),
                entry(2025, 4, 24, &[(13, 0)]),
            ],
        ),
        doctor(
            "doctor-7",
            "Sophia Lee",
            "Ophthalmology",
            4.8,
            "Vision Care Center",
            vec![
                entry(2025, 4, 21, &[(8, 30)]),
                entry(2025, 4, 23, &[(13, 0)]),
                entry(2025, 4, 25, &[(9, 0)]),
            ],
        ),
        doctor(
            "doctor-8",
            "Robert Martinez",
            "Gynecology",
            4.6,
            "Women's Health Clinic",
            vec![
                entry(2025, 4, 22, &[(10, 0)]),
                entry(2025, 4, 24, &[(14, 30), (16, 30)]),
            ],
        ),
        doctor(
            "doctor-9",
            "Jennifer Adams",
            "Cardiology",
            4.5,
            "Heart & Vascular Institute",
            vec![],
        ),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testutils::booked;
    use std::collections::HashSet;

    #[test]
    fn example_directory_is_well_formed() {
        let doctors = example_doctors();
        assert_eq!(doctors.len(), 9);

        let ids: HashSet<_> = doctors.iter().map(|doctor| doctor.id.as_str()).collect();
        assert_eq!(ids.len(), doctors.len());

        for doctor in &doctors {
            assert!(SPECIALTIES.contains(&doctor.specialty.as_str()));
            assert!((0.0..=5.0).contains(&doctor.rating));
            for entry in &doctor.availability {
                let unique: HashSet<_> = entry.slots.iter().collect();
                assert_eq!(unique.len(), entry.slots.len());
            }
        }

        let empty_calendar = doctors.iter().find(|doctor| doctor.id == "doctor-9").unwrap();
        assert!(empty_calendar.availability.is_empty());
    }

    #[test_case::test_case (None, AvailabilityFilter::All, 9)]
    #[test_case::test_case (None, AvailabilityFilter::AvailableOnly, 8)] // doctor-9 has no calendar
    #[test_case::test_case (Some("Cardiology"), AvailabilityFilter::All, 2)]
    #[test_case::test_case (Some("Cardiology"), AvailabilityFilter::AvailableOnly, 1)]
    #[test_case::test_case (Some("Dermatology"), AvailabilityFilter::All, 1)]
    #[test_case::test_case (Some("Podiatry"), AvailabilityFilter::All, 0)]
    fn filters_compose(specialty: Option<&str>, filter: AvailabilityFilter, expected: usize) {
        let doctors = example_doctors();
        let filtered = filter_doctors(&doctors, &[], specialty, filter);
        assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn fully_booked_doctor_drops_out_of_available_only() {
        let doctors = example_doctors();
        let appointments = vec![
            booked("appointment-1", "doctor-7", "2025-04-21", "08:30"),
            booked("appointment-2", "doctor-7", "2025-04-23", "13:00"),
            booked("appointment-3", "doctor-7", "2025-04-25", "09:00"),
        ];

        let filtered = filter_doctors(
            &doctors,
            &appointments,
            Some("Ophthalmology"),
            AvailabilityFilter::AvailableOnly,
        );
        assert!(filtered.is_empty());

        // still listed when availability is not filtered on
        let unfiltered = filter_doctors(
            &doctors,
            &appointments,
            Some("Ophthalmology"),
            AvailabilityFilter::All,
        );
        assert_eq!(unfiltered.len(), 1);
    }
}
