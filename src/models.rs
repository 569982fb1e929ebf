/// Data models for the walk-in queue.
///
/// This module defines the values exchanged between the front desk and
/// the queue:
/// - Specialty: the fixed list of clinics a patient can be seen in
/// - Lane: which of the two queue lanes a patient waits in
/// - PatientRecord: a registered patient waiting to be called

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Medical specialties offered at the front desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specialty {
    GeneralMedicine,
    Cardiology,
    Dermatology,
    Neurology,
    Pediatrics,
    Gynecology,
    Traumatology,
}

impl Specialty {
    /// All specialties in menu order.
    pub const ALL: [Specialty; 7] = [
        Specialty::GeneralMedicine,
        Specialty::Cardiology,
        Specialty::Dermatology,
        Specialty::Neurology,
        Specialty::Pediatrics,
        Specialty::Gynecology,
        Specialty::Traumatology,
    ];

    /// Parse a specialty from its display name or its 1-based menu number.
    pub fn from_string(value: &str) -> Result<Self, String> {
        let value = value.trim();

        if let Ok(number) = value.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|index| Self::ALL.get(index).copied())
                .ok_or_else(|| format!("Invalid specialty number: {}", number));
        }

        Self::ALL
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("Invalid specialty: '{}'", value))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Specialty::GeneralMedicine => "General Medicine",
            Specialty::Cardiology => "Cardiology",
            Specialty::Dermatology => "Dermatology",
            Specialty::Neurology => "Neurology",
            Specialty::Pediatrics => "Pediatrics",
            Specialty::Gynecology => "Gynecology",
            Specialty::Traumatology => "Traumatology",
        }
    }
}

/// The two queue lanes. Emergencies are always served first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    Emergency,
    Normal,
}

impl Lane {
    pub fn for_flag(is_emergency: bool) -> Self {
        if is_emergency {
            Lane::Emergency
        } else {
            Lane::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Lane::Emergency => "EMERGENCY",
            Lane::Normal => "NORMAL",
        }
    }
}

/// A patient waiting in the queue.
///
/// Records are immutable once built. Input is expected to be validated
/// by the caller before construction (see `intake`); nothing is checked
/// here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRecord {
    record_id: Uuid,
    name: String,
    phone: String,
    visit_date: String,
    visit_time: String,
    specialty: Specialty,
    is_emergency: bool,
    registered_at: DateTime<Local>,
}

impl PatientRecord {
    /// Create a record registered at the current time.
    pub fn new(
        name: String,
        phone: String,
        visit_date: String,
        visit_time: String,
        specialty: Specialty,
        is_emergency: bool,
    ) -> Self {
        Self::registered_at_time(
            name,
            phone,
            visit_date,
            visit_time,
            specialty,
            is_emergency,
            Local::now(),
        )
    }

    /// Create a record with an explicit registration time.
    pub fn registered_at_time(
        name: String,
        phone: String,
        visit_date: String,
        visit_time: String,
        specialty: Specialty,
        is_emergency: bool,
        registered_at: DateTime<Local>,
    ) -> Self {
        PatientRecord {
            record_id: Uuid::new_v4(),
            name,
            phone,
            visit_date,
            visit_time,
            specialty,
            is_emergency,
            registered_at,
        }
    }

    pub fn record_id(&self) -> Uuid {
        self.record_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn visit_date(&self) -> &str {
        &self.visit_date
    }

    pub fn visit_time(&self) -> &str {
        &self.visit_time
    }

    pub fn specialty(&self) -> Specialty {
        self.specialty
    }

    pub fn is_emergency(&self) -> bool {
        self.is_emergency
    }

    pub fn registered_at(&self) -> DateTime<Local> {
        self.registered_at
    }

    pub fn lane(&self) -> Lane {
        Lane::for_flag(self.is_emergency)
    }

    /// Case-insensitive exact name comparison used for search and cancel.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Whole minutes waited as of `now`, truncated. Never negative.
    pub fn wait_minutes_at(&self, now: DateTime<Local>) -> i64 {
        (now - self.registered_at).num_minutes().max(0)
    }

    /// Whole minutes waited so far.
    pub fn wait_minutes(&self) -> i64 {
        self.wait_minutes_at(Local::now())
    }
}
