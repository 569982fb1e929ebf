//! Front-desk registration form.
//!
//! The queue trusts whatever records it is handed, so every rule about
//! what a valid name or phone number looks like lives here.

use crate::error::{FieldError, IntakeError};
use crate::models::{PatientRecord, Specialty};
use chrono::Local;
use tracing::warn;

const NAME_PUNCTUATION: &[char] = &[' ', '\'', '-'];

/// Raw registration input as typed at the desk.
#[derive(Debug, Clone, Default)]
pub struct PatientForm {
    pub name: String,
    pub phone: String,
    pub visit_date: String,
    pub visit_time: String,
    pub specialty: String,
    pub is_emergency: bool,
}

/// Letters (including accented ones), spaces, apostrophes and hyphens; not blank.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name
            .chars()
            .all(|c| c.is_alphabetic() || NAME_PUNCTUATION.contains(&c))
}

/// Digits only; not blank.
pub fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty() && phone.chars().all(|c| c.is_ascii_digit())
}

impl PatientForm {
    /// Check every field and build a record, or report all problems at once.
    ///
    /// Blank visit date and time default to the current date and time.
    pub fn validate(&self) -> Result<PatientRecord, IntakeError> {
        let name = self.name.trim();
        let phone = self.phone.trim();
        let specialty_input = self.specialty.trim();
        let mut reasons = Vec::new();

        if name.is_empty() {
            reasons.push(FieldError::MissingName);
        } else if !is_valid_name(name) {
            reasons.push(FieldError::InvalidName);
        }

        if phone.is_empty() {
            reasons.push(FieldError::MissingPhone);
        } else if !is_valid_phone(phone) {
            reasons.push(FieldError::InvalidPhone);
        }

        let specialty = if specialty_input.is_empty() {
            reasons.push(FieldError::MissingSpecialty);
            None
        } else {
            match Specialty::from_string(specialty_input) {
                Ok(specialty) => Some(specialty),
                Err(_) => {
                    reasons.push(FieldError::UnknownSpecialty(specialty_input.to_string()));
                    None
                }
            }
        };

        let specialty = match specialty {
            Some(specialty) if reasons.is_empty() => specialty,
            _ => {
                warn!(count = reasons.len(), "registration rejected");
                return Err(IntakeError::Rejected(reasons));
            }
        };

        let now = Local::now();
        let visit_date = match self.visit_date.trim() {
            "" => now.format("%d/%m/%Y").to_string(),
            date => date.to_string(),
        };
        let visit_time = match self.visit_time.trim() {
            "" => now.format("%H:%M").to_string(),
            time => time.to_string(),
        };

        Ok(PatientRecord::new(
            name.to_string(),
            phone.to_string(),
            visit_date,
            visit_time,
            specialty,
            self.is_emergency,
        ))
    }
}
