use thiserror::Error;

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Patient name is required")]
    MissingName,

    #[error("Patient name may only contain letters, spaces, apostrophes and hyphens")]
    InvalidName,

    #[error("Phone number is required")]
    MissingPhone,

    #[error("Phone number may only contain digits")]
    InvalidPhone,

    #[error("A specialty must be selected")]
    MissingSpecialty,

    #[error("Unknown specialty: '{0}'")]
    UnknownSpecialty(String),
}

/// Errors raised while turning desk input into a patient record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("registration rejected: {}", join_reasons(.0))]
    Rejected(Vec<FieldError>),
}

impl IntakeError {
    pub fn reasons(&self) -> &[FieldError] {
        match self {
            IntakeError::Rejected(reasons) => reasons,
        }
    }
}

fn join_reasons(reasons: &[FieldError]) -> String {
    reasons
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Consultation duration must be positive, got {0} minutes")]
    InvalidConsultation(i64),

    #[error("Invalid log filter '{0}'")]
    InvalidLogFilter(String),
}
