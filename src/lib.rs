//! Walk-in patient queue for a medical front desk.
//!
//! Patients are held in two first-in-first-out lanes: emergencies are
//! always served before routine visits, and arrival order is kept within
//! each lane.

pub mod config;
pub mod error;
pub mod intake;
pub mod models;
pub mod queue;

pub use config::DeskConfig;
pub use error::{ConfigError, FieldError, IntakeError};
pub use intake::PatientForm;
pub use models::{Lane, PatientRecord, Specialty};
pub use queue::{estimated_wait_minutes, DualLaneQueue, QueueEntry, QueueStatistics, SearchHit};
