pub mod config;
pub mod error;
pub mod service;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use error::{Result, SchedulerError, StoreError};
pub use service::{NextCard, RatingOutcome, StudyService};
pub use store::{NewFlashcard, ReviewStore, ReviewUpdate};
