//! Client-side access to the sports school scheduling service.

pub mod client;
pub mod error;
pub mod models;
pub mod schedule;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    CreateTrainingRequest, Group, Hall, MessageResponse, SigninResponse, SignupRequest, Trainer,
    TrainerWithSchedule, Training, TrainingKind, User,
};
pub use models::user::SignupError;
pub use schedule::{group_by_date, save_training, DraftError, DraftField, SaveError, ScheduleDay, TrainingDraft};
