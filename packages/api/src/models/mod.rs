pub mod catalog;
pub mod trainer;
pub mod training;
pub mod user;

pub use catalog::{Group, Hall};
pub use trainer::{Trainer, TrainerWithSchedule};
pub use training::{CreateTrainingRequest, Training, TrainingKind};
pub use user::{MessageResponse, SigninRequest, SigninResponse, SignupRequest, User};
