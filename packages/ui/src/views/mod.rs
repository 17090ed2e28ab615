mod status;
pub use status::{LoadingScreen, NotFoundView};

mod auth_pages;
pub use auth_pages::{LogoutView, SignInView, SignUpView};

mod dashboard;
pub use dashboard::{AdminDashboard, AdminSummary, AthleteDashboard, DashboardView};

pub mod schedule;
pub use schedule::{ScheduleCard, ScheduleCardModel, ScheduleDayList, ScheduleState, ScheduleView};

mod schedule_form;
pub use schedule_form::{FormValues, ScheduleFormView};

mod trainers;
pub use trainers::{trainer_profile_path, TrainerCard, TrainersView};

mod trainer_profile;
pub use trainer_profile::{parse_path_id, TrainerProfileView};
