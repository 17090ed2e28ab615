//! # Schedule models
//!
//! A [`Training`] is one scheduled session as the service renders it for display:
//! `time` and `date` are pre-formatted labels, not timestamps, so the client shows
//! them verbatim. Timestamps only travel the other way, inside
//! [`CreateTrainingRequest`], which the schedule form sends when an administrator
//! creates or edits a session.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Kind of training, also used as the `type` filter on `GET /schedule`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingKind {
    #[default]
    Individual,
    Group,
}

impl TrainingKind {
    pub const ALL: [TrainingKind; 2] = [TrainingKind::Individual, TrainingKind::Group];

    /// Wire value used in JSON and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingKind::Individual => "individual",
            TrainingKind::Group => "group",
        }
    }

    /// Human-readable label for tabs and pills.
    pub fn label(&self) -> &'static str {
        match self {
            TrainingKind::Individual => "Individual",
            TrainingKind::Group => "Group",
        }
    }
}

impl fmt::Display for TrainingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<store::ScheduleView> for TrainingKind {
    fn from(view: store::ScheduleView) -> Self {
        match view {
            store::ScheduleView::Individual => TrainingKind::Individual,
            store::ScheduleView::Group => TrainingKind::Group,
        }
    }
}

/// One schedule entry.
///
/// `coach` is absent on entries embedded in a trainer profile, where the coach is
/// implied by the surrounding record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Training {
    pub id: i64,
    #[serde(default)]
    pub coach: Option<String>,
    #[serde(rename = "type")]
    pub kind: TrainingKind,
    pub title: String,
    pub time: String,
    pub location: String,
    pub date: String,
    #[serde(default)]
    pub participants: Option<u32>,
}

/// Body of `POST /schedule` and `PUT /schedule/{id}`.
///
/// Timestamps are local wall-clock times serialised as `YYYY-MM-DDTHH:MM:SS`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateTrainingRequest {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub group_id: i64,
    pub hall_id: i64,
}
