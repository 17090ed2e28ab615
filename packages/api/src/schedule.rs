//! # Schedule helpers
//!
//! Pure functions behind the schedule pages, kept out of the UI crate so they can be
//! tested without a renderer.
//!
//! - [`group_by_date`] buckets entries under their date label for display.
//! - [`TrainingDraft`] is the raw state of the create/edit form. Its
//!   [`validate`](TrainingDraft::validate) method turns it into a
//!   [`CreateTrainingRequest`] or explains what is wrong, before anything is sent.
//! - [`save_training`] validates a draft and only then sends it.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CreateTrainingRequest, Training};

/// All entries that share one date label, in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleDay {
    pub date: String,
    pub trainings: Vec<Training>,
}

/// Group entries by `date`.
///
/// Days appear in the order their first entry appears; within a day entries keep
/// their relative order. Every entry lands in exactly one day.
pub fn group_by_date(trainings: Vec<Training>) -> Vec<ScheduleDay> {
    let mut days: Vec<ScheduleDay> = Vec::new();
    for training in trainings {
        match days.iter_mut().find(|day| day.date == training.date) {
            Some(day) => day.trainings.push(training),
            None => days.push(ScheduleDay {
                date: training.date.clone(),
                trainings: vec![training],
            }),
        }
    }
    days
}

/// A required input of the schedule form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Group,
    Hall,
    Date,
    StartTime,
    EndTime,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DraftField::Group => "group",
            DraftField::Hall => "hall",
            DraftField::Date => "date",
            DraftField::StartTime => "start time",
            DraftField::EndTime => "end time",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DraftError {
    #[error("Please fill in: {}", join_fields(.0))]
    MissingFields(Vec<DraftField>),

    #[error("Invalid {field}: \"{value}\" (expected HH:MM)")]
    InvalidTime { field: DraftField, value: String },

    #[error("End time must be after start time")]
    EndNotAfterStart,
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw state of the schedule form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrainingDraft {
    pub group_id: Option<i64>,
    pub hall_id: Option<i64>,
    pub date: Option<NaiveDate>,
    /// `HH:MM` as produced by a time input; empty when unset.
    pub start_time: String,
    pub end_time: String,
}

impl TrainingDraft {
    /// Pre-fill date and times from an existing entry.
    ///
    /// Entries carry display labels only (`"2024-05-25"`, `"10:00 - 11:30"`), so
    /// whatever does not parse is left empty for the user to fill in. Group and hall
    /// are not part of an entry and always start unset.
    pub fn from_training(training: &Training) -> Self {
        let (start_time, end_time) = match training.time.split_once('-') {
            Some((start, end)) => (clean_time_label(start), clean_time_label(end)),
            None => (clean_time_label(&training.time), String::new()),
        };
        Self {
            group_id: None,
            hall_id: None,
            date: parse_date(&training.date),
            start_time,
            end_time,
        }
    }

    /// Check the draft and build the request body.
    ///
    /// Missing fields are reported together, in form order. Times must parse and
    /// the end must be strictly after the start.
    pub fn validate(&self) -> Result<CreateTrainingRequest, DraftError> {
        let mut missing = Vec::new();
        if self.group_id.is_none() {
            missing.push(DraftField::Group);
        }
        if self.hall_id.is_none() {
            missing.push(DraftField::Hall);
        }
        if self.date.is_none() {
            missing.push(DraftField::Date);
        }
        if self.start_time.trim().is_empty() {
            missing.push(DraftField::StartTime);
        }
        if self.end_time.trim().is_empty() {
            missing.push(DraftField::EndTime);
        }

        let (Some(group_id), Some(hall_id), Some(date), true) =
            (self.group_id, self.hall_id, self.date, missing.is_empty())
        else {
            return Err(DraftError::MissingFields(missing));
        };

        let start = parse_time(DraftField::StartTime, &self.start_time)?;
        let end = parse_time(DraftField::EndTime, &self.end_time)?;
        let start_time = NaiveDateTime::new(date, start);
        let end_time = NaiveDateTime::new(date, end);
        if end_time <= start_time {
            return Err(DraftError::EndNotAfterStart);
        }

        Ok(CreateTrainingRequest {
            start_time,
            end_time,
            group_id,
            hall_id,
        })
    }
}

/// Why saving the schedule form failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaveError {
    /// Rejected locally; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] DraftError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Validate `draft` and send it: `PUT /schedule/{id}` when `edit_id` is set,
/// `POST /schedule` otherwise. An invalid draft never reaches the network.
pub async fn save_training<S: SessionStore>(
    client: &ApiClient<S>,
    edit_id: Option<i64>,
    draft: &TrainingDraft,
) -> Result<(), SaveError> {
    let body = draft.validate()?;
    match edit_id {
        Some(id) => client.update_training(id, &body).await?,
        None => client.create_training(&body).await?,
    }
    Ok(())
}

fn parse_time(field: DraftField, value: &str) -> Result<NaiveTime, DraftError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| DraftError::InvalidTime {
            field,
            value: value.to_string(),
        })
}

/// Keep a time label only if it parses, normalised to `HH:MM`.
fn clean_time_label(label: &str) -> String {
    parse_time(DraftField::StartTime, label)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Parse a date input value (`YYYY-MM-DD`); empty or malformed input is `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
