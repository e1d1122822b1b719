use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort rank: 1 = High, 2 = Medium, 3 = Low
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    /// Label as shown in listings
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Temporal status of a task. Derived from `completed` and `due_date`,
/// never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Upcoming,
    Overdue,
    Completed,
}

impl Status {
    /// Label as shown in listings
    pub fn label(self) -> &'static str {
        match self {
            Status::Upcoming => "upcoming",
            Status::Overdue => "overdue",
            Status::Completed => "completed",
        }
    }
}

/// A single tracked task.
///
/// `status` is carried in the serialized form for self-description but is
/// recomputed against the clock whenever the collection is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique ID, assigned at creation, immutable after
    pub id: Uuid,
    /// Task title (non-empty)
    pub title: String,
    /// Free-form description (may be empty)
    pub description: String,
    /// Due date (calendar date, no time of day)
    pub due_date: NaiveDate,
    /// Priority level
    pub priority: Priority,
    /// Completion flag
    pub completed: bool,
    /// Derived temporal status
    pub status: Status,
}

impl Task {
    /// Recompute `status` from the task's own fields against `now`.
    pub fn refresh_status(&mut self, now: DateTime<Utc>) {
        self.status = derive_status(self.completed, self.due_date, now);
    }
}

/// Derive a task's temporal status.
///
/// A completed task is always `Completed`, regardless of its due date.
/// Otherwise the due date is taken as its UTC midnight instant and compared
/// against the full timestamp `now`. `now` is a parameter so callers sample
/// it once per derivation and tests can pin the clock.
pub fn derive_status(completed: bool, due_date: NaiveDate, now: DateTime<Utc>) -> Status {
    if completed {
        Status::Completed
    } else if due_date.and_time(NaiveTime::MIN).and_utc() < now {
        Status::Overdue
    } else {
        Status::Upcoming
    }
}
