//! Error types for schedule parsing and querying.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The query date is not a real calendar date.
    #[error("invalid date \"{input}\": expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// A clock time failed the grammar or is out of range.
    #[error("invalid time \"{input}\": expected HH:MM am/pm")]
    InvalidTime { input: String },

    /// A dataset hours string has no usable day token.
    #[error("invalid day specification \"{input}\"")]
    InvalidDaySpec { input: String },

    /// A dataset hours string could not be split into days and a time span.
    #[error("could not parse hours \"{input}\": {reason}")]
    ScheduleParse { input: String, reason: String },
}

impl ScheduleError {
    /// `true` for errors caused by the query input rather than by the dataset.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ScheduleError::InvalidDate { .. } | ScheduleError::InvalidTime { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
