//! Booking form state and the record handed to the host on submit.

use crate::date_key::DateKey;
use crate::slots::SlotTime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The single (date, time) pair picked in the calendar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSelection {
    pub date: Option<DateKey>,
    pub time: Option<SlotTime>,
}

impl BookingSelection {
    pub fn is(&self, date: DateKey, time: SlotTime) -> bool {
        self.date == Some(date) && self.time == Some(time)
    }

    /// Combined start, once both halves are set
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let date = self.date?;
        let time = self.time?;
        date.date().and_hms_opt(time.hour(), time.minute(), 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("No date selected")]
    MissingDate,
    #[error("No time selected")]
    MissingTime,
    #[error("Name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("{0} is in the past")]
    PastDate(DateKey),
}

/// What the completion handler receives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub starts_at: NaiveDateTime,
    pub name: String,
    pub email: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub selection: BookingSelection,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl BookingForm {
    pub fn select_slot(&mut self, date: DateKey, time: SlotTime) {
        self.selection = BookingSelection {
            date: Some(date),
            time: Some(time),
        };
    }

    /// Submit is offered only when this is `Ok`
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.selection.date.is_none() {
            return Err(BookingError::MissingDate);
        }
        if self.selection.time.is_none() {
            return Err(BookingError::MissingTime);
        }
        if self.name.is_empty() {
            return Err(BookingError::MissingName);
        }
        if self.email.is_empty() {
            return Err(BookingError::MissingEmail);
        }
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    /// Submit as of `today`. A slot on an earlier day is refused even if it
    /// was selectable when the calendar last rendered.
    pub fn submit_on(&self, today: DateKey) -> Result<BookingRequest, BookingError> {
        if let Some(date) = self.selection.date.filter(|date| *date < today) {
            return Err(BookingError::PastDate(date));
        }
        self.submit()
    }

    /// Assemble the booking record. The form itself is left untouched.
    pub fn submit(&self) -> Result<BookingRequest, BookingError> {
        self.validate()?;
        let starts_at = self.selection.starts_at().ok_or(BookingError::MissingTime)?;

        let message = if self.message.trim().is_empty() {
            None
        } else {
            Some(self.message.clone())
        };

        info!(%starts_at, name = %self.name, "booking submitted");

        Ok(BookingRequest {
            starts_at,
            name: self.name.clone(),
            email: self.email.clone(),
            message,
        })
    }
}
