//! The "new activity" form.
//!
//! `TaskForm` holds an uncommitted draft. It never touches the task store:
//! submitting or cancelling produces a [`FormEvent`] that the container
//! turns into an action.
//!
//! The form collects every draft field except the unit name, which stays
//! unset on drafts it produces.

use crate::types::{Priority, Status, TaskDraft, non_blank};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the form hands to its owner
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormEvent {
    /// The user submitted a valid draft
    Submitted(TaskDraft),
    /// The user dismissed the form
    Cancelled,
}

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// The title is empty
    #[error("an activity needs a title")]
    MissingTitle,
}

/// Local state of the create-task form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    priority: Priority,
    status: Status,
    category: String,
    customer_name: String,
    project_name: String,
}

impl TaskForm {
    /// A blank form: medium priority, `todo` status, no due date
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Set the description
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Pick or clear the due date
    pub const fn set_due_date(&mut self, due_date: Option<NaiveDate>) -> &mut Self {
        self.due_date = due_date;
        self
    }

    /// Pick the priority
    pub const fn set_priority(&mut self, priority: Priority) -> &mut Self {
        self.priority = priority;
        self
    }

    /// Pick the status
    pub const fn set_status(&mut self, status: Status) -> &mut Self {
        self.status = status;
        self
    }

    /// Set the category
    pub fn set_category(&mut self, category: impl Into<String>) -> &mut Self {
        self.category = category.into();
        self
    }

    /// Set the customer name
    pub fn set_customer_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.customer_name = name.into();
        self
    }

    /// Set the project name
    pub fn set_project_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.project_name = name.into();
        self
    }

    /// Current title text
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current due date
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Current priority
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Current status
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Whether the submit control is enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.title.is_empty()
    }

    /// Build the draft for submission
    ///
    /// The draft always starts incomplete.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingTitle`] if the title is empty.
    pub fn submit(&self) -> Result<FormEvent, FormError> {
        if !self.can_submit() {
            return Err(FormError::MissingTitle);
        }

        Ok(FormEvent::Submitted(TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date,
            priority: self.priority,
            status: self.status,
            category: non_blank(self.category.as_str()),
            customer_name: non_blank(self.customer_name.as_str()),
            project_name: non_blank(self.project_name.as_str()),
            unit_name: None,
            completed: false,
        }))
    }

    /// Dismiss the form without producing a draft
    #[must_use]
    pub const fn cancel(&self) -> FormEvent {
        FormEvent::Cancelled
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
