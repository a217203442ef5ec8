//! Domain types for the activity tracker.
//!
//! A [`Task`] is the only entity. It is created from a [`TaskDraft`]
//! (everything except identity and timestamps), flipped between complete and
//! incomplete, patched with a [`TaskPatch`], and removed.
//!
//! `status` and `completed` are tracked independently and may disagree; a
//! task can be `in_progress` and completed at the same time. Presentation
//! decides which one wins (see [`crate::presenter`]).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a `TaskId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a valid [`TaskId`]
#[derive(Debug, Error)]
#[error("invalid task id: {0}")]
pub struct ParseTaskIdError(#[from] uuid::Error);

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

/// Error returned when a string names no variant of a closed enum
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

/// How urgent a task is
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait
    Low,
    /// The default
    #[default]
    Medium,
    /// Needs attention first
    High,
}

impl Priority {
    /// Every priority, lowest first
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Wire name (`low`, `medium`, `high`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError {
                kind: "priority",
                value: s.to_string(),
            })
    }
}

/// Workflow position of a task
///
/// Independent of [`Task::completed`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not started (default)
    #[default]
    Todo,
    /// Being worked on
    InProgress,
    /// Finished
    Done,
}

impl Status {
    /// Every status, in workflow order
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Wire name (`todo`, `in_progress`, `done`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError {
                kind: "status",
                value: s.to_string(),
            })
    }
}

/// Collapse blank text to `None`
///
/// Classification fields treat an empty string as "not set".
#[must_use]
pub fn non_blank(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(non_blank))
}

// Present key: `null` or blank clears, text replaces. Absent key leaves the field alone.
fn blank_clears<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(blank_as_none(deserializer)?))
}

/// A tracked activity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, fixed at creation
    pub id: TaskId,
    /// Non-empty label
    pub title: String,
    /// Free text, may be empty
    pub description: String,
    /// Calendar due date
    pub due_date: Option<NaiveDate>,
    /// Urgency
    pub priority: Priority,
    /// Workflow position
    pub status: Status,
    /// Free-text category
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<String>,
    /// Customer the activity is for
    #[serde(default, deserialize_with = "blank_as_none")]
    pub customer_name: Option<String>,
    /// Project the activity belongs to
    #[serde(default, deserialize_with = "blank_as_none")]
    pub project_name: Option<String>,
    /// Organisational unit; never collected by the form
    #[serde(default, deserialize_with = "blank_as_none")]
    pub unit_name: Option<String>,
    /// Completion flag, independent of `status`
    pub completed: bool,
    /// When the task was created
    pub created_at: DateTime<Utc>,
    /// Last field update; completion toggles do not move it
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Materialise a draft with its identity and timestamps
    ///
    /// Blank classification fields are stored as `None`.
    #[must_use]
    pub fn from_draft(id: TaskId, draft: TaskDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority,
            status: draft.status,
            category: draft.category.and_then(non_blank),
            customer_name: draft.customer_name.and_then(non_blank),
            project_name: draft.project_name.and_then(non_blank),
            unit_name: draft.unit_name.and_then(non_blank),
            completed: draft.completed,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply every field set in `patch`
    ///
    /// An empty title in the patch is ignored so a stored title never
    /// becomes empty. Blank classification values clear the field.
    /// `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: TaskPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title.filter(|t| !t.is_empty()) {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(category) = patch.category {
            self.category = category.and_then(non_blank);
        }
        if let Some(customer_name) = patch.customer_name {
            self.customer_name = customer_name.and_then(non_blank);
        }
        if let Some(project_name) = patch.project_name {
            self.project_name = project_name.and_then(non_blank);
        }
        if let Some(unit_name) = patch.unit_name {
            self.unit_name = unit_name.and_then(non_blank);
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self.updated_at = now;
    }
}

/// Everything needed to create a task except identity and timestamps
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Non-empty label (checked by the form, not by the store)
    pub title: String,
    /// Free text
    pub description: String,
    /// Calendar due date
    pub due_date: Option<NaiveDate>,
    /// Urgency
    pub priority: Priority,
    /// Workflow position
    pub status: Status,
    /// Free-text category
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<String>,
    /// Customer name
    #[serde(default, deserialize_with = "blank_as_none")]
    pub customer_name: Option<String>,
    /// Project name
    #[serde(default, deserialize_with = "blank_as_none")]
    pub project_name: Option<String>,
    /// Organisational unit
    #[serde(default, deserialize_with = "blank_as_none")]
    pub unit_name: Option<String>,
    /// Initial completion flag
    pub completed: bool,
}

impl TaskDraft {
    /// A draft with the given title and every other field at its default
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            due_date: None,
            priority: Priority::default(),
            status: Status::default(),
            category: None,
            customer_name: None,
            project_name: None,
            unit_name: None,
            completed: false,
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the due date
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the status
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Set the category (blank means none)
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(category);
        self
    }

    /// Set the customer name (blank means none)
    #[must_use]
    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = non_blank(name);
        self
    }

    /// Set the project name (blank means none)
    #[must_use]
    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = non_blank(name);
        self
    }

    /// Set the unit name (blank means none)
    #[must_use]
    pub fn with_unit_name(mut self, name: impl Into<String>) -> Self {
        self.unit_name = non_blank(name);
        self
    }

    /// Set the initial completion flag
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// A partial update to an existing task
///
/// `None` leaves a field alone. Optional fields use `Some(None)` to clear.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New due date, or `Some(None)` to remove it
    pub due_date: Option<Option<NaiveDate>>,
    /// New priority
    pub priority: Option<Priority>,
    /// New status
    pub status: Option<Status>,
    /// New category, or `Some(None)` to remove it
    #[serde(default, deserialize_with = "blank_clears")]
    pub category: Option<Option<String>>,
    /// New customer name, or `Some(None)` to remove it
    #[serde(default, deserialize_with = "blank_clears")]
    pub customer_name: Option<Option<String>>,
    /// New project name, or `Some(None)` to remove it
    #[serde(default, deserialize_with = "blank_clears")]
    pub project_name: Option<Option<String>>,
    /// New unit name, or `Some(None)` to remove it
    #[serde(default, deserialize_with = "blank_clears")]
    pub unit_name: Option<Option<String>>,
    /// New completion flag
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// A patch that changes nothing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Replace the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace or clear the due date
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replace the priority
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replace the status
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Replace the category; blank clears it
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(non_blank(category));
        self
    }

    /// Replace the customer name; blank clears it
    #[must_use]
    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(non_blank(name));
        self
    }

    /// Replace the project name; blank clears it
    #[must_use]
    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(non_blank(name));
        self
    }

    /// Replace the unit name; blank clears it
    #[must_use]
    pub fn with_unit_name(mut self, name: impl Into<String>) -> Self {
        self.unit_name = Some(non_blank(name));
        self
    }

    /// Replace the completion flag
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn draft_defaults() {
        let draft = TaskDraft::new("Buy milk");
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.status, Status::Todo);
        assert_eq!(draft.due_date, None);
        assert!(!draft.completed);
        assert!(draft.description.is_empty());
    }

    #[test]
    fn blank_classification_is_absent() {
        let draft = TaskDraft::new("x")
            .with_category("")
            .with_customer_name("   ")
            .with_project_name(" Apollo ");
        assert_eq!(draft.category, None);
        assert_eq!(draft.customer_name, None);
        assert_eq!(draft.project_name.as_deref(), Some("Apollo"));
    }

    #[test]
    fn from_draft_stamps_both_timestamps() {
        let id = TaskId::from_uuid(Uuid::from_u128(7));
        let task = Task::from_draft(id, TaskDraft::new("Report"), at(9));
        assert_eq!(task.id, id);
        assert_eq!(task.created_at, at(9));
        assert_eq!(task.updated_at, at(9));
    }

    #[test]
    fn patch_sets_only_named_fields() {
        let id = TaskId::from_uuid(Uuid::from_u128(1));
        let mut task = Task::from_draft(
            id,
            TaskDraft::new("Old").with_category("Ops").with_priority(Priority::Low),
            at(9),
        );

        task.apply(
            TaskPatch::new().with_title("New").with_category(""),
            at(10),
        );

        assert_eq!(task.title, "New");
        assert_eq!(task.category, None);
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.created_at, at(9));
        assert_eq!(task.updated_at, at(10));
    }

    #[test]
    fn patch_ignores_empty_title() {
        let mut task = Task::from_draft(
            TaskId::from_uuid(Uuid::from_u128(1)),
            TaskDraft::new("Keep me"),
            at(9),
        );
        task.apply(TaskPatch::new().with_title(""), at(10));
        assert_eq!(task.title, "Keep me");

        task.apply(TaskPatch::new().with_title("  "), at(11));
        assert_eq!(task.title, "  ");
    }

    #[test]
    fn blank_classification_from_json_is_absent() {
        let draft: TaskDraft = serde_json::from_value(serde_json::json!({
            "title": "x",
            "description": "",
            "dueDate": null,
            "priority": "medium",
            "status": "todo",
            "category": "",
            "customerName": "  ",
            "projectName": "Apollo",
            "completed": false
        }))
        .unwrap();
        assert_eq!(draft.category, None);
        assert_eq!(draft.customer_name, None);
        assert_eq!(draft.project_name.as_deref(), Some("Apollo"));
        assert_eq!(draft.unit_name, None);

        let patch: TaskPatch =
            serde_json::from_value(serde_json::json!({ "category": "", "unitName": null }))
                .unwrap();
        assert_eq!(patch.category, Some(None));
        assert_eq!(patch.unit_name, Some(None));
        assert_eq!(patch.customer_name, None);
    }

    #[test]
    fn blank_classification_literals_are_normalised() {
        let id = TaskId::from_uuid(Uuid::from_u128(1));
        let draft = TaskDraft {
            category: Some(String::new()),
            customer_name: Some(" Acme ".to_string()),
            ..TaskDraft::new("x")
        };
        let mut task = Task::from_draft(id, draft, at(9));
        assert_eq!(task.category, None);
        assert_eq!(task.customer_name.as_deref(), Some("Acme"));

        task.apply(
            TaskPatch {
                customer_name: Some(Some(String::new())),
                project_name: Some(Some("   ".to_string())),
                ..TaskPatch::default()
            },
            at(10),
        );
        assert_eq!(task.customer_name, None);
        assert_eq!(task.project_name, None);
    }

    #[test]
    fn empty_patch_detection() {
        assert!(TaskPatch::new().is_empty());
        assert!(!TaskPatch::new().with_completed(false).is_empty());
        assert!(!TaskPatch::new().with_due_date(None).is_empty());
    }

    #[test]
    fn enums_parse_wire_names() {
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!(" HIGH ".parse::<Priority>().unwrap(), Priority::High);
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err.to_string(), "unknown priority `urgent`");
    }

    #[test]
    fn serde_uses_camel_case_fields_and_snake_case_variants() {
        let task = Task::from_draft(
            TaskId::from_uuid(Uuid::from_u128(3)),
            TaskDraft::new("Ship").with_status(Status::InProgress),
            at(9),
        );
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["status"], "in_progress");
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["dueDate"], serde_json::Value::Null);
        assert_eq!(json["unitName"], serde_json::Value::Null);
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000003");
    }

    #[test]
    fn task_id_round_trips_through_display() {
        let id = TaskId::from_uuid(Uuid::from_u128(42));
        assert_eq!(id.to_string().parse::<TaskId>().unwrap(), id);
        assert!("not-a-uuid".parse::<TaskId>().is_err());
    }
}
