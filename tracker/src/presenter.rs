//! Read-only presentation of the task collection.
//!
//! Nothing here mutates state. Each card derives display values from its
//! task and turns user gestures into [`ListEvent`]s for the container.

use crate::types::{Priority, Status, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Due dates render like `Jan 5, 2025`
pub const DUE_DATE_FORMAT: &str = "%b %-d, %Y";

/// Label shown instead of the status once a task is completed
pub const COMPLETED_LABEL: &str = "Completed";

/// What the list hands to its owner
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListEvent {
    /// Remove this task
    Delete(TaskId),
    /// The user wants to edit; carries the task as currently shown
    Edit(Task),
    /// Flip completion on this task
    Complete(TaskId),
}

/// Visual emphasis of a badge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Grey, unobtrusive
    Neutral,
    /// Primary highlight
    Accent,
    /// Draws attention
    Warning,
    /// Positive outcome
    Success,
    /// In flight
    Caution,
}

/// Badge emphasis for a priority
#[must_use]
pub const fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::Low => Tone::Neutral,
        Priority::Medium => Tone::Accent,
        Priority::High => Tone::Warning,
    }
}

/// Capitalised priority name
#[must_use]
pub const fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
    }
}

/// Badge emphasis for a status
#[must_use]
pub const fn status_tone(status: Status) -> Tone {
    match status {
        Status::Todo => Tone::Neutral,
        Status::InProgress => Tone::Caution,
        Status::Done => Tone::Success,
    }
}

/// Title-cased status name (`in_progress` → `In Progress`)
#[must_use]
pub fn humanize_status(status: Status) -> String {
    status
        .as_str()
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Status text for a task; completion overrides the stored status
#[must_use]
pub fn status_label(task: &Task) -> String {
    if task.completed {
        COMPLETED_LABEL.to_string()
    } else {
        humanize_status(task.status)
    }
}

/// Footer field kinds, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FooterField {
    /// Customer name
    Customer,
    /// Project name
    Project,
    /// Organisational unit
    Unit,
}

impl FooterField {
    const fn label(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Project => "project",
            Self::Unit => "unit",
        }
    }
}

/// One rendered row of the list
#[derive(Clone, Copy, Debug)]
pub struct TaskCard<'a> {
    task: &'a Task,
}

impl<'a> TaskCard<'a> {
    /// Wrap a task for display
    #[must_use]
    pub const fn new(task: &'a Task) -> Self {
        Self { task }
    }

    /// The underlying task
    #[must_use]
    pub const fn task(&self) -> &'a Task {
        self.task
    }

    /// Badge text for the priority
    #[must_use]
    pub const fn priority_label(&self) -> &'static str {
        priority_label(self.task.priority)
    }

    /// Badge emphasis for the priority
    #[must_use]
    pub const fn priority_tone(&self) -> Tone {
        priority_tone(self.task.priority)
    }

    /// Badge text for the status, `Completed` when the task is done
    #[must_use]
    pub fn status_label(&self) -> String {
        status_label(self.task)
    }

    /// Badge emphasis for the stored status
    #[must_use]
    pub const fn status_tone(&self) -> Tone {
        status_tone(self.task.status)
    }

    /// Formatted due date, if any
    #[must_use]
    pub fn due_date_label(&self) -> Option<String> {
        self.task
            .due_date
            .map(|date| date.format(DUE_DATE_FORMAT).to_string())
    }

    /// Category badge, if any
    #[must_use]
    pub fn category(&self) -> Option<&'a str> {
        shown(self.task.category.as_deref())
    }

    /// Footer entries that have a value
    #[must_use]
    pub fn footer(&self) -> Vec<(FooterField, &'a str)> {
        [
            (FooterField::Customer, self.task.customer_name.as_deref()),
            (FooterField::Project, self.task.project_name.as_deref()),
            (FooterField::Unit, self.task.unit_name.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| shown(value).map(|v| (field, v)))
        .collect()
    }

    /// Delete button
    #[must_use]
    pub const fn on_delete(&self) -> ListEvent {
        ListEvent::Delete(self.task.id)
    }

    /// Edit button
    #[must_use]
    pub fn on_edit(&self) -> ListEvent {
        ListEvent::Edit(self.task.clone())
    }

    /// Complete button
    #[must_use]
    pub const fn on_complete(&self) -> ListEvent {
        ListEvent::Complete(self.task.id)
    }
}

/// Blank text is not shown
fn shown(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl fmt::Display for TaskCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.task.completed { 'x' } else { ' ' };
        write!(
            f,
            "[{mark}] {} ({} · {})",
            self.task.title,
            self.priority_label(),
            self.status_label()
        )?;
        if !self.task.description.is_empty() {
            write!(f, "\n    {}", self.task.description)?;
        }

        let mut details = Vec::new();
        if let Some(category) = self.category() {
            details.push(format!("#{category}"));
        }
        if let Some(due) = self.due_date_label() {
            details.push(format!("due {due}"));
        }
        if !details.is_empty() {
            write!(f, "\n    {}", details.join(" · "))?;
        }

        let footer = self.footer();
        if !footer.is_empty() {
            let parts: Vec<String> = footer
                .iter()
                .map(|(field, value)| format!("{}: {value}", field.label()))
                .collect();
            write!(f, "\n    {}", parts.join(" | "))?;
        }
        Ok(())
    }
}

/// The whole list, in collection order
#[derive(Clone, Copy, Debug)]
pub struct TaskList<'a> {
    tasks: &'a [Task],
}

impl<'a> TaskList<'a> {
    /// Present a task collection
    #[must_use]
    pub const fn new(tasks: &'a [Task]) -> Self {
        Self { tasks }
    }

    /// One card per task, in order
    pub fn cards(&self) -> impl Iterator<Item = TaskCard<'a>> + use<'a> {
        self.tasks.iter().map(TaskCard::new)
    }

    /// The card for a given task
    #[must_use]
    pub fn card(&self, id: &TaskId) -> Option<TaskCard<'a>> {
        self.tasks.iter().find(|t| t.id == *id).map(TaskCard::new)
    }

    /// Whether there is nothing to show
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl fmt::Display for TaskList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "No activities yet.");
        }
        for (idx, card) in self.cards().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
