//! The container: owns the task collection and the form visibility, and
//! applies every event coming from the form and the list.
//!
//! ```text
//!  FormHidden --ShowForm--> FormVisible
//!  FormVisible --Submitted(draft)--> FormHidden   (create)
//!  FormVisible --Cancelled--> FormHidden
//!  any --Delete / Complete / UpdateTask--> same   (store op)
//!  any --Edit--> same                             (no-op, observable via the store broadcast)
//! ```

use crate::form::FormEvent;
use crate::notify::{Notification, Notifier};
use crate::presenter::ListEvent;
use crate::store::TaskStore;
use crate::types::{Task, TaskDraft, TaskId, TaskPatch};
use activity_tracker_core::{
    SmallVec,
    effect::Effect,
    environment::{Clock, IdGenerator, RandomIdGenerator, SystemClock},
    reducer::Reducer,
    smallvec,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Whether the create form is on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormVisibility {
    /// Only the list is shown (initial)
    #[default]
    Hidden,
    /// The create form is open above the list
    Visible,
}

/// Container state: the single source of truth
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityState {
    /// Every task, in insertion order
    pub tasks: TaskStore,
    /// Form visibility
    pub form: FormVisibility,
}

impl ActivityState {
    /// Empty collection, form hidden
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: TaskStore::new(),
            form: FormVisibility::Hidden,
        }
    }

    /// Whether the create form is open
    #[must_use]
    pub fn is_form_visible(&self) -> bool {
        self.form == FormVisibility::Visible
    }
}

/// Everything the container reacts to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityAction {
    /// "New activity" was pressed
    ShowForm,
    /// The form submitted or cancelled
    Form(FormEvent),
    /// A gesture on the list
    List(ListEvent),
    /// Replace some fields of an existing task
    UpdateTask {
        /// Task to change
        id: TaskId,
        /// Fields to replace
        patch: TaskPatch,
    },
}

impl From<FormEvent> for ActivityAction {
    fn from(event: FormEvent) -> Self {
        Self::Form(event)
    }
}

impl From<ListEvent> for ActivityAction {
    fn from(event: ListEvent) -> Self {
        Self::List(event)
    }
}

/// Environment dependencies for the container
#[derive(Clone)]
pub struct ActivityEnvironment {
    /// Timestamps for created and updated tasks
    pub clock: Arc<dyn Clock>,
    /// Source of task ids
    pub ids: Arc<dyn IdGenerator>,
    /// Where change notifications go
    pub notifier: Arc<dyn Notifier>,
}

impl ActivityEnvironment {
    /// Creates a new `ActivityEnvironment`
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            clock,
            ids,
            notifier,
        }
    }

    /// Wall clock and random ids
    #[must_use]
    pub fn system(notifier: Arc<dyn Notifier>) -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(RandomIdGenerator), notifier)
    }

    fn notify(&self, notification: Notification) -> Effect<ActivityAction> {
        let notifier = Arc::clone(&self.notifier);
        Effect::fire_and_forget(move || notifier.notify(notification))
    }
}

/// Reducer for the container
#[derive(Clone, Debug, Default)]
pub struct ActivityReducer;

impl ActivityReducer {
    /// Creates a new `ActivityReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn submit(
        state: &mut ActivityState,
        draft: TaskDraft,
        env: &ActivityEnvironment,
    ) -> SmallVec<[Effect<ActivityAction>; 4]> {
        if !state.is_form_visible() {
            tracing::warn!("Ignoring submission while the form is hidden");
            return SmallVec::new();
        }

        let id = TaskId::from_uuid(env.ids.next_id());
        let task = state.tasks.create(draft, id, env.clock.now());
        tracing::info!(task_id = %task.id, title = %task.title, "Task created");
        state.form = FormVisibility::Hidden;

        smallvec![env.notify(Notification::created())]
    }

    fn list_event(
        state: &mut ActivityState,
        event: ListEvent,
        env: &ActivityEnvironment,
    ) -> SmallVec<[Effect<ActivityAction>; 4]> {
        match event {
            ListEvent::Delete(id) => {
                if state.tasks.delete(&id).is_none() {
                    tracing::debug!(task_id = %id, "Delete of unknown task ignored");
                    return SmallVec::new();
                }
                tracing::info!(task_id = %id, "Task deleted");
                smallvec![env.notify(Notification::deleted())]
            },
            ListEvent::Complete(id) => {
                let Some(completed) = state.tasks.toggle_complete(&id) else {
                    tracing::debug!(task_id = %id, "Completion toggle of unknown task ignored");
                    return SmallVec::new();
                };
                tracing::info!(task_id = %id, completed, "Task completion toggled");
                smallvec![env.notify(Notification::completion_toggled())]
            },
            ListEvent::Edit(task) => {
                Self::edit_requested(&task);
                SmallVec::new()
            },
        }
    }

    fn edit_requested(task: &Task) {
        // Subscribers of the store's action stream decide what editing means
        tracing::debug!(task_id = %task.id, "Edit requested");
    }
}

impl Reducer for ActivityReducer {
    type State = ActivityState;
    type Action = ActivityAction;
    type Environment = ActivityEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ActivityAction::ShowForm => {
                state.form = FormVisibility::Visible;
                SmallVec::new()
            },
            ActivityAction::Form(FormEvent::Submitted(draft)) => Self::submit(state, draft, env),
            ActivityAction::Form(FormEvent::Cancelled) => {
                state.form = FormVisibility::Hidden;
                SmallVec::new()
            },
            ActivityAction::List(event) => Self::list_event(state, event, env),
            ActivityAction::UpdateTask { id, patch } => {
                if state.tasks.update(&id, patch, env.clock.now()).is_none() {
                    tracing::debug!(task_id = %id, "Update of unknown task ignored");
                    return SmallVec::new();
                }
                tracing::info!(task_id = %id, "Task updated");
                smallvec![env.notify(Notification::edited())]
            },
        }
    }
}
