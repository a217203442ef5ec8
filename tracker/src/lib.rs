//! In-memory activity tracker.
//!
//! A form creates tasks, a list shows them, and a container owns the one
//! task collection and applies every event the two components emit:
//!
//! - [`form::TaskForm`] collects a draft and emits [`form::FormEvent`]s
//! - [`presenter::TaskList`] renders tasks and emits [`presenter::ListEvent`]s
//! - [`reducer::ActivityReducer`] turns those events into [`store::TaskStore`] operations
//!
//! Nothing is persisted; state lives as long as the `Store` holding it.
//!
//! # Quick Start
//!
//! ```no_run
//! use activity_tracker::{
//!     ActivityAction, ActivityEnvironment, ActivityReducer, ActivityState, TaskForm,
//!     TaskList, notify::TracingNotifier,
//! };
//! use activity_tracker_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = ActivityEnvironment::system(Arc::new(TracingNotifier));
//! let store = Store::new(ActivityState::new(), ActivityReducer::new(), env);
//!
//! // Open the form, fill it in, submit
//! store.send(ActivityAction::ShowForm).await?;
//! let mut form = TaskForm::new();
//! form.set_title("Buy milk");
//! store.send(form.submit()?.into()).await?;
//!
//! // Complete the first task from the list
//! let tasks = store.state(|s| s.tasks.list().to_vec()).await;
//! if let Some(card) = TaskList::new(&tasks).cards().next() {
//!     store.send(card.on_complete().into()).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod form;
pub mod notify;
pub mod presenter;
pub mod reducer;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::TrackerConfig;
pub use form::{FormError, FormEvent, TaskForm};
pub use presenter::{ListEvent, TaskCard, TaskList};
pub use reducer::{
    ActivityAction, ActivityEnvironment, ActivityReducer, ActivityState, FormVisibility,
};
pub use store::TaskStore;
pub use types::{Priority, Status, Task, TaskDraft, TaskId, TaskPatch};
