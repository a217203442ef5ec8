//! Command-line walkthrough of the activity tracker.
//!
//! Creates, completes and deletes a few activities through the same form
//! and list components a UI would use, printing the list after each step.

use activity_tracker::notify::{Notifier, SilentNotifier, TracingNotifier};
use activity_tracker::{
    ActivityAction, ActivityEnvironment, ActivityReducer, ActivityState, Priority, Status,
    TaskForm, TaskList, TrackerConfig,
};
use activity_tracker_runtime::Store;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type ActivityStore = Store<ActivityState, ActivityAction, ActivityEnvironment, ActivityReducer>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let config = TrackerConfig::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let notifier: Arc<dyn Notifier> = if config.notifications {
        Arc::new(TracingNotifier)
    } else {
        Arc::new(SilentNotifier)
    };
    let env = ActivityEnvironment::system(notifier);
    let store = Store::with_config(
        ActivityState::new(),
        ActivityReducer::new(),
        env,
        config.store_config(),
    );

    println!("=== Activities ===\n");

    create(&store, |form| {
        form.set_title("Buy milk");
    })
    .await?;
    create(&store, |form| {
        form.set_title("Quarterly review")
            .set_description("Prepare the slides")
            .set_priority(Priority::High)
            .set_status(Status::InProgress)
            .set_due_date(NaiveDate::from_ymd_opt(2025, 3, 31))
            .set_customer_name("Acme")
            .set_project_name("Apollo");
    })
    .await?;
    print_list(&store, "After creating two activities").await;

    // Abandoned form: nothing is created
    store.send(ActivityAction::ShowForm).await?;
    store.send(TaskForm::new().cancel().into()).await?;

    let tasks = store.state(|s| s.tasks.list().to_vec()).await;
    let list = TaskList::new(&tasks);
    if let Some(review) = list.cards().nth(1) {
        store.send(review.on_complete().into()).await?;
    }
    print_list(&store, "After completing the review").await;

    if let Some(milk) = list.cards().next() {
        store.send(milk.on_delete().into()).await?;
        // Already gone: silently ignored
        store.send(milk.on_delete().into()).await?;
    }
    print_list(&store, "After deleting the milk run").await;

    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}

async fn create<F>(store: &ActivityStore, fill: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut TaskForm),
{
    store.send(ActivityAction::ShowForm).await?;
    let mut form = TaskForm::new();
    fill(&mut form);
    let mut handle = store.send(form.submit()?.into()).await?;
    handle.wait().await;
    Ok(())
}

async fn print_list(store: &ActivityStore, heading: &str) {
    let tasks = store.state(|s| s.tasks.list().to_vec()).await;
    println!("{heading}:\n{}\n", TaskList::new(&tasks));
}
