//! End-to-end flows through the `Store`, with effects actually executed.

use activity_tracker::notify::{Notification, RecordingNotifier};
use activity_tracker::{
    ActivityAction, ActivityEnvironment, ActivityReducer, ActivityState, ListEvent, Status,
    TaskForm, TaskList, TaskPatch,
};
use activity_tracker_runtime::{Store, StoreConfig};
use activity_tracker_testing::{SequentialIdGenerator, test_clock};
use std::sync::Arc;
use std::time::Duration;

type ActivityStore = Store<ActivityState, ActivityAction, ActivityEnvironment, ActivityReducer>;

const WAIT: Duration = Duration::from_secs(2);

fn setup() -> (ActivityStore, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let env = ActivityEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(SequentialIdGenerator::new()),
        notifier.clone(),
    );
    let store = Store::with_config(
        ActivityState::new(),
        ActivityReducer::new(),
        env,
        StoreConfig::default().with_broadcast_capacity(64),
    );
    (store, notifier)
}

async fn dispatch(store: &ActivityStore, action: ActivityAction) {
    let mut handle = store.send(action).await.unwrap();
    handle.wait_with_timeout(WAIT).await.unwrap();
}

async fn create(store: &ActivityStore, title: &str) {
    dispatch(store, ActivityAction::ShowForm).await;
    let mut form = TaskForm::new();
    form.set_title(title);
    dispatch(store, form.submit().unwrap().into()).await;
}

async fn titles(store: &ActivityStore) -> Vec<String> {
    store
        .state(|s| s.tasks.list().iter().map(|t| t.title.clone()).collect())
        .await
}

#[tokio::test]
async fn create_delete_toggle_scenario() {
    let (store, notifier) = setup();

    create(&store, "A").await;
    create(&store, "B").await;
    assert_eq!(titles(&store).await, vec!["A", "B"]);

    let tasks = store.state(|s| s.tasks.list().to_vec()).await;
    let list = TaskList::new(&tasks);
    let mut cards = list.cards();
    let a = cards.next().unwrap();
    let b = cards.next().unwrap();

    dispatch(&store, a.on_delete().into()).await;
    assert_eq!(titles(&store).await, vec!["B"]);

    dispatch(&store, b.on_complete().into()).await;
    let task_b = store.state(|s| s.tasks.list()[0].clone()).await;
    assert!(task_b.completed);
    assert_eq!(task_b.status, Status::Todo);

    dispatch(&store, b.on_complete().into()).await;
    let task_b = store.state(|s| s.tasks.list()[0].clone()).await;
    assert!(!task_b.completed);

    let seen: Vec<_> = notifier
        .notifications()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(
        seen,
        vec![
            "Activity created",
            "Activity created",
            "Activity deleted",
            "Activity updated",
            "Activity updated",
        ]
    );
}

#[tokio::test]
async fn ids_are_unique_and_form_closes() {
    let (store, _notifier) = setup();

    for n in 0..5 {
        create(&store, &format!("task {n}")).await;
    }

    let (ids, visible) = store
        .state(|s| {
            let ids: Vec<_> = s.tasks.list().iter().map(|t| t.id).collect();
            (ids, s.is_form_visible())
        })
        .await;
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
    assert!(!visible);
}

#[tokio::test]
async fn missing_ids_are_silent() {
    let (store, notifier) = setup();
    create(&store, "only").await;
    notifier.take();

    let gone = {
        let tasks = store.state(|s| s.tasks.list().to_vec()).await;
        tasks[0].id
    };
    dispatch(&store, ListEvent::Delete(gone).into()).await;
    dispatch(&store, ListEvent::Delete(gone).into()).await;
    dispatch(&store, ListEvent::Complete(gone).into()).await;

    assert!(store.state(|s| s.tasks.is_empty()).await);
    assert_eq!(notifier.notifications(), vec![Notification::deleted()]);
}

#[tokio::test]
async fn cancelled_form_creates_nothing() {
    let (store, notifier) = setup();

    dispatch(&store, ActivityAction::ShowForm).await;
    assert!(store.state(ActivityState::is_form_visible).await);

    let mut form = TaskForm::new();
    form.set_title("never mind");
    dispatch(&store, form.cancel().into()).await;

    assert!(!store.state(ActivityState::is_form_visible).await);
    assert!(store.state(|s| s.tasks.is_empty()).await);
    assert!(notifier.notifications().is_empty());
}

#[tokio::test]
async fn edit_intent_reaches_subscribers_without_changing_state() {
    let (store, notifier) = setup();
    create(&store, "draft report").await;
    notifier.take();

    let mut rx = store.subscribe_actions();
    let before = store.state(Clone::clone).await;
    let snapshot = before.tasks.list()[0].clone();

    dispatch(&store, ListEvent::Edit(snapshot.clone()).into()).await;

    assert_eq!(rx.recv().await.unwrap(), ActivityAction::List(ListEvent::Edit(snapshot.clone())));
    assert_eq!(store.state(Clone::clone).await, before);
    assert!(notifier.notifications().is_empty());

    // A subscriber completing the round trip through UpdateTask
    dispatch(
        &store,
        ActivityAction::UpdateTask {
            id: snapshot.id,
            patch: TaskPatch::new().with_title("final report"),
        },
    )
    .await;
    assert_eq!(titles(&store).await, vec!["final report"]);
    assert_eq!(notifier.notifications(), vec![Notification::edited()]);
}
