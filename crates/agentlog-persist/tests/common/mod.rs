// Behaviour every AgentLogStore backend must share

use agentlog_persist::{AgentLogStore, NewAgentLog};

pub fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}

pub async fn create_stamps_server_fields(store: &dyn AgentLogStore) {
    let user = unique("user");
    let thread = unique("thread");

    let id = store
        .create_log(NewAgentLog::new(&user, &thread).event("chat").model("gpt-4o").tokens(320))
        .await
        .unwrap();

    let log = store.get_log_by_thread(&thread).await.unwrap().expect("log should exist");
    assert_eq!(log.id, id);
    assert_eq!(log.user_id, user);
    assert_eq!(log.event.as_deref(), Some("chat"));
    assert_eq!(log.model.as_deref(), Some("gpt-4o"));
    assert_eq!(log.tokens, Some(320));
    assert!(!log.deleted);
    assert!(log.updated_at.is_none());
    assert!(log.deleted_at.is_none());
}

pub async fn get_logs_by_user_only_returns_active(store: &dyn AgentLogStore) {
    let user = unique("user");
    let kept = unique("thread");
    let dropped = unique("thread");
    let other_user = unique("user");

    store.create_log(NewAgentLog::new(&user, &kept)).await.unwrap();
    store.create_log(NewAgentLog::new(&user, &dropped)).await.unwrap();
    store.create_log(NewAgentLog::new(&other_user, unique("thread"))).await.unwrap();
    store.soft_delete_log(&dropped).await.unwrap();

    let logs = store.get_logs_by_user(&user).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].thread_id, kept);
    assert!(logs.iter().all(|log| !log.deleted));

    assert!(store.get_logs_by_user(&unique("nobody")).await.unwrap().is_empty());
}

pub async fn soft_delete_hides_log(store: &dyn AgentLogStore) {
    let user = unique("user");
    let thread = unique("thread");
    store.create_log(NewAgentLog::new(&user, &thread)).await.unwrap();

    store.soft_delete_log(&thread).await.unwrap();

    assert!(store.get_log_by_thread(&thread).await.unwrap().is_none());
    assert!(store.get_logs_by_user(&user).await.unwrap().is_empty());
}

pub async fn update_tokens_is_visible(store: &dyn AgentLogStore) {
    let thread = unique("thread");
    store.create_log(NewAgentLog::new(unique("user"), &thread).tokens(10)).await.unwrap();

    store.update_tokens(&thread, 42).await.unwrap();

    let log = store.get_log_by_thread(&thread).await.unwrap().unwrap();
    assert_eq!(log.tokens, Some(42));
    let updated_at = log.updated_at.expect("updated_at should be set");
    assert!(updated_at > log.created_at);
}

pub async fn mutations_on_missing_thread_are_noops(store: &dyn AgentLogStore) {
    let user = unique("user");
    let thread = unique("thread");
    store.create_log(NewAgentLog::new(&user, &thread).tokens(7)).await.unwrap();

    let missing = unique("missing");
    store.update_tokens(&missing, 100).await.unwrap();
    store.soft_delete_log(&missing).await.unwrap();

    assert!(store.get_log_by_thread(&missing).await.unwrap().is_none());
    let log = store.get_log_by_thread(&thread).await.unwrap().unwrap();
    assert_eq!(log.tokens, Some(7));
    assert!(log.updated_at.is_none());
}

pub async fn soft_delete_twice_is_ok(store: &dyn AgentLogStore) {
    let thread = unique("thread");
    store.create_log(NewAgentLog::new(unique("user"), &thread)).await.unwrap();

    store.soft_delete_log(&thread).await.unwrap();
    store.soft_delete_log(&thread).await.unwrap();

    assert!(store.get_log_by_thread(&thread).await.unwrap().is_none());
}

pub async fn mutations_skip_deleted_logs(store: &dyn AgentLogStore) {
    let user = unique("user");
    let thread = unique("thread");
    store.create_log(NewAgentLog::new(&user, &thread).tokens(1)).await.unwrap();
    store.soft_delete_log(&thread).await.unwrap();

    // Thread reused after the first log was deleted
    let fresh_id = store.create_log(NewAgentLog::new(&user, &thread).tokens(2)).await.unwrap();
    store.update_tokens(&thread, 9).await.unwrap();

    let log = store.get_log_by_thread(&thread).await.unwrap().unwrap();
    assert_eq!(log.id, fresh_id);
    assert_eq!(log.tokens, Some(9));
    assert_eq!(store.get_logs_by_user(&user).await.unwrap().len(), 1);
}

pub async fn duplicate_threads_resolve_to_oldest(store: &dyn AgentLogStore) {
    let user = unique("user");
    let thread = unique("thread");
    let first_id = store.create_log(NewAgentLog::new(&user, &thread).tokens(1)).await.unwrap();
    let second_id = store.create_log(NewAgentLog::new(&user, &thread).tokens(2)).await.unwrap();

    let log = store.get_log_by_thread(&thread).await.unwrap().unwrap();
    assert_eq!(log.id, first_id);

    store.update_tokens(&thread, 50).await.unwrap();
    let logs = store.get_logs_by_user(&user).await.unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].id, first_id);
    assert_eq!(logs[0].tokens, Some(50));
    assert_eq!(logs[1].id, second_id);
    assert_eq!(logs[1].tokens, Some(2));

    // Deleting the oldest exposes the next one
    store.soft_delete_log(&thread).await.unwrap();
    let log = store.get_log_by_thread(&thread).await.unwrap().unwrap();
    assert_eq!(log.id, second_id);
}

pub async fn invalid_log_is_rejected(store: &dyn AgentLogStore) {
    let err = store.create_log(NewAgentLog::new(unique("user"), " ")).await.unwrap_err();
    assert!(err.to_string().contains("thread_id"));
}

/// Insert, read, update, soft-delete, read again
pub async fn lifecycle_scenario(store: &dyn AgentLogStore) {
    let user = unique("u1");
    let thread = unique("t100");

    store
        .create_log(NewAgentLog::new(&user, &thread).event("chat").model("gpt-4o").tokens(320))
        .await
        .unwrap();

    let logs = store.get_logs_by_user(&user).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].tokens, Some(320));

    store.update_tokens(&thread, 400).await.unwrap();
    let log = store.get_log_by_thread(&thread).await.unwrap().unwrap();
    assert_eq!(log.tokens, Some(400));

    store.soft_delete_log(&thread).await.unwrap();
    assert!(store.get_logs_by_user(&user).await.unwrap().is_empty());
}
