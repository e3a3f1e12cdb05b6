use axum::http::StatusCode;
use serde_json::json;
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, fixture};

use super::*;
use crate::server::{
    data::file_store::ApplicationFileStore,
    error::{validation::ValidationError, AppError},
    service::{application::ApplicationService, storage::StorageRouter},
};

fn file_router(dir: &TempDir) -> StorageRouter {
    StorageRouter::new(
        None,
        ApplicationFileStore::new(dir.path().join("applications.json")),
    )
}

fn body(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap()
}

/// Tests a valid submission end to end.
///
/// Expected: stored with id 1 and the notification delivered once
#[tokio::test]
async fn stores_and_notifies() {
    let dir = TempDir::new().unwrap();
    let storage = file_router(&dir);
    let endpoint = MockEndpoint::start(StatusCode::OK).await;
    let notifier = endpoint.notifier();

    let service = ApplicationService::new(&storage, &notifier);
    let application = service
        .submit(&body(&fixture::application::submission()))
        .await
        .unwrap();

    assert_eq!(application.id, 1);

    let received = endpoint.wait_for(1).await;
    assert_eq!(received.len(), 1);
    assert!(received[0]["text"]
        .as_str()
        .unwrap()
        .contains("Name: TitanViper"));
}

/// Tests a submission stored in the relational store.
///
/// Expected: Ok with the database id and a row in the table
#[tokio::test]
async fn stores_in_primary_when_available() {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let dir = TempDir::new().unwrap();
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();
    let storage = StorageRouter::new(
        Some(db.clone()),
        ApplicationFileStore::new(dir.path().join("applications.json")),
    );
    let notifier = ApplicationNotifier::new(reqwest::Client::new(), UNREACHABLE_URL, None);

    let service = ApplicationService::new(&storage, &notifier);
    let application = service
        .submit(&body(&fixture::application::submission()))
        .await
        .unwrap();

    assert_eq!(application.id, 1);
    assert_eq!(
        entity::prelude::Application::find().count(&db).await.unwrap(),
        1
    );
}

/// Tests that a failing notification does not affect the outcome.
///
/// Expected: Ok with the stored application even though the endpoint is unreachable
#[tokio::test]
async fn succeeds_when_notification_fails() {
    let dir = TempDir::new().unwrap();
    let storage = file_router(&dir);
    let notifier = notifier_for(UNREACHABLE_URL);

    let service = ApplicationService::new(&storage, &notifier);
    let result = service
        .submit(&body(&fixture::application::submission()))
        .await;

    assert_eq!(result.unwrap().id, 1);
}

/// Tests that a failed notification is contained in its background task.
///
/// Expected: the dispatched task completes without panicking
#[tokio::test]
async fn dispatch_logs_notification_failure() {
    let dir = TempDir::new().unwrap();
    let storage = file_router(&dir);
    let notifier = notifier_for(UNREACHABLE_URL);
    let service = ApplicationService::new(&storage, &notifier);

    let application = service
        .submit(&body(&fixture::application::submission()))
        .await
        .unwrap();

    service
        .dispatch_notification(application)
        .await
        .unwrap();
}

/// Tests a body that is not JSON.
///
/// Expected: Err(AppError::MalformedPayload) and nothing stored
#[tokio::test]
async fn rejects_malformed_body() {
    let dir = TempDir::new().unwrap();
    let storage = file_router(&dir);
    let notifier = notifier_for(UNREACHABLE_URL);

    let service = ApplicationService::new(&storage, &notifier);
    let result = service.submit(b"{ \"inGameName\": ").await;

    assert!(matches!(result, Err(AppError::MalformedPayload(_))));
    assert!(!dir.path().join("applications.json").exists());
}

/// Tests a JSON body whose top level is not an object.
///
/// Expected: Err(AppError::MalformedPayload) and nothing stored
#[tokio::test]
async fn rejects_non_object_body() {
    let dir = TempDir::new().unwrap();
    let storage = file_router(&dir);
    let notifier = notifier_for(UNREACHABLE_URL);

    let service = ApplicationService::new(&storage, &notifier);

    let payloads: [&[u8]; 3] = [b"[1, 2]", b"\"TitanViper\"", b"null"];
    for payload in payloads {
        let result = service.submit(payload).await;
        assert!(matches!(result, Err(AppError::MalformedPayload(_))));
    }
    assert!(!dir.path().join("applications.json").exists());
}

/// Tests a field of the wrong JSON type.
///
/// Expected: Err(AppError::ValidationErr) with an error under age and nothing stored
#[tokio::test]
async fn rejects_wrong_field_type() {
    let dir = TempDir::new().unwrap();
    let storage = file_router(&dir);
    let notifier = notifier_for(UNREACHABLE_URL);

    let mut submission = fixture::application::submission();
    submission["age"] = json!("twenty");

    let service = ApplicationService::new(&storage, &notifier);
    let result = service.submit(&body(&submission)).await;

    match result {
        Err(AppError::ValidationErr(err)) => {
            assert!(matches!(err, ValidationError::InvalidFields(_)));
            let errors = err.field_errors();
            assert_eq!(errors.len(), 1);
            assert!(errors.contains("age"));
        }
        other => panic!("expected ValidationErr, got {:?}", other.map(|app| app.id)),
    }
    assert!(!dir.path().join("applications.json").exists());
}

/// Tests that invalid submissions reach neither storage nor the notifier.
///
/// Expected: Err(AppError::ValidationErr), no file written, no message sent
#[tokio::test]
async fn validation_failure_stores_nothing() {
    let dir = TempDir::new().unwrap();
    let storage = file_router(&dir);
    let endpoint = MockEndpoint::start(StatusCode::OK).await;
    let notifier = endpoint.notifier();

    let mut submission = fixture::application::submission();
    submission["agreedToRules"] = json!(false);

    let service = ApplicationService::new(&storage, &notifier);
    let result = service.submit(&body(&submission)).await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));
    assert!(!dir.path().join("applications.json").exists());
    assert!(endpoint.received.lock().await.is_empty());
}

/// Tests the outcome when no backend can store the application.
///
/// Expected: Err(AppError::StorageErr) and no notification
#[tokio::test]
async fn reports_storage_failure() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    tokio::fs::write(&blocker, "file").await.unwrap();
    let storage = StorageRouter::new(
        None,
        ApplicationFileStore::new(blocker.join("applications.json")),
    );
    let endpoint = MockEndpoint::start(StatusCode::OK).await;
    let notifier = endpoint.notifier();

    let service = ApplicationService::new(&storage, &notifier);
    let result = service
        .submit(&body(&fixture::application::submission()))
        .await;

    assert!(matches!(result, Err(AppError::StorageErr(_))));
    assert!(endpoint.received.lock().await.is_empty());
}
