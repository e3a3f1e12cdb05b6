use super::*;

/// Tests the first append into a directory that does not exist yet.
///
/// Expected: parent directory is created and the application gets id 1
#[tokio::test]
async fn creates_file_with_first_id() -> Result<(), FileStoreError> {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let application = store.append(params()).await?;

    assert_eq!(application.id, 1);
    assert!(store.path().exists());
    assert_eq!(read_raw(&store).await.len(), 1);

    Ok(())
}

/// Tests id assignment over consecutive appends.
///
/// Expected: ids 1, 2, 3 and every record kept in insertion order
#[tokio::test]
async fn assigns_sequential_ids() -> Result<(), FileStoreError> {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(store.append(params()).await?.id);
    }

    assert_eq!(ids, vec![1, 2, 3]);

    let stored: Vec<i32> = store.read_all().await.iter().map(|a| a.id).collect();
    assert_eq!(stored, vec![1, 2, 3]);

    Ok(())
}

/// Tests that the next id follows the largest id present, not the record count.
///
/// Expected: id 8 after a file holding ids 3 and 7
#[tokio::test]
async fn continues_after_largest_existing_id() -> Result<(), FileStoreError> {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    tokio::fs::create_dir_all(store.path().parent().unwrap())
        .await
        .unwrap();
    tokio::fs::write(store.path(), r#"[{"id": 7}, {"id": 3}]"#)
        .await
        .unwrap();

    let application = store.append(params()).await?;

    assert_eq!(application.id, 8);
    assert_eq!(read_raw(&store).await.len(), 3);

    Ok(())
}

/// Tests the lenient handling of a corrupt file.
///
/// The unreadable content is discarded and numbering restarts, which can reuse ids that
/// were handed out before the corruption.
///
/// Expected: id 1 and the file holds a single valid record afterwards
#[tokio::test]
async fn treats_corrupt_file_as_empty() -> Result<(), FileStoreError> {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    tokio::fs::create_dir_all(store.path().parent().unwrap())
        .await
        .unwrap();
    tokio::fs::write(store.path(), "{ not json").await.unwrap();

    let application = store.append(params()).await?;

    assert_eq!(application.id, 1);
    assert_eq!(store.read_all().await.len(), 1);

    Ok(())
}

/// Tests the on-disk record layout.
///
/// Expected: camelCase keys, roles as an array, explicit nulls for absent optionals,
/// PENDING status, and a millisecond UTC timestamp
#[tokio::test]
async fn writes_camel_case_records() -> Result<(), FileStoreError> {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(params()).await?;

    let entries = read_raw(&store).await;
    let entry = &entries[0];

    assert_eq!(entry["inGameName"], "NightOwl");
    assert_eq!(entry["currentRank"], "Diamond");
    assert_eq!(entry["region"], "EU");
    assert_eq!(entry["roles"], serde_json::json!(["Entry"]));
    assert_eq!(entry["contactMethod"], "Telegram");
    assert_eq!(entry["telegramUsername"], "@night_owl");
    assert!(entry["whatsappNumber"].is_null());
    assert!(entry["notes"].is_null());
    assert_eq!(entry["status"], "PENDING");

    let created_at = entry["createdAt"].as_str().unwrap();
    assert!(created_at.ends_with('Z'));
    assert_eq!(created_at.len(), "2026-01-05T18:30:00.000Z".len());

    Ok(())
}

/// Tests that no temporary file is left behind after a write.
///
/// Expected: only applications.json in the data directory
#[tokio::test]
async fn leaves_no_temporary_file() -> Result<(), FileStoreError> {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(params()).await?;
    store.append(params()).await?;

    let mut names = Vec::new();
    let mut entries = tokio::fs::read_dir(store.path().parent().unwrap())
        .await
        .unwrap();
    while let Some(entry) = entries.next_entry().await.unwrap() {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    assert_eq!(names, vec!["applications.json".to_string()]);

    Ok(())
}

/// Tests concurrent appends through one store.
///
/// Expected: ten distinct ids and ten records, none lost
#[tokio::test]
async fn serializes_concurrent_appends() -> Result<(), FileStoreError> {
    let dir = TempDir::new().unwrap();
    let store = std::sync::Arc::new(store_in(&dir));

    let mut handles = Vec::new();
    for _ in 0..10 {
        let store = store.clone();
        handles.push(tokio::spawn(async move { store.append(params()).await }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap()?.id);
    }
    ids.sort_unstable();

    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    assert_eq!(store.read_all().await.len(), 10);

    Ok(())
}

/// Tests the error when the file location cannot be written.
///
/// Expected: Err(FileStoreError::Write) naming the target path
#[tokio::test]
async fn reports_unwritable_location() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    tokio::fs::write(&blocker, "not a directory").await.unwrap();

    let store = ApplicationFileStore::new(blocker.join("applications.json"));
    let result = store.append(params()).await;

    match result {
        Err(FileStoreError::Write { path, .. }) => assert_eq!(path, store.path()),
        other => panic!("expected write error, got {:?}", other.map(|a| a.id)),
    }
}

/// Tests appending after the largest representable id.
///
/// Expected: Err(FileStoreError::IdSpaceExhausted) and the file left unchanged
#[tokio::test]
async fn refuses_to_reuse_ids_when_exhausted() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    tokio::fs::create_dir_all(store.path().parent().unwrap())
        .await
        .unwrap();
    let seeded = format!(r#"[{{"id": {}}}]"#, i32::MAX);
    tokio::fs::write(store.path(), &seeded).await.unwrap();

    let result = store.append(params()).await;

    match result {
        Err(FileStoreError::IdSpaceExhausted { path }) => assert_eq!(path, store.path()),
        other => panic!("expected exhausted id space, got {:?}", other.map(|a| a.id)),
    }
    let raw = tokio::fs::read_to_string(store.path()).await.unwrap();
    assert_eq!(raw, seeded);
}
