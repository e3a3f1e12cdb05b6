use super::*;

/// Tests inserting a new application.
///
/// Verifies that the repository stores every field, assigns the first id, and marks the
/// application as pending.
///
/// Expected: Ok with id 1, status Pending, and one row in the table
#[tokio::test]
async fn creates_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let application = repo.create(&params()).await?;

    assert_eq!(application.id, 1);
    assert_eq!(application.in_game_name, "TitanViper");
    assert_eq!(application.region, Region::Mena);
    assert_eq!(application.current_rank, Rank::Conqueror);
    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(application.notes.as_deref(), Some("Ready for tryouts"));
    assert_eq!(application.telegram_username, None);

    let count = entity::prelude::Application::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the creation time comes from the column default.
///
/// Expected: created_at falls between the moments around the insert, at second precision
#[tokio::test]
async fn stamps_created_at_from_database() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now() - Duration::seconds(1);
    let application = ApplicationRepository::new(db).create(&params()).await?;
    let after = Utc::now() + Duration::seconds(1);

    assert!(application.created_at >= before);
    assert!(application.created_at <= after);

    Ok(())
}

/// Tests that roles survive the single-column encoding.
///
/// Expected: stored column is "IGL, Sniper" and the returned roles keep their order
#[tokio::test]
async fn stores_roles_as_delimited_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let application = repo.create(&params()).await?;

    assert_eq!(application.roles, vec![Role::Igl, Role::Sniper]);

    let row = entity::prelude::Application::find_by_id(application.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.roles, "IGL, Sniper");
    assert_eq!(row.status, "PENDING");

    Ok(())
}

/// Tests id assignment after existing rows.
///
/// Verifies that new applications receive ids greater than any row already present.
///
/// Expected: ids strictly increase past the seeded row
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::create_application(db).await?;

    let repo = ApplicationRepository::new(db);
    let first = repo.create(&params()).await?;
    let second = repo.create(&params()).await?;

    assert!(first.id > seeded.id);
    assert!(second.id > first.id);

    Ok(())
}

/// Tests failure when the table does not exist.
///
/// Expected: Err and nothing is created
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let result = repo.create(&params()).await;

    assert!(result.is_err());

    Ok(())
}
