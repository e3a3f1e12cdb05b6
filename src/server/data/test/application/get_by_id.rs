use super::*;

/// Tests reading back a row seeded outside the repository.
///
/// Expected: Ok(Some) with roles decoded from the delimited column
#[tokio::test]
async fn returns_seeded_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::application::ApplicationFactory::new(db)
        .in_game_name("Ghost")
        .roles("Flex,IGL")
        .contact_method("Telegram")
        .build()
        .await?;

    let repo = ApplicationRepository::new(db);
    let application = repo.get_by_id(row.id).await?.unwrap();

    assert_eq!(application.in_game_name, "Ghost");
    assert_eq!(application.roles, vec![Role::Flex, Role::Igl]);
    assert_eq!(application.contact_method, ContactMethod::Telegram);
    assert_eq!(application.contact_value(), Some("@titan_player"));

    Ok(())
}

/// Tests lookup of an id that was never assigned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let application = repo.get_by_id(42).await?;

    assert!(application.is_none());

    Ok(())
}

/// Tests that an unknown enum value in a stored row is reported, not silently accepted.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_unknown_region_in_row() -> Result<(), DbErr> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::create_application(db).await?;
    let mut active: entity::application::ActiveModel = row.clone().into();
    active.region = ActiveValue::Set("MOON".to_string());
    active.update(db).await?;

    let repo = ApplicationRepository::new(db);
    let result = repo.get_by_id(row.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
