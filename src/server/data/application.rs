use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    TransactionTrait,
};

use crate::{
    model::application::ApplicationStatus,
    server::model::application::{encode_roles, Application, CreateApplicationParams},
};

/// Relational backend for stored applications.
///
/// Identity comes from the table's auto-increment primary key, so ids are unique and
/// strictly increasing across every writer sharing the database.
pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new application and returns the stored row as a domain model.
    ///
    /// Roles are flattened into one delimited column on write and `created_at` is left to
    /// the column default, so the database clock stamps the row. The row is then read back
    /// by id inside the same transaction, so the returned application is exactly what a
    /// later read would produce and a failed read-back leaves nothing behind.
    ///
    /// # Arguments
    /// - `params`: Validated application to insert
    ///
    /// # Returns
    /// - `Ok(Application)`: The inserted application with its database id
    /// - `Err(DbErr)`: Connectivity or constraint failure; the transaction is rolled back
    pub async fn create(&self, params: &CreateApplicationParams) -> Result<Application, DbErr> {
        let txn = self.db.begin().await?;

        let inserted = entity::application::ActiveModel {
            in_game_name: ActiveValue::Set(params.in_game_name.clone()),
            player_id: ActiveValue::Set(params.player_id.clone()),
            region: ActiveValue::Set(params.region.as_str().to_string()),
            age: ActiveValue::Set(params.age),
            current_rank: ActiveValue::Set(params.current_rank.as_str().to_string()),
            kd: ActiveValue::Set(params.kd),
            roles: ActiveValue::Set(encode_roles(&params.roles)),
            availability: ActiveValue::Set(params.availability.clone()),
            previous_experience: ActiveValue::Set(params.previous_experience.clone()),
            contact_method: ActiveValue::Set(params.contact_method.as_str().to_string()),
            whatsapp_number: ActiveValue::Set(params.whatsapp_number.clone()),
            telegram_username: ActiveValue::Set(params.telegram_username.clone()),
            discord: ActiveValue::Set(params.discord.clone()),
            notes: ActiveValue::Set(params.notes.clone()),
            status: ActiveValue::Set(ApplicationStatus::Pending.as_str().to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let application = find_by_id(&txn, inserted.id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Application {} not found after insert",
                inserted.id
            ))
        })?;

        txn.commit().await?;

        Ok(application)
    }

    /// Gets an application by ID
    ///
    /// # Returns
    /// - `Ok(Some(Application))`: The stored application
    /// - `Ok(None)`: No application with that id
    /// - `Err(DbErr)`: Database error
    #[cfg(test)]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Application>, DbErr> {
        find_by_id(self.db, id).await
    }
}

async fn find_by_id<C>(conn: &C, id: i32) -> Result<Option<Application>, DbErr>
where
    C: ConnectionTrait,
{
    entity::prelude::Application::find_by_id(id)
        .one(conn)
        .await?
        .map(Application::from_entity)
        .transpose()
}
