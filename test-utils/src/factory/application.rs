//! Application factory for creating stored application rows.
//!
//! Rows are inserted directly through the entity, bypassing validation, so tests can seed
//! the relational store with pre-existing data (including values the validator would
//! reject).

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test applications with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::application::ApplicationFactory;
///
/// let application = ApplicationFactory::new(&db)
///     .player_id("5123456789")
///     .contact_method("Telegram")
///     .build()
///     .await?;
/// ```
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    in_game_name: String,
    player_id: String,
    region: String,
    age: i32,
    current_rank: String,
    kd: f64,
    roles: String,
    contact_method: String,
    whatsapp_number: Option<String>,
    telegram_username: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> ApplicationFactory<'a> {
    /// Creates a new ApplicationFactory with default values.
    ///
    /// Defaults:
    /// - in_game_name: `"Player {id}"` where id is auto-incremented
    /// - player_id: `"5{id:09}"`
    /// - region: `"MENA"`, age: `21`, current_rank: `"Ace"`, kd: `3.2`
    /// - roles: `"Entry, Support"`
    /// - contact_method: `"WhatsApp"` with a WhatsApp number
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ApplicationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            in_game_name: format!("Player {}", id),
            player_id: format!("5{:09}", id),
            region: "MENA".to_string(),
            age: 21,
            current_rank: "Ace".to_string(),
            kd: 3.2,
            roles: "Entry, Support".to_string(),
            contact_method: "WhatsApp".to_string(),
            whatsapp_number: Some("+966 555 123 456".to_string()),
            telegram_username: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the in-game name.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn in_game_name(mut self, in_game_name: impl Into<String>) -> Self {
        self.in_game_name = in_game_name.into();
        self
    }

    pub fn player_id(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = player_id.into();
        self
    }

    /// Sets the stored roles column, already in its delimited form (e.g. `"IGL, Sniper"`).
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn roles(mut self, roles: impl Into<String>) -> Self {
        self.roles = roles.into();
        self
    }

    /// Sets the contact method, moving the contact value to the matching column.
    ///
    /// # Arguments
    /// - `contact_method` - `"WhatsApp"` or `"Telegram"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn contact_method(mut self, contact_method: impl Into<String>) -> Self {
        self.contact_method = contact_method.into();
        if self.contact_method == "Telegram" {
            self.whatsapp_number = None;
            self.telegram_username = Some("@titan_player".to_string());
        } else {
            self.whatsapp_number = Some("+966 555 123 456".to_string());
            self.telegram_username = None;
        }
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the application entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::application::Model)` - The created application
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::application::Model, DbErr> {
        entity::application::ActiveModel {
            in_game_name: ActiveValue::Set(self.in_game_name),
            player_id: ActiveValue::Set(self.player_id),
            region: ActiveValue::Set(self.region),
            age: ActiveValue::Set(self.age),
            current_rank: ActiveValue::Set(self.current_rank),
            kd: ActiveValue::Set(self.kd),
            roles: ActiveValue::Set(self.roles),
            availability: ActiveValue::Set("Evenings after 8pm".to_string()),
            previous_experience: ActiveValue::Set(
                "Two seasons with a ranked scrim team".to_string(),
            ),
            contact_method: ActiveValue::Set(self.contact_method),
            whatsapp_number: ActiveValue::Set(self.whatsapp_number),
            telegram_username: ActiveValue::Set(self.telegram_username),
            discord: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            status: ActiveValue::Set("PENDING".to_string()),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an application with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::application::Model)` - The created application
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_application(
    db: &DatabaseConnection,
) -> Result<entity::application::Model, DbErr> {
    ApplicationFactory::new(db).build().await
}
