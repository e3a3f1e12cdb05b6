//! Domain models for application persistence.
//!
//! `CreateApplicationParams` is the validated, normalized submission handed to storage.
//! `Application` is the stored record returned by whichever backend wrote it. The file
//! backend serializes `Application` directly, so its serde layout is the on-disk format.

use chrono::{DateTime, SecondsFormat, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use crate::model::application::{ApplicationStatus, ContactMethod, Rank, Region, Role};

/// Delimiter used when roles are flattened into a single relational column.
pub const ROLE_DELIMITER: &str = ", ";

/// Validated application ready to be persisted.
///
/// Text is trimmed, optional values are `None` rather than empty, and exactly one of
/// `whatsapp_number`/`telegram_username` is set according to `contact_method`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateApplicationParams {
    pub in_game_name: String,
    pub player_id: String,
    pub region: Region,
    pub age: i32,
    pub current_rank: Rank,
    pub kd: f64,
    /// Non-empty, duplicate-free, in the order the applicant selected them.
    pub roles: Vec<Role>,
    pub availability: String,
    pub previous_experience: String,
    pub contact_method: ContactMethod,
    pub whatsapp_number: Option<String>,
    pub telegram_username: Option<String>,
    pub discord: Option<String>,
    pub notes: Option<String>,
}

/// Application as stored by a backend, with its backend-assigned identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique within the backend that wrote the record.
    pub id: i32,
    pub in_game_name: String,
    pub player_id: String,
    pub region: Region,
    pub age: i32,
    pub current_rank: Rank,
    pub kd: f64,
    pub roles: Vec<Role>,
    pub availability: String,
    pub previous_experience: String,
    pub contact_method: ContactMethod,
    pub whatsapp_number: Option<String>,
    pub telegram_username: Option<String>,
    pub discord: Option<String>,
    pub notes: Option<String>,
    pub status: ApplicationStatus,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Application {
    /// Builds a stored application from validated params and backend-assigned fields.
    pub fn from_params(id: i32, params: CreateApplicationParams, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            in_game_name: params.in_game_name,
            player_id: params.player_id,
            region: params.region,
            age: params.age,
            current_rank: params.current_rank,
            kd: params.kd,
            roles: params.roles,
            availability: params.availability,
            previous_experience: params.previous_experience,
            contact_method: params.contact_method,
            whatsapp_number: params.whatsapp_number,
            telegram_username: params.telegram_username,
            discord: params.discord,
            notes: params.notes,
            status: ApplicationStatus::Pending,
            created_at,
        }
    }

    /// Converts an entity model to an application domain model at the repository boundary.
    ///
    /// Roles are decoded from the delimited column; unknown role names are dropped.
    ///
    /// # Arguments
    /// - `entity` - The entity model read back from the database
    ///
    /// # Returns
    /// - `Ok(Application)` - The converted domain model
    /// - `Err(DbErr::Custom)` - A stored enum column holds a value this build does not know
    pub fn from_entity(entity: entity::application::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            in_game_name: entity.in_game_name,
            player_id: entity.player_id,
            region: parse_column("region", &entity.region)?,
            age: entity.age,
            current_rank: parse_column("current_rank", &entity.current_rank)?,
            kd: entity.kd,
            roles: decode_roles(&entity.roles),
            availability: entity.availability,
            previous_experience: entity.previous_experience,
            contact_method: parse_column("contact_method", &entity.contact_method)?,
            whatsapp_number: entity.whatsapp_number,
            telegram_username: entity.telegram_username,
            discord: entity.discord,
            notes: entity.notes,
            status: parse_column("status", &entity.status)?,
            created_at: entity.created_at,
        })
    }

    /// Contact value for the chosen contact method, if one was stored.
    pub fn contact_value(&self) -> Option<&str> {
        match self.contact_method {
            ContactMethod::WhatsApp => self.whatsapp_number.as_deref(),
            ContactMethod::Telegram => self.telegram_username.as_deref(),
        }
    }
}

/// Joins roles into the single delimited column used by the relational backend.
pub fn encode_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(ROLE_DELIMITER)
}

/// Splits a delimited role column back into roles, preserving order.
pub fn decode_roles(value: &str) -> Vec<Role> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| name.parse().ok())
        .collect()
}

/// Formats a timestamp as RFC 3339 UTC with millisecond precision.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_timestamp(value))
}

fn parse_column<T>(column: &str, value: &str) -> Result<T, DbErr>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| DbErr::Custom(format!("Invalid value in application.{}: {}", column, e)))
}
