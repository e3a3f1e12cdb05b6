use sea_orm::{entity::prelude::*, sea_query::Expr};

/// A submitted team application as stored by the relational backend.
///
/// `roles` holds the selected roles joined with `", "`. `created_at` defaults to the
/// database's current timestamp.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub in_game_name: String,
    pub player_id: String,
    pub region: String,
    pub age: i32,
    pub current_rank: String,
    #[sea_orm(column_type = "Double")]
    pub kd: f64,
    pub roles: String,
    pub availability: String,
    #[sea_orm(column_type = "Text")]
    pub previous_experience: String,
    pub contact_method: String,
    pub whatsapp_number: Option<String>,
    pub telegram_username: Option<String>,
    pub discord: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub status: String,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
