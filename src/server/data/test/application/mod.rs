use chrono::{Duration, Utc};

use crate::{
    model::application::{ApplicationStatus, ContactMethod, Rank, Region, Role},
    server::{data::application::ApplicationRepository, model::application::CreateApplicationParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;

fn params() -> CreateApplicationParams {
    CreateApplicationParams {
        in_game_name: "TitanViper".to_string(),
        player_id: "5123456789".to_string(),
        region: Region::Mena,
        age: 22,
        current_rank: Rank::Conqueror,
        kd: 4.5,
        roles: vec![Role::Igl, Role::Sniper],
        availability: "Daily 9pm - 1am".to_string(),
        previous_experience: "Played two seasons in regional scrims".to_string(),
        contact_method: ContactMethod::WhatsApp,
        whatsapp_number: Some("+966 555 123 456".to_string()),
        telegram_username: None,
        discord: None,
        notes: Some("Ready for tryouts".to_string()),
    }
}
