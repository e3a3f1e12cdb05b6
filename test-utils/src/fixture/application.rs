use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

/// A complete, valid submission body using WhatsApp as the contact method.
///
/// Tests mutate individual keys to exercise specific rules.
///
/// # Returns
/// - `Value` - JSON object with every required field set
pub fn submission() -> Value {
    json!({
        "inGameName": "TitanViper",
        "playerId": "5123456789",
        "region": "MENA",
        "age": 22,
        "currentRank": "Conqueror",
        "kd": 4.5,
        "roles": ["IGL", "Sniper"],
        "availability": "Daily 9pm - 1am",
        "previousExperience": "Played two seasons in regional scrims as IGL",
        "contactMethod": "WhatsApp",
        "whatsappNumber": "+966 555 123 456",
        "telegramUsername": null,
        "discord": "viper#1234",
        "notes": "Available for tryouts this week",
        "agreedToRules": true
    })
}

/// An application row as the relational store would return it.
///
/// # Returns
/// - `entity::application::Model` - Row with id 1 and a fixed creation time
pub fn entity() -> entity::application::Model {
    entity::application::Model {
        id: 1,
        in_game_name: "TitanViper".to_string(),
        player_id: "5123456789".to_string(),
        region: "MENA".to_string(),
        age: 22,
        current_rank: "Conqueror".to_string(),
        kd: 4.5,
        roles: "IGL, Sniper".to_string(),
        availability: "Daily 9pm - 1am".to_string(),
        previous_experience: "Played two seasons in regional scrims as IGL".to_string(),
        contact_method: "WhatsApp".to_string(),
        whatsapp_number: Some("+966 555 123 456".to_string()),
        telegram_username: None,
        discord: None,
        notes: None,
        status: "PENDING".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 5, 18, 30, 0).unwrap(),
    }
}
