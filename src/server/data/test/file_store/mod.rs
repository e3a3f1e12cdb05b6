use crate::{
    model::application::{ContactMethod, Rank, Region, Role},
    server::{
        data::file_store::ApplicationFileStore, error::storage::FileStoreError,
        model::application::CreateApplicationParams,
    },
};
use serde_json::Value;
use tempfile::TempDir;

mod append;

fn params() -> CreateApplicationParams {
    CreateApplicationParams {
        in_game_name: "NightOwl".to_string(),
        player_id: "51234567".to_string(),
        region: Region::Eu,
        age: 19,
        current_rank: Rank::Diamond,
        kd: 2.75,
        roles: vec![Role::Entry],
        availability: "Weekends".to_string(),
        previous_experience: "Casual ranked, some scrims".to_string(),
        contact_method: ContactMethod::Telegram,
        whatsapp_number: None,
        telegram_username: Some("@night_owl".to_string()),
        discord: None,
        notes: None,
    }
}

fn store_in(dir: &TempDir) -> ApplicationFileStore {
    ApplicationFileStore::new(dir.path().join("data").join("applications.json"))
}

async fn read_raw(store: &ApplicationFileStore) -> Vec<Value> {
    let raw = tokio::fs::read(store.path()).await.unwrap();
    serde_json::from_slice(&raw).unwrap()
}
