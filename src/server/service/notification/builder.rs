//! Application notification message builder.
//!
//! Formats a stored application into the plain-text summary posted to the team chat.
//! Line order is fixed so reviewers can scan notifications at a glance.

use crate::server::model::application::{encode_roles, format_timestamp, Application};

/// Placeholder shown for values the applicant did not provide.
const MISSING: &str = "-";

/// Builds the multi-line summary for a newly stored application.
///
/// # Arguments
/// - `application` - The stored application to summarize
///
/// # Returns
/// - `String` - Newline-separated summary, title first and creation time last
pub fn build_message(application: &Application) -> String {
    [
        "🔥 New Titan Core Application".to_string(),
        format!("Name: {}", application.in_game_name),
        format!("Player ID: {}", application.player_id),
        format!("Age: {}", application.age),
        format!("Rank: {}", application.current_rank),
        format!("KD: {}", application.kd),
        format!("Role: {}", encode_roles(&application.roles)),
        format!("Server: {}", application.region),
        format!("Contact Method: {}", application.contact_method),
        format!(
            "WhatsApp/Telegram: {}",
            application.contact_value().unwrap_or(MISSING)
        ),
        format!("Availability: {}", application.availability),
        format!("Previous Experience: {}", application.previous_experience),
        format!(
            "Discord: {}",
            application.discord.as_deref().unwrap_or(MISSING)
        ),
        format!("Notes: {}", application.notes.as_deref().unwrap_or(MISSING)),
        format!("CreatedAt: {}", format_timestamp(&application.created_at)),
    ]
    .join("\n")
}
