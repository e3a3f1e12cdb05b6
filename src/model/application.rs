use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Game server region the applicant plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Region {
    #[serde(rename = "MENA")]
    Mena,
    #[serde(rename = "EU")]
    Eu,
    #[serde(rename = "NA")]
    Na,
    #[serde(rename = "ASIA")]
    Asia,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Mena, Region::Eu, Region::Na, Region::Asia];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mena => "MENA",
            Self::Eu => "EU",
            Self::Na => "NA",
            Self::Asia => "ASIA",
        }
    }
}

/// Competitive rank, ordered from lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum Rank {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Crown,
    Ace,
    Conqueror,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::Bronze,
        Rank::Silver,
        Rank::Gold,
        Rank::Platinum,
        Rank::Diamond,
        Rank::Crown,
        Rank::Ace,
        Rank::Conqueror,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Diamond => "Diamond",
            Self::Crown => "Crown",
            Self::Ace => "Ace",
            Self::Conqueror => "Conqueror",
        }
    }
}

/// In-squad role an applicant can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    #[serde(rename = "IGL")]
    Igl,
    Entry,
    Support,
    Sniper,
    Flex,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Igl,
        Role::Entry,
        Role::Support,
        Role::Sniper,
        Role::Flex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Igl => "IGL",
            Self::Entry => "Entry",
            Self::Support => "Support",
            Self::Sniper => "Sniper",
            Self::Flex => "Flex",
        }
    }
}

/// Channel the team should use to reach the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ContactMethod {
    WhatsApp,
    Telegram,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 2] = [ContactMethod::WhatsApp, ContactMethod::Telegram];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Telegram => "Telegram",
        }
    }
}

/// Review status of a stored application. New applications always start as `PENDING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum ApplicationStatus {
    #[default]
    #[serde(rename = "PENDING")]
    Pending,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 1] = [ApplicationStatus::Pending];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
        }
    }
}

/// Error returned when a string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

// Display and exact-match parsing share the `as_str` spelling for every enum above.
macro_rules! display_and_parse {
    ($($ty:ty),+ $(,)?) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|variant| variant.as_str() == value)
                    .ok_or_else(|| UnknownVariant(value.to_string()))
            }
        }
    )+};
}

display_and_parse!(Region, Rank, Role, ContactMethod, ApplicationStatus);

/// A single submitted field as received: absent, of the expected JSON type, or not.
///
/// Deserializing never fails, so a value of the wrong type is left for the validator to
/// report against its field. JSON `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum Submitted<T> {
    #[default]
    Missing,
    Value(T),
    WrongType,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Submitted<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => Self::Missing,
            value => serde_json::from_value(value).map_or(Self::WrongType, Self::Value),
        })
    }
}

/// Inbound application body as posted by the join form.
///
/// Only the top level is structural: the body must be a JSON object. Each field is a
/// `Submitted` value so that a missing field or one of the wrong JSON type is reported as
/// a field error by the validator rather than rejecting the whole payload.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitApplicationDto {
    #[schema(value_type = Option<String>)]
    pub in_game_name: Submitted<String>,
    #[schema(value_type = Option<String>)]
    pub player_id: Submitted<String>,
    #[schema(value_type = Option<String>)]
    pub region: Submitted<String>,
    #[schema(value_type = Option<f64>)]
    pub age: Submitted<f64>,
    #[schema(value_type = Option<String>)]
    pub current_rank: Submitted<String>,
    #[schema(value_type = Option<f64>)]
    pub kd: Submitted<f64>,
    #[schema(value_type = Option<Vec<String>>)]
    pub roles: Submitted<Vec<String>>,
    #[schema(value_type = Option<String>)]
    pub availability: Submitted<String>,
    #[schema(value_type = Option<String>)]
    pub previous_experience: Submitted<String>,
    #[schema(value_type = Option<String>)]
    pub contact_method: Submitted<String>,
    #[schema(value_type = Option<String>)]
    pub whatsapp_number: Submitted<String>,
    #[schema(value_type = Option<String>)]
    pub telegram_username: Submitted<String>,
    #[schema(value_type = Option<String>)]
    pub discord: Submitted<String>,
    #[schema(value_type = Option<String>)]
    pub notes: Submitted<String>,
    #[schema(value_type = Option<bool>)]
    pub agreed_to_rules: Submitted<bool>,
}

/// Acknowledgment returned once an application has been stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationCreatedDto {
    pub success: bool,
    pub id: i32,
    pub message: String,
}

impl ApplicationCreatedDto {
    pub fn new(id: i32) -> Self {
        Self {
            success: true,
            id,
            message: "Application saved successfully".to_string(),
        }
    }
}
