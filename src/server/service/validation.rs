//! Submission validation.
//!
//! Turns an untrusted `SubmitApplicationDto` into `CreateApplicationParams`, or reports
//! every violated rule at once grouped by wire field name. Pure and deterministic.

use regex::Regex;
use std::{str::FromStr, sync::LazyLock};

use crate::{
    model::application::{ContactMethod, Rank, Region, Role, SubmitApplicationDto, Submitted},
    server::{
        error::validation::{FieldErrors, ValidationError},
        model::application::CreateApplicationParams,
    },
};

static PLAYER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("static regex is valid"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s-]{8,20}$").expect("static regex is valid"));
static TELEGRAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@?[A-Za-z0-9_]{5,32}$").expect("static regex is valid"));

const REQUIRED: &str = "هذا الحقل مطلوب";
const INVALID_VALUE: &str = "قيمة غير صالحة";
const TOO_LONG: &str = "القيمة طويلة جدًا";

/// Maximum length of the handle fields (WhatsApp, Telegram, Discord), whenever supplied.
const HANDLE_MAX_LEN: usize = 180;

/// Length bounds for a trimmed text field and the messages reported when they are violated.
struct TextRule {
    field: &'static str,
    min: usize,
    max: usize,
    too_short: &'static str,
    too_long: &'static str,
}

const IN_GAME_NAME: TextRule = TextRule {
    field: "inGameName",
    min: 2,
    max: 50,
    too_short: "يرجى إدخال اسم داخل اللعبة",
    too_long: "اسم اللعبة طويل جدًا",
};

const PLAYER_ID: TextRule = TextRule {
    field: "playerId",
    min: 5,
    max: 20,
    too_short: "رقم اللاعب قصير جدًا",
    too_long: "رقم اللاعب طويل جدًا",
};

const AVAILABILITY: TextRule = TextRule {
    field: "availability",
    min: 3,
    max: 250,
    too_short: "يرجى توضيح أوقات التفرغ",
    too_long: "النص طويل جدًا",
};

const PREVIOUS_EXPERIENCE: TextRule = TextRule {
    field: "previousExperience",
    min: 8,
    max: 1000,
    too_short: "يرجى إضافة خبرتك السابقة",
    too_long: "الوصف طويل جدًا",
};

/// Validates and normalizes a raw submission.
///
/// All checks run; every violation is collected before returning. If the rules were
/// not accepted the result is `ValidationError::RulesNotAccepted` carrying any other
/// field errors, otherwise `ValidationError::InvalidFields` when anything failed.
///
/// # Arguments
/// - `dto`: Raw submission as deserialized from the request body
///
/// # Returns
/// - `Ok(CreateApplicationParams)`: Trimmed, typed and range-checked application
/// - `Err(ValidationError)`: Every violated rule grouped by field
pub fn validate(dto: SubmitApplicationDto) -> Result<CreateApplicationParams, ValidationError> {
    let mut errors = FieldErrors::new();

    let in_game_name = text(&mut errors, &IN_GAME_NAME, &dto.in_game_name);
    let player_id = player_id(&mut errors, &dto.player_id);
    let region = choice::<Region>(&mut errors, "region", &dto.region);
    let age = age(&mut errors, &dto.age);
    let current_rank = choice::<Rank>(&mut errors, "currentRank", &dto.current_rank);
    let kd = kd(&mut errors, &dto.kd);
    let roles = roles(&mut errors, &dto.roles);
    let availability = text(&mut errors, &AVAILABILITY, &dto.availability);
    let previous_experience = text(&mut errors, &PREVIOUS_EXPERIENCE, &dto.previous_experience);
    let contact_method = choice::<ContactMethod>(&mut errors, "contactMethod", &dto.contact_method);

    // Both handles are length-checked when supplied; only the selected one is kept.
    let whatsapp_number = optional_text(
        &mut errors,
        "whatsappNumber",
        &dto.whatsapp_number,
        HANDLE_MAX_LEN,
        TOO_LONG,
    );
    let telegram_username = optional_text(
        &mut errors,
        "telegramUsername",
        &dto.telegram_username,
        HANDLE_MAX_LEN,
        TOO_LONG,
    );

    let (whatsapp_number, telegram_username) = match contact_method {
        Some(ContactMethod::WhatsApp) => (
            contact_handle(
                &mut errors,
                "whatsappNumber",
                whatsapp_number,
                &PHONE_RE,
                "رقم الواتساب مطلوب",
                "صيغة رقم الواتساب غير صحيحة",
            ),
            None,
        ),
        Some(ContactMethod::Telegram) => (
            None,
            contact_handle(
                &mut errors,
                "telegramUsername",
                telegram_username,
                &TELEGRAM_RE,
                "اسم مستخدم التليجرام مطلوب",
                "اسم مستخدم التليجرام غير صحيح",
            ),
        ),
        None => (None, None),
    };

    let discord = optional_text(&mut errors, "discord", &dto.discord, HANDLE_MAX_LEN, TOO_LONG);
    let notes = optional_text(
        &mut errors,
        "notes",
        &dto.notes,
        1000,
        "الملاحظات طويلة جدًا",
    );

    if dto.agreed_to_rules != Submitted::Value(true) {
        return Err(ValidationError::RulesNotAccepted(errors));
    }

    match (
        in_game_name,
        player_id,
        region,
        age,
        current_rank,
        kd,
        roles,
        availability,
        previous_experience,
        contact_method,
    ) {
        (
            Some(in_game_name),
            Some(player_id),
            Some(region),
            Some(age),
            Some(current_rank),
            Some(kd),
            Some(roles),
            Some(availability),
            Some(previous_experience),
            Some(contact_method),
        ) if errors.is_empty() => Ok(CreateApplicationParams {
            in_game_name,
            player_id,
            region,
            age,
            current_rank,
            kd,
            roles,
            availability,
            previous_experience,
            contact_method,
            whatsapp_number,
            telegram_username,
            discord,
            notes,
        }),
        _ => Err(ValidationError::InvalidFields(errors)),
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Required field of the expected JSON type; reports absence or a type mismatch.
fn required<'a, T>(
    errors: &mut FieldErrors,
    field: &str,
    value: &'a Submitted<T>,
) -> Option<&'a T> {
    match value {
        Submitted::Value(value) => Some(value),
        Submitted::Missing => {
            errors.add(field, REQUIRED);
            None
        }
        Submitted::WrongType => {
            errors.add(field, INVALID_VALUE);
            None
        }
    }
}

/// Checks `value` against `rule`'s bounds, reporting each bound it violates.
fn within_bounds(errors: &mut FieldErrors, rule: &TextRule, value: &str) -> bool {
    let len = char_len(value);
    let mut valid = true;

    if len < rule.min {
        errors.add(rule.field, rule.too_short);
        valid = false;
    }
    if len > rule.max {
        errors.add(rule.field, rule.too_long);
        valid = false;
    }

    valid
}

/// Required trimmed text within `rule`'s bounds.
fn text(errors: &mut FieldErrors, rule: &TextRule, value: &Submitted<String>) -> Option<String> {
    let value = required(errors, rule.field, value)?.trim();

    within_bounds(errors, rule, value).then(|| value.to_string())
}

/// Digits-only player id; reports the digit rule and the length rule independently.
fn player_id(errors: &mut FieldErrors, value: &Submitted<String>) -> Option<String> {
    let value = required(errors, PLAYER_ID.field, value)?.trim();

    let digits_only = PLAYER_ID_RE.is_match(value);
    if !digits_only {
        errors.add(PLAYER_ID.field, "رقم اللاعب يجب أن يحتوي أرقامًا فقط");
    }
    let bounded = within_bounds(errors, &PLAYER_ID, value);

    (digits_only && bounded).then(|| value.to_string())
}

fn choice<T: FromStr>(
    errors: &mut FieldErrors,
    field: &str,
    value: &Submitted<String>,
) -> Option<T> {
    let value = required(errors, field, value)?;

    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.add(field, INVALID_VALUE);
            None
        }
    }
}

/// Whole number in 16..=80; a fractional age also reports any range it falls outside.
fn age(errors: &mut FieldErrors, value: &Submitted<f64>) -> Option<i32> {
    const FIELD: &str = "age";

    let value = *required(errors, FIELD, value)?;

    if !value.is_finite() {
        errors.add(FIELD, INVALID_VALUE);
        return None;
    }

    let mut valid = true;
    if value.fract() != 0.0 {
        errors.add(FIELD, "العمر يجب أن يكون رقمًا صحيحًا");
        valid = false;
    }
    if value < 16.0 {
        errors.add(FIELD, "العمر يجب أن يكون 16 أو أكثر");
        valid = false;
    }
    if value > 80.0 {
        errors.add(FIELD, "العمر غير صالح");
        valid = false;
    }

    valid.then_some(value as i32)
}

fn kd(errors: &mut FieldErrors, value: &Submitted<f64>) -> Option<f64> {
    const FIELD: &str = "kd";

    let value = *required(errors, FIELD, value)?;

    if !value.is_finite() {
        errors.add(FIELD, INVALID_VALUE);
        return None;
    }
    if value < 0.0 {
        errors.add(FIELD, "KD لا يمكن أن تكون أقل من 0");
        return None;
    }
    if value > 50.0 {
        errors.add(FIELD, "KD لا يمكن أن تتجاوز 50");
        return None;
    }

    Some(value)
}

/// At least one known role; duplicates collapse to their first occurrence.
fn roles(errors: &mut FieldErrors, value: &Submitted<Vec<String>>) -> Option<Vec<Role>> {
    const FIELD: &str = "roles";

    let names = required(errors, FIELD, value)?;

    if names.is_empty() {
        errors.add(FIELD, "اختر دورًا واحدًا على الأقل");
        return None;
    }

    let mut roles = Vec::with_capacity(names.len());
    for name in names {
        match name.parse::<Role>() {
            Ok(role) if !roles.contains(&role) => roles.push(role),
            Ok(_) => {}
            Err(_) => {
                errors.add(FIELD, INVALID_VALUE);
                return None;
            }
        }
    }

    Some(roles)
}

/// Optional trimmed text; blank becomes `None`, an overlong value is reported.
fn optional_text(
    errors: &mut FieldErrors,
    field: &str,
    value: &Submitted<String>,
    max: usize,
    too_long: &str,
) -> Option<String> {
    let value = match value {
        Submitted::Value(value) => value.trim(),
        Submitted::Missing => return None,
        Submitted::WrongType => {
            errors.add(field, INVALID_VALUE);
            return None;
        }
    };
    if value.is_empty() {
        return None;
    }

    if char_len(value) > max {
        errors.add(field, too_long);
        return None;
    }

    Some(value.to_string())
}

/// Contact handle required for the selected contact method.
///
/// `value` has already been through `optional_text`, so a handle rejected there is
/// not reported again as missing.
fn contact_handle(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    pattern: &Regex,
    missing: &str,
    malformed: &str,
) -> Option<String> {
    let Some(value) = value else {
        if !errors.contains(field) {
            errors.add(field, missing);
        }
        return None;
    };

    if !pattern.is_match(&value) {
        errors.add(field, malformed);
        return None;
    }

    Some(value)
}

#[cfg(test)]
#[path = "test/validation.rs"]
mod tests;
