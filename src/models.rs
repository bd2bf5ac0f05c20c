use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Core Application Schemas (Mapped to Database) ---

/// Show
///
/// Represents a show record from the `shows` table. This is the primary data
/// structure for the core business logic.
///
/// The `owner` column is the authorization anchor: it is set exactly once at
/// creation time, from the authenticated principal, and is immutable
/// thereafter. No request payload type in this module carries an owner field,
/// so client-supplied owner values are structurally discarded before they can
/// reach the store.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Show {
    pub id: Uuid,
    pub title: String,
    pub starring: String,
    pub director: String,
    pub description: String,
    #[ts(type = "string")]
    pub released: NaiveDate,
    // The owning principal's id. Immutable after creation.
    pub owner: Uuid,

    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Review
///
/// Represents a review record from the `reviews` table. Reviews are
/// read-associated to a Show via `show_id` and are only ever surfaced joined
/// into the show detail response; no mutation routes exist for them and no
/// ownership rule applies.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Review {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    // Constrained to [1, 10] at the store layer.
    pub rating: i32,
    pub show_id: Uuid,
    pub token: Option<String>,

    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

// --- Request Payloads (Input Schemas) ---

/// CreateShowBody
///
/// Wire envelope for POST /shows: `{ "show": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateShowBody {
    pub show: NewShowFields,
}

/// NewShowFields
///
/// Input fields for creating a show. Every field is required; an owner cannot
/// be supplied here — any `owner` key in the payload is dropped during
/// deserialization and the handler assigns the authenticated principal
/// instead.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct NewShowFields {
    pub title: String,
    pub starring: String,
    pub director: String,
    pub description: String,
    #[ts(type = "string")]
    pub released: NaiveDate,
}

/// UpdateShowBody
///
/// Wire envelope for PATCH /shows/{id}: `{ "show": { ...partial } }`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateShowBody {
    pub show: UpdateShowFields,
}

/// UpdateShowFields
///
/// Partial update payload for modifying an existing show.
///
/// Uses `Option<T>` for all fields and `#[serde(skip_serializing_if = "Option::is_none")]`
/// to efficiently handle partial updates, ensuring only provided fields reach
/// the store. Like `NewShowFields`, this struct intentionally has no `owner`
/// member: a client attempting ownership hijacking via the payload loses that
/// key at the deserialization boundary.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateShowFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub starring: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // A blank string submitted for the date reads as "not provided" rather
    // than failing deserialization of the whole body.
    #[serde(
        default,
        deserialize_with = "blank_date_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(type = "string | null")]
    pub released: Option<NaiveDate>,
}

impl UpdateShowFields {
    /// without_blanks
    ///
    /// Implements the blank-field policy for partial updates: a field that is
    /// present but empty (or whitespace-only) is treated as absent, never as
    /// an explicit clear-to-empty. An absent field keeps its stored value, so
    /// a client cannot accidentally null out a required column by submitting
    /// blanks.
    pub fn without_blanks(self) -> Self {
        let non_blank = |field: Option<String>| field.filter(|s| !s.trim().is_empty());
        Self {
            title: non_blank(self.title),
            starring: non_blank(self.starring),
            director: non_blank(self.director),
            description: non_blank(self.description),
            released: self.released,
        }
    }
}

/// blank_date_as_none
///
/// Serde helper: accepts a date, `null`, an absent key, or a blank string,
/// mapping everything non-date to `None`. This mirrors the string-field blank
/// handling in `without_blanks` for the one non-string updatable field.
fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(other) => NaiveDate::deserialize(other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

// --- Response Envelopes (Output Schemas) ---

/// ShowListResponse
///
/// Output envelope for GET /shows: `{ "shows": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ShowListResponse {
    pub shows: Vec<Show>,
}

/// ShowDetailResponse
///
/// Output envelope for GET /shows/{id}: the show joined with its reviews.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ShowDetailResponse {
    pub show: Show,
    pub reviews: Vec<Review>,
}

/// ShowEnvelope
///
/// Output envelope for POST /shows: `{ "show": {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ShowEnvelope {
    pub show: Show,
}
