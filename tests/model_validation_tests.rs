use chrono::NaiveDate;
use show_tracker::models::{
    NewShowFields, Show, ShowDetailResponse, ShowListResponse, UpdateShowFields,
};

// --- Blank-field policy ---

#[test]
fn test_without_blanks_treats_empty_fields_as_absent() {
    let fields = UpdateShowFields {
        title: Some("".to_string()),
        starring: Some("   ".to_string()),
        director: Some("Someone".to_string()),
        description: None,
        released: None,
    };

    let stripped = fields.without_blanks();

    // Present-but-blank reads as "not provided", never as clear-to-empty.
    assert!(stripped.title.is_none());
    assert!(stripped.starring.is_none());
    assert_eq!(stripped.director.as_deref(), Some("Someone"));
    assert!(stripped.description.is_none());
}

#[test]
fn test_blank_released_string_deserializes_as_absent() {
    let fields: UpdateShowFields = serde_json::from_value(serde_json::json!({
        "released": ""
    }))
    .unwrap();
    assert!(fields.released.is_none());

    let fields: UpdateShowFields = serde_json::from_value(serde_json::json!({
        "released": "2020-01-01"
    }))
    .unwrap();
    assert_eq!(
        fields.released,
        Some(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
    );
}

// --- Owner hijacking resistance at the deserialization boundary ---

#[test]
fn test_payload_owner_key_is_structurally_discarded() {
    // Neither input struct has an owner member, so the key simply vanishes.
    let create: NewShowFields = serde_json::from_value(serde_json::json!({
        "title": "X", "starring": "A", "director": "B",
        "description": "d", "released": "2020-01-01",
        "owner": "0be72723-9287-4906-9a39-24ba9b3d4f88"
    }))
    .expect("unknown owner key must not fail deserialization");

    let serialized = serde_json::to_value(&create).unwrap();
    assert!(serialized.get("owner").is_none());

    let update: UpdateShowFields = serde_json::from_value(serde_json::json!({
        "title": "Y",
        "owner": "0be72723-9287-4906-9a39-24ba9b3d4f88"
    }))
    .unwrap();
    let serialized = serde_json::to_value(&update).unwrap();
    assert!(serialized.get("owner").is_none());
}

// --- Wire envelope shapes ---

#[test]
fn test_list_response_envelope_uses_shows_key() {
    let listing = ShowListResponse {
        shows: vec![Show::default()],
    };
    let value = serde_json::to_value(&listing).unwrap();
    assert!(value.get("shows").unwrap().is_array());
}

#[test]
fn test_detail_response_envelope_has_show_and_reviews() {
    let detail = ShowDetailResponse::default();
    let value = serde_json::to_value(&detail).unwrap();
    assert!(value.get("show").is_some());
    assert!(value.get("reviews").unwrap().is_array());
}

#[test]
fn test_update_fields_omit_absent_members_when_serialized() {
    let partial = UpdateShowFields {
        title: Some("New Title Only".to_string()),
        ..UpdateShowFields::default()
    };

    let json_output = serde_json::to_string(&partial).unwrap();
    assert!(json_output.contains(r#""title":"New Title Only""#));
    // None fields are omitted entirely.
    assert!(!json_output.contains("starring"));
    assert!(!json_output.contains("released"));
}
