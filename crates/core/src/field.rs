//! Dashboard field entity model and DTOs.

use serde::{Deserialize, Serialize};

use crate::types::FieldId;

/// Fixed creation stamp carried by every record.
///
/// The service never derives a real timestamp; every record gets this
/// literal. Clients treat it as an opaque marker.
pub const FIELD_CREATED_AT: &str = "2026-01-18";

/// A dashboard field record held by the registry.
///
/// Immutable after creation. Absent inputs are stored as `None` and
/// serialize as explicit JSON `null`s so clients always see all keys.
#[derive(Debug, Clone, Serialize)]
pub struct FieldRecord {
    pub id: FieldId,
    /// Display name, verbatim from client input.
    pub name: Option<String>,
    /// Classification label (e.g. a sector name), verbatim from client input.
    pub category: Option<String>,
    /// Storage strategy tag; text or structured value, stored opaquely.
    pub db_strategy: Option<serde_json::Value>,
    /// The dynamic set of input questions for this field; arbitrary JSON.
    pub schema: Option<serde_json::Value>,
    /// Always [`FIELD_CREATED_AT`].
    pub created_at: String,
}

/// DTO for submitting a new dashboard field.
///
/// All keys are optional and no content validation is applied; an empty
/// object is a valid submission. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateField {
    pub field_name: Option<String>,
    pub field_type: Option<String>,
    pub db_type: Option<serde_json::Value>,
    pub inputs: Option<serde_json::Value>,
}

impl FieldRecord {
    /// Build a record from client input, stamping the fixed creation date.
    ///
    /// Id assignment is the caller's responsibility (the registry computes
    /// it under its lock).
    pub fn from_input(id: FieldId, input: CreateField) -> Self {
        Self {
            id,
            name: input.field_name,
            category: input.field_type,
            db_strategy: input.db_type,
            schema: input.inputs,
            created_at: FIELD_CREATED_AT.to_owned(),
        }
    }
}
