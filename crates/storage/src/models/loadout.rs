use serde::Serialize;
use utoipa::ToSchema;

/// A selectable character kit. Identifiers are the 0-based position in the
/// loadout catalog file, matching the byte the external feed reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Loadout {
    pub id: i32,
    pub name: String,
}
