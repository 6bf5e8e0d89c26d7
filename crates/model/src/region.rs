use serde::{Deserialize, Serialize};
use utility::id::HasId;

/// A named grouping of locations. Linked to locations via a many-to-many
/// association.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
}

impl HasId for Region {
    type IdType = i64;
}

/// Splits a free-text list of postcodes on whitespace and commas. Empty
/// tokens are discarded; everything else is passed through untrimmed of
/// meaning, resolution happens against the store.
pub fn parse_postcode_list(postcodes: &str) -> Vec<&str> {
    postcodes
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect()
}
