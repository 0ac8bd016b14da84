use serde::{Deserialize, Serialize};
use zino::prelude::*;
use zino_derive::{ModelAccessor, ModelHooks, Schema};

/// The `snippet` model for code blocks injected into rendered pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Schema, ModelAccessor, ModelHooks)]
#[serde(rename_all = "snake_case")]
#[serde(default)]
pub struct Snippet {
    // Basic fields.
    #[schema(auto_increment, readonly)]
    id: i64,
    #[schema(not_null, index_type = "text")]
    name: String,
    #[schema(default_value = "Active", index_type = "hash")]
    status: String,

    // Info fields.
    code: String,
    #[schema(default_value = "head", index_type = "hash")]
    placement: String, // "head" | "body"
    sort_order: i32,

    // Revisions.
    #[schema(readonly, default_value = "now", index_type = "btree")]
    created_at: DateTime,
    #[schema(default_value = "now", index_type = "btree")]
    updated_at: DateTime,
    version: u64,
}

impl Model for Snippet {
    #[inline]
    fn new() -> Self {
        Self {
            status: "Active".to_owned(),
            placement: "head".to_owned(),
            ..Self::default()
        }
    }

    fn read_map(&mut self, data: &Map) -> Validation {
        let mut validation = Validation::new();
        if let Some(result) = data.parse_i64("id") {
            match result {
                Ok(id) => self.id = id,
                Err(err) => validation.record_fail("id", err),
            }
        }
        if let Some(name) = data.parse_string("name") {
            self.name = name.into_owned();
        }
        if let Some(status) = data.parse_string("status") {
            self.status = status.into_owned();
        }
        if let Some(code) = data.parse_string("code") {
            self.code = code.into_owned();
        }
        if let Some(placement) = data.parse_string("placement") {
            match placement.as_ref() {
                "head" | "body" => self.placement = placement.into_owned(),
                _ => validation.record("placement", format!("unknown placement `{placement}`")),
            }
        }
        if let Some(result) = data.parse_i32("sort_order") {
            match result {
                Ok(sort_order) => self.sort_order = sort_order,
                Err(err) => validation.record_fail("sort_order", err),
            }
        }
        if self.name.is_empty() {
            validation.record("name", "should be nonempty");
        }
        validation
    }
}

#[cfg(test)]
mod tests {
    use super::Snippet;
    use zino::prelude::*;

    #[test]
    fn it_validates_the_placement() {
        let mut snippet = Snippet::new();
        let data = json!({
            "name": "analytics",
            "code": "<script src=\"/js/track.js\"></script>",
            "placement": "body",
        })
        .into_map_opt()
        .unwrap_or_default();

        let validation = snippet.read_map(&data);
        assert!(validation.is_success());

        let mut snippet = Snippet::new();
        let data = json!({
            "name": "analytics",
            "placement": "sidebar",
        })
        .into_map_opt()
        .unwrap_or_default();

        let validation = snippet.read_map(&data);
        assert!(!validation.is_success());
    }
}
