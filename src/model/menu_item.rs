use serde::{Deserialize, Serialize};
use zino::prelude::*;
use zino_derive::{ModelAccessor, ModelHooks, Schema};

/// The `menu_item` model.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Schema, ModelAccessor, ModelHooks)]
#[serde(rename_all = "snake_case")]
#[serde(default)]
pub struct MenuItem {
    // Basic fields.
    #[schema(auto_increment, readonly)]
    id: i64,
    #[schema(not_null)]
    label: String,
    #[schema(default_value = "Active", index_type = "hash")]
    status: String,

    // Info fields.
    #[schema(not_null)]
    url: String,
    external: bool,
    sort_order: i32,

    // Revisions.
    #[schema(readonly, default_value = "now", index_type = "btree")]
    created_at: DateTime,
    #[schema(default_value = "now", index_type = "btree")]
    updated_at: DateTime,
    version: u64,
}

impl Model for MenuItem {
    #[inline]
    fn new() -> Self {
        Self {
            status: "Active".to_owned(),
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
        if let Some(label) = data.parse_string("label") {
            self.label = label.into_owned();
        }
        if let Some(status) = data.parse_string("status") {
            self.status = status.into_owned();
        }
        if let Some(url) = data.parse_string("url") {
            self.url = url.into_owned();
        }
        if let Some(result) = data.parse_bool("external") {
            match result {
                Ok(external) => self.external = external,
                Err(err) => validation.record_fail("external", err),
            }
        }
        if let Some(result) = data.parse_i32("sort_order") {
            match result {
                Ok(sort_order) => self.sort_order = sort_order,
                Err(err) => validation.record_fail("sort_order", err),
            }
        }
        if self.label.is_empty() {
            validation.record("label", "should be nonempty");
        }
        if self.url.is_empty() {
            validation.record("url", "should be nonempty");
        }
        validation
    }
}
