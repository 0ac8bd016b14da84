use crate::service::slug;
use serde::{Deserialize, Serialize};
use zino::prelude::*;
use zino_derive::{ModelAccessor, ModelHooks, Schema};

/// A closed set of icon identifiers known to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Home,
    Fashion,
    Electronics,
    Toys,
    Beauty,
    Sports,
    Food,
    Travel,
    Books,
    Garden,
    Pets,
    Health,
}

impl CategoryIcon {
    /// Parses an icon identifier, rejecting unknown keys.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "home" => Some(Self::Home),
            "fashion" => Some(Self::Fashion),
            "electronics" => Some(Self::Electronics),
            "toys" => Some(Self::Toys),
            "beauty" => Some(Self::Beauty),
            "sports" => Some(Self::Sports),
            "food" => Some(Self::Food),
            "travel" => Some(Self::Travel),
            "books" => Some(Self::Books),
            "garden" => Some(Self::Garden),
            "pets" => Some(Self::Pets),
            "health" => Some(Self::Health),
            _ => None,
        }
    }

    /// Returns the icon identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Fashion => "fashion",
            Self::Electronics => "electronics",
            Self::Toys => "toys",
            Self::Beauty => "beauty",
            Self::Sports => "sports",
            Self::Food => "food",
            Self::Travel => "travel",
            Self::Books => "books",
            Self::Garden => "garden",
            Self::Pets => "pets",
            Self::Health => "health",
        }
    }
}

/// The `category` model.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Schema, ModelAccessor, ModelHooks)]
#[serde(rename_all = "snake_case")]
#[serde(default)]
pub struct Category {
    // Basic fields.
    #[schema(auto_increment, readonly)]
    id: i64,
    #[schema(not_null, index_type = "text")]
    name: String,
    #[schema(not_null, unique)]
    slug: String,
    #[schema(default_value = "Active", index_type = "hash")]
    status: String,
    #[schema(index_type = "text")]
    description: String,

    // Info fields.
    color: String,
    icon: String,
    sort_order: i32,

    // Extensions.
    extra: Map,

    // Revisions.
    #[schema(readonly, default_value = "now", index_type = "btree")]
    created_at: DateTime,
    #[schema(default_value = "now", index_type = "btree")]
    updated_at: DateTime,
    version: u64,
}

impl Model for Category {
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
        if let Some(name) = data.parse_string("name") {
            self.name = name.into_owned();
        }
        if let Some(slug) = data.parse_string("slug").filter(|s| !s.is_empty()) {
            self.slug = slug.into_owned();
        } else if self.slug.is_empty() && !self.name.is_empty() {
            self.slug = slug::slugify(&self.name);
        }
        if let Some(status) = data.parse_string("status") {
            self.status = status.into_owned();
        }
        if let Some(description) = data.parse_string("description") {
            self.description = description.into_owned();
        }
        if let Some(color) = data.parse_string("color") {
            self.color = color.into_owned();
        }
        if let Some(icon) = data.parse_string("icon") {
            match CategoryIcon::parse(&icon) {
                Some(icon) => self.icon = icon.as_str().to_owned(),
                None => validation.record("icon", format!("unknown icon `{icon}`")),
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
    use super::{Category, CategoryIcon};
    use zino::prelude::*;

    #[test]
    fn it_accepts_known_icons() {
        let mut category = Category::new();
        let data = json!({
            "name": "Børn & Leg",
            "icon": "toys",
            "color": "#f4a261",
        })
        .into_map_opt()
        .unwrap_or_default();

        let validation = category.read_map(&data);
        assert!(validation.is_success());
        assert_eq!(category.slug, "boern-leg");
        assert_eq!(category.icon, "toys");
    }

    #[test]
    fn it_rejects_unknown_icons() {
        let mut category = Category::new();
        let data = json!({
            "name": "Elektronik",
            "icon": "flux-capacitor",
        })
        .into_map_opt()
        .unwrap_or_default();

        let validation = category.read_map(&data);
        assert!(!validation.is_success());
        assert!(category.icon.is_empty());
    }

    #[test]
    fn it_round_trips_icon_identifiers() {
        for key in [
            "home", "fashion", "electronics", "toys", "beauty", "sports", "food", "travel",
            "books", "garden", "pets", "health",
        ] {
            let icon = CategoryIcon::parse(key).unwrap();
            assert_eq!(icon.as_str(), key);
        }
        assert_eq!(CategoryIcon::parse("sparkles"), None);
    }
}
