use crate::service::slug;
use serde::{Deserialize, Serialize};
use zino::prelude::*;
use zino_derive::{ModelAccessor, ModelHooks, Schema};

/// The `shop` model.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Schema, ModelAccessor, ModelHooks)]
#[serde(rename_all = "snake_case")]
#[serde(default)]
pub struct Shop {
    // Basic fields.
    #[schema(auto_increment, readonly)]
    id: i64,
    #[schema(not_null, index_type = "text")]
    name: String,
    #[schema(not_null, unique)]
    slug: String,
    #[schema(default_value = "Pending", index_type = "hash")]
    status: String,
    #[schema(index_type = "text")]
    description: String,

    // Info fields.
    logo_url: String,
    website_url: String,
    review_url: String,
    #[schema(index_type = "gin")]
    categories: Vec<String>, // category.slug
    emaerket: bool,
    tryghedsmaerket: bool,
    mobilepay: bool,
    danish_owned: bool,
    discount_text: String,
    usps: Vec<String>,
    ticker_text: String,
    ticker_style: String,
    ticker_speed: u32,
    featured: bool,
    sort_order: i32,

    // Statistics.
    #[schema(readonly)]
    view_count: u64,
    #[schema(readonly)]
    click_count: u64,

    // Extensions.
    extra: Map,

    // Revisions.
    #[schema(readonly, default_value = "now", index_type = "btree")]
    created_at: DateTime,
    #[schema(default_value = "now", index_type = "btree")]
    updated_at: DateTime,
    version: u64,
}

impl Model for Shop {
    #[inline]
    fn new() -> Self {
        Self {
            status: "Pending".to_owned(),
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
        if let Some(logo_url) = data.parse_string("logo_url") {
            self.logo_url = logo_url.into_owned();
        }
        if let Some(website_url) = data.parse_string("website_url") {
            self.website_url = website_url.into_owned();
        }
        if let Some(review_url) = data.parse_string("review_url") {
            self.review_url = review_url.into_owned();
        }
        if let Some(categories) = data.parse_str_array("categories") {
            self.categories = categories.into_iter().map(|s| s.to_owned()).collect();
        }
        if let Some(result) = data.parse_bool("emaerket") {
            match result {
                Ok(emaerket) => self.emaerket = emaerket,
                Err(err) => validation.record_fail("emaerket", err),
            }
        }
        if let Some(result) = data.parse_bool("tryghedsmaerket") {
            match result {
                Ok(tryghedsmaerket) => self.tryghedsmaerket = tryghedsmaerket,
                Err(err) => validation.record_fail("tryghedsmaerket", err),
            }
        }
        if let Some(result) = data.parse_bool("mobilepay") {
            match result {
                Ok(mobilepay) => self.mobilepay = mobilepay,
                Err(err) => validation.record_fail("mobilepay", err),
            }
        }
        if let Some(result) = data.parse_bool("danish_owned") {
            match result {
                Ok(danish_owned) => self.danish_owned = danish_owned,
                Err(err) => validation.record_fail("danish_owned", err),
            }
        }
        if let Some(result) = data.parse_bool("featured") {
            match result {
                Ok(featured) => self.featured = featured,
                Err(err) => validation.record_fail("featured", err),
            }
        }
        if let Some(discount_text) = data.parse_string("discount_text") {
            self.discount_text = discount_text.into_owned();
        }
        if let Some(usps) = data.parse_str_array("usps") {
            self.usps = usps.into_iter().map(|s| s.to_owned()).collect();
        }
        if let Some(ticker_text) = data.parse_string("ticker_text") {
            self.ticker_text = ticker_text.into_owned();
        }
        if let Some(ticker_style) = data.parse_string("ticker_style") {
            self.ticker_style = ticker_style.into_owned();
        }
        if let Some(result) = data.parse_u32("ticker_speed") {
            match result {
                Ok(ticker_speed) => self.ticker_speed = ticker_speed,
                Err(err) => validation.record_fail("ticker_speed", err),
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
        if self.website_url.is_empty() {
            validation.record("website_url", "should be nonempty");
        }
        validation
    }
}

#[cfg(test)]
mod tests {
    use super::Shop;
    use zino::prelude::*;

    #[test]
    fn it_derives_the_slug_from_the_name() {
        let mut shop = Shop::new();
        let data = json!({
            "name": "Børn & Leg",
            "website_url": "https://boernogleg.dk",
            "categories": ["boern-leg", "legetoej"],
            "emaerket": true,
        })
        .into_map_opt()
        .unwrap_or_default();

        let validation = shop.read_map(&data);
        assert!(validation.is_success());
        assert_eq!(shop.slug, "boern-leg");
        assert!(shop.emaerket);
        assert_eq!(shop.categories.len(), 2);
        assert_eq!(shop.status, "Pending");
    }

    #[test]
    fn it_requires_a_name_and_a_website() {
        let mut shop = Shop::new();
        let data = Map::from_entry("discount_text", "10% på alt");
        let validation = shop.read_map(&data);
        assert!(!validation.is_success());
    }

    #[test]
    fn it_keeps_an_explicit_slug() {
        let mut shop = Shop::new();
        let data = json!({
            "name": "Nordlys Interiør",
            "slug": "nordlys",
            "website_url": "https://nordlys.dk",
        })
        .into_map_opt()
        .unwrap_or_default();

        let validation = shop.read_map(&data);
        assert!(validation.is_success());
        assert_eq!(shop.slug, "nordlys");
    }
}
