use serde::{Deserialize, Serialize};
use zino::prelude::*;
use zino_derive::{ModelAccessor, ModelHooks, Schema};

/// The `setting` model, a singleton row of site-wide configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Schema, ModelAccessor, ModelHooks)]
#[serde(rename_all = "snake_case")]
#[serde(default)]
pub struct Setting {
    // Basic fields.
    #[schema(auto_increment, readonly)]
    id: i64,
    #[schema(not_null, unique)]
    name: String,
    #[schema(default_value = "Active", index_type = "hash")]
    status: String,

    // Info fields.
    site_name: String,
    tagline: String,
    meta_description: String,
    logo_url: String,
    favicon_url: String,
    contact_email: String,
    facebook_url: String,
    instagram_url: String,
    footer_text: String,

    // Extensions.
    extra: Map,

    // Revisions.
    #[schema(readonly, default_value = "now", index_type = "btree")]
    created_at: DateTime,
    #[schema(default_value = "now", index_type = "btree")]
    updated_at: DateTime,
    version: u64,
}

impl Model for Setting {
    #[inline]
    fn new() -> Self {
        Self {
            name: "default".to_owned(),
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
        if let Some(status) = data.parse_string("status") {
            self.status = status.into_owned();
        }
        if let Some(site_name) = data.parse_string("site_name") {
            self.site_name = site_name.into_owned();
        }
        if let Some(tagline) = data.parse_string("tagline") {
            self.tagline = tagline.into_owned();
        }
        if let Some(meta_description) = data.parse_string("meta_description") {
            self.meta_description = meta_description.into_owned();
        }
        if let Some(logo_url) = data.parse_string("logo_url") {
            self.logo_url = logo_url.into_owned();
        }
        if let Some(favicon_url) = data.parse_string("favicon_url") {
            self.favicon_url = favicon_url.into_owned();
        }
        if let Some(contact_email) = data.parse_string("contact_email") {
            self.contact_email = contact_email.into_owned();
        }
        if let Some(facebook_url) = data.parse_string("facebook_url") {
            self.facebook_url = facebook_url.into_owned();
        }
        if let Some(instagram_url) = data.parse_string("instagram_url") {
            self.instagram_url = instagram_url.into_owned();
        }
        if let Some(footer_text) = data.parse_string("footer_text") {
            self.footer_text = footer_text.into_owned();
        }
        validation
    }
}

impl Setting {
    /// Built-in defaults used when the settings row is absent.
    pub fn default_map() -> Map {
        let mut defaults = Map::new();
        defaults.upsert("site_name", "Webshopguiden");
        defaults.upsert("tagline", "Find trygge danske webshops");
        defaults.upsert(
            "meta_description",
            "Danmarks guide til webshops med e-mærket, Tryghedsmærket og MobilePay.",
        );
        defaults.upsert("logo_url", "");
        defaults.upsert("favicon_url", "");
        defaults.upsert("contact_email", "");
        defaults.upsert("facebook_url", "");
        defaults.upsert("instagram_url", "");
        defaults.upsert("footer_text", "");
        defaults
    }

    /// Fetches the singleton settings row, falling back to the defaults.
    pub async fn load() -> Map {
        let mut query = Query::default();
        query.add_filter("name", "default");
        match Self::find_one::<Map>(&query).await {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default_map(),
            Err(err) => {
                tracing::warn!("fail to fetch the site settings: {err}");
                Self::default_map()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Setting;
    use zino::prelude::*;

    #[test]
    fn it_provides_defaults_for_every_field() {
        let defaults = Setting::default_map();
        assert_eq!(defaults.get_str("site_name"), Some("Webshopguiden"));
        for field in [
            "tagline",
            "meta_description",
            "logo_url",
            "favicon_url",
            "contact_email",
            "facebook_url",
            "instagram_url",
            "footer_text",
        ] {
            assert!(defaults.get_str(field).is_some(), "missing `{field}`");
        }
    }
}
