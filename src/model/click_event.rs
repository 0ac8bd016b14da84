use serde::{Deserialize, Serialize};
use zino::prelude::*;
use zino_derive::{ModelAccessor, ModelHooks, Schema};

/// The `click_event` model.
///
/// One record per page view or outbound click, written fire-and-forget
/// and consumed by the realtime feed and the analytics queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Schema, ModelAccessor, ModelHooks)]
#[serde(rename_all = "snake_case")]
#[serde(default)]
pub struct ClickEvent {
    // Basic fields.
    #[schema(auto_increment, readonly)]
    id: i64,
    #[schema(default_value = "view", index_type = "hash")]
    kind: String, // "view" | "click"

    // Info fields.
    shop_id: Option<i64>, // shop.id
    post_id: Option<i64>, // post.id
    page: String,
    referrer: String,
    client_ip: String,

    // Revisions.
    #[schema(readonly, default_value = "now", index_type = "btree")]
    created_at: DateTime,
    #[schema(default_value = "now", index_type = "btree")]
    updated_at: DateTime,
    version: u64,
}

impl Model for ClickEvent {
    #[inline]
    fn new() -> Self {
        Self {
            kind: "view".to_owned(),
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
        if let Some(kind) = data.parse_string("kind") {
            match kind.as_ref() {
                "view" | "click" => self.kind = kind.into_owned(),
                _ => validation.record("kind", format!("unknown event kind `{kind}`")),
            }
        }
        if let Some(result) = data.parse_i64("shop_id") {
            match result {
                Ok(shop_id) => self.shop_id = Some(shop_id),
                Err(err) => validation.record_fail("shop_id", err),
            }
        }
        if let Some(result) = data.parse_i64("post_id") {
            match result {
                Ok(post_id) => self.post_id = Some(post_id),
                Err(err) => validation.record_fail("post_id", err),
            }
        }
        if let Some(page) = data.parse_string("page") {
            self.page = page.into_owned();
        }
        if let Some(referrer) = data.parse_string("referrer") {
            self.referrer = referrer.into_owned();
        }
        if let Some(client_ip) = data.parse_string("client_ip") {
            self.client_ip = client_ip.into_owned();
        }
        if self.shop_id.is_none() && self.post_id.is_none() && self.page.is_empty() {
            validation.record("page", "an event should reference a shop, a post or a page");
        }
        validation
    }
}

impl ClickEvent {
    /// Sets the client IP observed by the server.
    #[inline]
    pub fn set_client_ip(&mut self, client_ip: String) {
        self.client_ip = client_ip;
    }

    /// Returns the event kind.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the targeted shop id.
    #[inline]
    pub fn shop_id(&self) -> Option<i64> {
        self.shop_id
    }

    /// Returns the targeted post id.
    #[inline]
    pub fn post_id(&self) -> Option<i64> {
        self.post_id
    }
}

#[cfg(test)]
mod tests {
    use super::ClickEvent;
    use zino::prelude::*;

    #[test]
    fn it_validates_the_event_kind() {
        let mut event = ClickEvent::new();
        let data = json!({
            "kind": "click",
            "shop_id": 7,
            "page": "/shop/nordlys-interioer",
        })
        .into_map_opt()
        .unwrap_or_default();

        let validation = event.read_map(&data);
        assert!(validation.is_success());
        assert_eq!(event.kind(), "click");
        assert_eq!(event.shop_id(), Some(7));

        let mut event = ClickEvent::new();
        let data = Map::from_entry("kind", "hover");
        let validation = event.read_map(&data);
        assert!(!validation.is_success());
    }

    #[test]
    fn it_requires_a_target() {
        let mut event = ClickEvent::new();
        let validation = event.read_map(&Map::new());
        assert!(!validation.is_success());
    }
}
