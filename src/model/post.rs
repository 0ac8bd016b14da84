use crate::service::slug;
use serde::{Deserialize, Serialize};
use zino::prelude::*;
use zino_derive::{ModelAccessor, ModelHooks, Schema};

/// The `post` model.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Schema, ModelAccessor, ModelHooks)]
#[serde(rename_all = "snake_case")]
#[serde(default)]
pub struct Post {
    // Basic fields.
    #[schema(auto_increment, readonly)]
    id: i64,
    #[schema(not_null, index_type = "text")]
    title: String,
    #[schema(not_null, unique)]
    slug: String,
    #[schema(default_value = "Draft", index_type = "hash")]
    status: String,

    // Info fields.
    excerpt: String,
    #[schema(index_type = "text")]
    body: String, // may embed `[widget:<id>]` shortcodes
    author: String,
    #[schema(index_type = "hash")]
    category: String, // category.slug
    #[schema(index_type = "gin")]
    tags: Vec<String>,
    focus_keyword: String,
    featured_image: String,

    // Generated SEO fields.
    seo_title: String,
    seo_description: String,
    seo_keywords: Vec<String>,
    structured_data: Map,

    // Statistics.
    #[schema(readonly)]
    view_count: u64,

    // Extensions.
    extra: Map,

    // Revisions.
    #[schema(readonly, default_value = "now", index_type = "btree")]
    created_at: DateTime,
    #[schema(default_value = "now", index_type = "btree")]
    updated_at: DateTime,
    version: u64,
}

impl Model for Post {
    #[inline]
    fn new() -> Self {
        Self {
            status: "Draft".to_owned(),
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
        if let Some(title) = data.parse_string("title") {
            self.title = title.into_owned();
        }
        if let Some(slug) = data.parse_string("slug").filter(|s| !s.is_empty()) {
            self.slug = slug.into_owned();
        } else if self.slug.is_empty() && !self.title.is_empty() {
            self.slug = slug::slugify(&self.title);
        }
        if let Some(status) = data.parse_string("status") {
            self.status = status.into_owned();
        }
        if let Some(excerpt) = data.parse_string("excerpt") {
            self.excerpt = excerpt.into_owned();
        }
        if let Some(body) = data.parse_string("body") {
            self.body = body.into_owned();
        }
        if let Some(author) = data.parse_string("author") {
            self.author = author.into_owned();
        }
        if let Some(category) = data.parse_string("category") {
            self.category = category.into_owned();
        }
        if let Some(tags) = data.parse_str_array("tags") {
            self.tags = tags.into_iter().map(|s| s.to_owned()).collect();
        }
        if let Some(focus_keyword) = data.parse_string("focus_keyword") {
            self.focus_keyword = focus_keyword.into_owned();
        }
        if let Some(featured_image) = data.parse_string("featured_image") {
            self.featured_image = featured_image.into_owned();
        }
        if let Some(seo_title) = data.parse_string("seo_title") {
            self.seo_title = seo_title.into_owned();
        }
        if let Some(seo_description) = data.parse_string("seo_description") {
            self.seo_description = seo_description.into_owned();
        }
        if let Some(seo_keywords) = data.parse_str_array("seo_keywords") {
            self.seo_keywords = seo_keywords.into_iter().map(|s| s.to_owned()).collect();
        }
        if let Some(structured_data) = data.get_object("structured_data") {
            self.structured_data = structured_data.to_owned();
        }
        if self.title.is_empty() {
            validation.record("title", "should be nonempty");
        }
        validation
    }
}

#[cfg(test)]
mod tests {
    use super::Post;
    use zino::prelude::*;

    #[test]
    fn it_derives_the_slug_from_the_title() {
        let mut post = Post::new();
        let data = json!({
            "title": "Gaveideer til børn på budget",
            "excerpt": "Ti billige gaver der holder.",
            "body": "<p>Her er vores favoritter [widget:7] til i år.</p>",
            "focus_keyword": "gaveideer",
        })
        .into_map_opt()
        .unwrap_or_default();

        let validation = post.read_map(&data);
        assert!(validation.is_success());
        assert_eq!(post.slug, "gaveideer-til-boern-paa-budget");
        assert_eq!(post.status, "Draft");
    }

    #[test]
    fn it_requires_a_title() {
        let mut post = Post::new();
        let data = Map::from_entry("body", "<p>Uden titel.</p>");
        let validation = post.read_map(&data);
        assert!(!validation.is_success());
    }
}
