pub(crate) mod auth;
pub(crate) mod facet;
pub(crate) mod feed;
pub(crate) mod search;
pub(crate) mod seo;
pub(crate) mod shortcode;
pub(crate) mod slug;
