pub(crate) mod auth;
pub(crate) mod category;
pub(crate) mod click;
pub(crate) mod post;
pub(crate) mod search;
pub(crate) mod shop;
pub(crate) mod site;
pub(crate) mod stats;
