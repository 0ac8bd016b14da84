mod account;
mod category;
mod click_event;
mod footer_link;
mod menu_item;
mod post;
mod setting;
mod shop;
mod snippet;

pub(crate) use account::Account;
pub(crate) use category::Category;
pub(crate) use click_event::ClickEvent;
pub(crate) use footer_link::FooterLink;
pub(crate) use menu_item::MenuItem;
pub(crate) use post::Post;
pub(crate) use setting::Setting;
pub(crate) use shop::Shop;
pub(crate) use snippet::Snippet;
