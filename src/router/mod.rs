use crate::{
    controller::{auth, category, click, post, search, shop, site, stats},
    middleware,
    model::{Account, Category, FooterLink, MenuItem, Post, Shop, Snippet},
};
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use zino::DefaultController;

pub fn routes() -> Vec<Router> {
    let mut routes = Vec::new();

    // Auth controller.
    let router = Router::new().route("/api/admin/auth/login", post(auth::login));
    routes.push(router);
    let router = Router::new()
        .route("/api/admin/auth/refresh", get(auth::refresh))
        .route("/api/admin/auth/logout", post(auth::logout))
        .layer(from_fn(middleware::init_user_session));
    routes.push(router);

    // Site controller.
    let router = Router::new().route("/api/site", get(site::layout));
    routes.push(router);

    // Shop controller.
    let router = Router::new()
        .route("/api/shops", get(shop::list))
        .route("/api/shops/featured", get(shop::featured))
        .route("/api/shops/{slug}", get(shop::view));
    routes.push(router);

    // Category controller.
    let router = Router::new()
        .route("/api/categories", get(category::list))
        .route("/api/categories/{slug}", get(category::view));
    routes.push(router);

    // Post controller.
    let router = Router::new()
        .route("/api/posts", get(post::list))
        .route("/api/posts/{slug}", get(post::view));
    routes.push(router);

    // Search controller.
    let router = Router::new().route("/api/search", get(search::index));
    routes.push(router);

    // Click controller.
    let router = Router::new().route("/api/clicks", post(click::record));
    routes.push(router);

    // Stats controller.
    let router = Router::new()
        .route("/api/admin/stats", get(stats::index))
        .route("/api/admin/events", get(click::stream))
        .layer(from_fn(middleware::init_user_session));
    routes.push(router);

    // Settings management.
    let router = Router::new()
        .route("/api/admin/settings", get(site::settings))
        .route("/api/admin/settings/update", post(site::update_settings))
        .layer(from_fn(middleware::init_user_session));
    routes.push(router);

    // Shop management.
    let router = Router::new()
        .route("/api/admin/shops/new", post(Shop::new))
        .route("/api/admin/shops/{id}/delete", post(Shop::delete))
        .route("/api/admin/shops/{id}/update", post(Shop::update))
        .route("/api/admin/shops/{id}/view", get(Shop::view))
        .route("/api/admin/shops/list", get(Shop::list))
        .route("/api/admin/shops/export", get(Shop::export))
        .layer(from_fn(middleware::init_user_session));
    routes.push(router);

    // Category management.
    let router = Router::new()
        .route("/api/admin/categories/new", post(Category::new))
        .route("/api/admin/categories/{id}/delete", post(Category::delete))
        .route("/api/admin/categories/{id}/update", post(Category::update))
        .route("/api/admin/categories/{id}/view", get(Category::view))
        .route("/api/admin/categories/list", get(Category::list))
        .route("/api/admin/categories/export", get(Category::export))
        .layer(from_fn(middleware::init_user_session));
    routes.push(router);

    // Post management.
    let router = Router::new()
        .route("/api/admin/posts/new", post(Post::new))
        .route("/api/admin/posts/{id}/delete", post(Post::delete))
        .route("/api/admin/posts/{id}/update", post(Post::update))
        .route("/api/admin/posts/{id}/view", get(Post::view))
        .route("/api/admin/posts/list", get(Post::list))
        .route("/api/admin/posts/export", get(Post::export))
        .route("/api/admin/posts/analyze", post(post::analyze))
        .layer(from_fn(middleware::init_user_session));
    routes.push(router);

    // Menu management.
    let router = Router::new()
        .route("/api/admin/menu-items/new", post(MenuItem::new))
        .route("/api/admin/menu-items/{id}/delete", post(MenuItem::delete))
        .route("/api/admin/menu-items/{id}/update", post(MenuItem::update))
        .route("/api/admin/menu-items/{id}/view", get(MenuItem::view))
        .route("/api/admin/menu-items/list", get(MenuItem::list))
        .layer(from_fn(middleware::init_user_session));
    routes.push(router);

    // Footer management.
    let router = Router::new()
        .route("/api/admin/footer-links/new", post(FooterLink::new))
        .route("/api/admin/footer-links/{id}/delete", post(FooterLink::delete))
        .route("/api/admin/footer-links/{id}/update", post(FooterLink::update))
        .route("/api/admin/footer-links/{id}/view", get(FooterLink::view))
        .route("/api/admin/footer-links/list", get(FooterLink::list))
        .layer(from_fn(middleware::init_user_session));
    routes.push(router);

    // Snippet management.
    let router = Router::new()
        .route("/api/admin/snippets/new", post(Snippet::new))
        .route("/api/admin/snippets/{id}/delete", post(Snippet::delete))
        .route("/api/admin/snippets/{id}/update", post(Snippet::update))
        .route("/api/admin/snippets/{id}/view", get(Snippet::view))
        .route("/api/admin/snippets/list", get(Snippet::list))
        .layer(from_fn(middleware::init_user_session));
    routes.push(router);

    // Account management.
    let router = Router::new()
        .route("/api/admin/accounts/new", post(Account::new))
        .route("/api/admin/accounts/{id}/delete", post(Account::delete))
        .route("/api/admin/accounts/{id}/update", post(Account::update))
        .route("/api/admin/accounts/{id}/view", get(Account::view))
        .route("/api/admin/accounts/list", get(Account::list))
        .layer(from_fn(middleware::init_user_session));
    routes.push(router);

    routes
}
