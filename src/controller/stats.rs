use crate::{
    model::{Category, ClickEvent, Post, Shop},
    service,
};
use std::time::Instant;
use zino::{Request, Response, Result, prelude::*};

/// Summarizes the directory and its traffic for the admin dashboard.
pub async fn index(req: Request) -> Result {
    let db_query_start_time = Instant::now();

    let mut query = Query::default();
    query.add_filter("status", "Active");
    let shop_count = Shop::count(&query).await.extract(&req)?;

    let mut query = Query::default();
    query.add_filter("status", "Active");
    let category_count = Category::count(&query).await.extract(&req)?;

    let mut query = Query::default();
    query.add_filter("status", "Published");
    let post_count = Post::count(&query).await.extract(&req)?;

    let event_count = ClickEvent::count(&Query::default()).await.extract(&req)?;
    let view_query = Query::new(Map::from_entry("kind", "view"));
    let view_count = ClickEvent::count(&view_query).await.extract(&req)?;
    let click_query = Query::new(Map::from_entry("kind", "click"));
    let click_count = ClickEvent::count(&click_query).await.extract(&req)?;

    let mut query = Query::default();
    query.allow_fields(&["id", "name", "slug", "view_count", "click_count"]);
    query.add_filter("status", "Active");
    query.order_desc("click_count");
    query.set_limit(10);
    let top_shops = Shop::find::<Map>(&query).await.extract(&req)?;
    let db_query_duration = db_query_start_time.elapsed();

    let mut events = Map::new();
    events.upsert("total", event_count);
    events.upsert("views", view_count);
    events.upsert("clicks", click_count);

    let mut data = Map::new();
    data.upsert("shops", shop_count);
    data.upsert("categories", category_count);
    data.upsert("posts", post_count);
    data.upsert("events", events);
    data.upsert("top_shops", top_shops);
    data.upsert("live_feed", service::feed::snapshot());

    let mut res = Response::default().context(&req);
    res.record_server_timing("db", None, Some(db_query_duration));
    res.set_json_data(data);
    Ok(res.into())
}
