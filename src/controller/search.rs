use crate::{
    model::{Category, Post, Shop},
    service,
};
use zino::{Request, Response, Result, prelude::*};

/// Searches shops, categories and posts with a case-insensitive substring
/// match, grouped by kind for the results-type selector.
pub async fn index(req: Request) -> Result {
    let Some(term) = req.get_query("q").map(str::trim).filter(|q| !q.is_empty()) else {
        reject!(req, "q", "it should be nonempty");
    };
    let pattern = format!("%{term}%");

    let mut query = Query::default();
    query.allow_fields(Shop::fields());
    query.deny_fields(&["extra"]);
    query.add_filter("status", "Active");
    query.add_filter("name", Map::from_entry("$ilike", pattern.as_str()));
    query.order_asc("sort_order");
    query.set_limit(0);
    let shops = match Shop::fetch(&query).await {
        Ok(shops) => shops,
        Err(err) => {
            tracing::warn!("fail to search the shops: {err}");
            Vec::new()
        }
    };

    let mut query = Query::default();
    query.allow_fields(Category::fields());
    query.deny_fields(&["extra"]);
    query.add_filter("status", "Active");
    query.add_filter("name", Map::from_entry("$ilike", pattern.as_str()));
    query.order_asc("sort_order");
    query.set_limit(0);
    let categories = match Category::fetch(&query).await {
        Ok(categories) => categories,
        Err(err) => {
            tracing::warn!("fail to search the categories: {err}");
            Vec::new()
        }
    };

    let mut query = Query::default();
    query.allow_fields(Post::fields());
    query.deny_fields(&["body", "extra"]);
    query.add_filter("status", "Published");
    query.add_filter("title", Map::from_entry("$ilike", pattern.as_str()));
    query.order_desc("created_at");
    query.set_limit(0);
    let posts = match Post::fetch(&query).await {
        Ok(posts) => posts,
        Err(err) => {
            tracing::warn!("fail to search the posts: {err}");
            Vec::new()
        }
    };

    let mut data = service::search::group_results(shops, categories, posts);
    let args = fluent_args![
        "query" => term.to_owned(),
        "total" => data.get_u64("total").unwrap_or_default()
    ];
    if let Ok(summary) = req.translate("search-summary", Some(args)) {
        data.upsert("summary", summary);
    }
    data.upsert("query", term);

    let mut res = Response::default().context(&req);
    res.set_json_data(data);
    Ok(res.into())
}
