use crate::{
    model::{Post, Shop},
    service,
};
use zino::{Request, Response, Result, prelude::*};

/// Lists the published posts, newest first.
pub async fn list(req: Request) -> Result {
    let mut query = Query::default();
    query.allow_fields(Post::fields());
    query.deny_fields(&["body", "extra"]);
    query.add_filter("status", "Published");
    if let Some(category) = req.get_query("category") {
        query.add_filter("category", category);
    }
    query.order_desc("created_at");
    query.set_limit(0);

    let posts = match Post::fetch(&query).await {
        Ok(posts) => posts,
        Err(err) => {
            tracing::warn!("fail to fetch the posts: {err}");
            Vec::new()
        }
    };

    let mut res = Response::default().context(&req);
    res.set_json_data(Map::data_entries(posts));
    Ok(res.into())
}

/// Views one published post by its slug, with widget shortcodes expanded.
///
/// Reading a post does not touch its view counter; counting is an explicit
/// `record` operation on the click controller.
pub async fn view(req: Request) -> Result {
    let slug: String = req.parse_param("slug")?;

    let mut query = Query::default();
    query.allow_fields(Post::fields());
    query.deny_fields(&["extra"]);
    query.add_filter("status", "Published");
    query.add_filter("slug", slug.as_str());

    let post = match Post::find_one::<Map>(&query).await {
        Ok(post) => post,
        Err(err) => {
            tracing::warn!("fail to fetch the post `{slug}`: {err}");
            None
        }
    };
    let Some(mut post) = post else {
        reject!(req, not_found, "the post does not exist");
    };

    let body = post.parse_string("body").map(|body| body.into_owned());
    if let Some(body) = body.filter(|body| body.contains("[widget:")) {
        let mut query = Query::default();
        query.allow_fields(&["id", "name", "slug", "logo_url", "discount_text"]);
        query.add_filter("status", "Active");
        query.set_limit(0);
        match Shop::find::<Map>(&query).await {
            Ok(shops) => {
                post.upsert("body", service::shortcode::expand(&body, &shops));
            }
            Err(err) => {
                tracing::warn!("fail to fetch the shops for the widget shortcodes: {err}");
            }
        }
    }

    let mut res = Response::default().context(&req);
    res.set_json_data(Map::data_entry(post));
    Ok(res.into())
}

/// Scores a draft post against the SEO checklist for the admin editor.
pub async fn analyze(mut req: Request) -> Result {
    let draft: Map = req.parse_body().await?;
    let report = service::seo::evaluate(&draft);
    let report = serde_json::to_value(report).extract(&req)?;

    let mut res = Response::default().context(&req);
    res.set_json_data(Map::data_entry(report));
    Ok(res.into())
}
