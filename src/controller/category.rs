use crate::{
    model::{Category, Shop},
    service::facet::{self, Facet},
};
use zino::{Request, Response, Result, prelude::*};

/// Lists the active categories for the public navigation.
pub async fn list(req: Request) -> Result {
    let mut query = Query::default();
    query.allow_fields(Category::fields());
    query.deny_fields(&["extra"]);
    query.add_filter("status", "Active");
    query.order_asc("sort_order");
    query.set_limit(0);

    let categories = match Category::fetch(&query).await {
        Ok(categories) => categories,
        Err(err) => {
            tracing::warn!("fail to fetch the categories: {err}");
            Vec::new()
        }
    };

    let mut res = Response::default().context(&req);
    res.set_json_data(Map::data_entries(categories));
    Ok(res.into())
}

/// Views one category together with the shops tagged to it.
pub async fn view(req: Request) -> Result {
    let slug: String = req.parse_param("slug")?;

    let mut query = Query::default();
    query.allow_fields(Category::fields());
    query.deny_fields(&["extra"]);
    query.add_filter("status", "Active");
    query.add_filter("slug", slug.as_str());

    let category = match Category::find_one::<Map>(&query).await {
        Ok(category) => category,
        Err(err) => {
            tracing::warn!("fail to fetch the category `{slug}`: {err}");
            None
        }
    };
    let Some(category) = category else {
        reject!(req, not_found, "the category does not exist");
    };

    let mut query = Query::default();
    query.allow_fields(Shop::fields());
    query.deny_fields(&["extra"]);
    query.add_filter("status", "Active");
    query.order_asc("sort_order");
    query.set_limit(0);

    let shops = match Shop::fetch(&query).await {
        Ok(shops) => shops,
        Err(err) => {
            tracing::warn!("fail to fetch the shops for the category `{slug}`: {err}");
            Vec::new()
        }
    };
    let facet = Facet::Category(slug);
    let entries = facet::filter_entries(shops, Some(&facet));

    let mut data = Map::data_entry(category);
    data.upsert("shops", entries);
    let mut res = Response::default().context(&req);
    res.set_json_data(data);
    Ok(res.into())
}
