use crate::{
    model::Shop,
    service::{self, facet::Facet},
};
use zino::{Cluster, Request, Response, Result, prelude::*};

/// Lists the active shops, narrowed to at most one facet.
///
/// A facet matched by zero shops yields an empty page; a failed query is
/// logged and degrades to the same empty page.
pub async fn list(req: Request) -> Result {
    let params: Map = req.parse_query()?;
    let facet = match Facet::from_query(&params) {
        Ok(facet) => facet,
        Err(err) => reject!(req, "facet", err),
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
            tracing::warn!("fail to fetch the shops: {err}");
            Vec::new()
        }
    };
    let entries = service::facet::filter_entries(shops, facet.as_ref());

    let mut res = Response::default().context(&req);
    res.set_json_data(Map::data_entries(entries));
    Ok(res.into())
}

/// Lists the featured shops for the front page.
pub async fn featured(req: Request) -> Result {
    let mut query = Query::default();
    query.allow_fields(Shop::fields());
    query.deny_fields(&["extra"]);
    query.add_filter("status", "Active");
    query.add_filter("featured", true);
    query.order_asc("sort_order");
    query.set_limit(*FEATURED_PAGE_SIZE);

    let shops = match Shop::fetch(&query).await {
        Ok(shops) => shops,
        Err(err) => {
            tracing::warn!("fail to fetch the featured shops: {err}");
            Vec::new()
        }
    };

    let mut res = Response::default().context(&req);
    res.set_json_data(Map::data_entries(shops));
    Ok(res.into())
}

/// Views one active shop by its slug.
pub async fn view(req: Request) -> Result {
    let slug: String = req.parse_param("slug")?;

    let mut query = Query::default();
    query.allow_fields(Shop::fields());
    query.deny_fields(&["extra"]);
    query.add_filter("status", "Active");
    query.add_filter("slug", slug.as_str());

    let shop = match Shop::find_one::<Map>(&query).await {
        Ok(shop) => shop,
        Err(err) => {
            tracing::warn!("fail to fetch the shop `{slug}`: {err}");
            None
        }
    };
    let Some(shop) = shop else {
        reject!(req, not_found, "the shop does not exist");
    };

    let mut res = Response::default().context(&req);
    res.set_json_data(Map::data_entry(shop));
    Ok(res.into())
}

/// Maximum number of shops returned by the featured listing.
static FEATURED_PAGE_SIZE: LazyLock<usize> = LazyLock::new(|| {
    Cluster::config()
        .get_table("webshopguiden")
        .and_then(|config| config.get_usize("featured-page-size"))
        .unwrap_or(8)
});
