use crate::model::{FooterLink, MenuItem, Setting, Snippet};
use zino::{Request, Response, Result, prelude::*};

/// Returns the site-wide layout: settings, navigation, footer and snippets.
///
/// Every piece degrades to its default when the backing query fails, so the
/// public pages always render.
pub async fn layout(req: Request) -> Result {
    let settings = Setting::load().await;

    let mut query = Query::default();
    query.allow_fields(MenuItem::fields());
    query.add_filter("status", "Active");
    query.order_asc("sort_order");
    query.set_limit(0);
    let menu = match MenuItem::fetch(&query).await {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!("fail to fetch the menu items: {err}");
            Vec::new()
        }
    };

    let mut query = Query::default();
    query.allow_fields(FooterLink::fields());
    query.add_filter("status", "Active");
    query.order_asc("sort_order");
    query.set_limit(0);
    let footer = match FooterLink::fetch(&query).await {
        Ok(links) => links,
        Err(err) => {
            tracing::warn!("fail to fetch the footer links: {err}");
            Vec::new()
        }
    };

    let mut query = Query::default();
    query.allow_fields(Snippet::fields());
    query.add_filter("status", "Active");
    query.order_asc("sort_order");
    query.set_limit(0);
    let snippets = match Snippet::fetch(&query).await {
        Ok(snippets) => snippets,
        Err(err) => {
            tracing::warn!("fail to fetch the snippets: {err}");
            Vec::new()
        }
    };

    let mut data = Map::new();
    data.upsert("settings", settings);
    data.upsert("menu", menu);
    data.upsert("footer", footer);
    data.upsert("snippets", snippets);

    let mut res = Response::default().context(&req);
    res.set_json_data(data);
    Ok(res.into())
}

/// Views the site settings for the admin console.
pub async fn settings(req: Request) -> Result {
    let settings = Setting::load().await;
    let mut res = Response::default().context(&req);
    res.set_json_data(Map::data_entry(settings));
    Ok(res.into())
}

/// Updates the singleton settings row, creating it on the first write.
pub async fn update_settings(mut req: Request) -> Result {
    let mut body: Map = req.parse_body().await?;
    // The singleton row is keyed by a fixed name.
    body.remove("name");

    let query = Query::new(Map::from_entry("name", "default"));
    let existing = Setting::find_one::<Map>(&query).await.extract(&req)?;
    if let Some(id) = existing.and_then(|settings| settings.get_i64("id")) {
        let (validation, setting) = Setting::update_by_id(&id, &mut body, None)
            .await
            .extract(&req)?;
        if !validation.is_success() {
            reject!(req, validation);
        }

        let mut res = Response::default().context(&req);
        res.set_json_data(Map::data_entry(setting.next_version_filters()));
        Ok(res.into())
    } else {
        let mut setting = Setting::new();
        let validation = setting.read_map(&body);
        if !validation.is_success() {
            reject!(req, validation);
        }

        let snapshot = setting.snapshot();
        setting.insert().await.extract(&req)?;
        let mut res = Response::default().context(&req);
        res.set_code(StatusCode::CREATED);
        res.set_json_data(Map::data_entry(snapshot));
        Ok(res.into())
    }
}
