use crate::{
    model::{ClickEvent, Post, Shop},
    service,
};
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::{Stream, StreamExt};
use std::convert::Infallible;
use zino::{Request, Response, prelude::*};
use zino_channel::MessageChannel;

/// Records one page view or outbound click.
///
/// The event is written fire-and-forget: a storage failure is logged and the
/// request still succeeds. The denormalized counters are maintained with
/// atomic `$inc` mutations.
pub async fn record(mut req: Request) -> zino::Result {
    let mut event = ClickEvent::new();
    let mut res: Response = req.model_validation(&mut event).await?;
    if let Some(client_ip) = req.client_ip() {
        event.set_client_ip(client_ip.to_string());
    }

    let kind = event.kind().to_owned();
    let shop_id = event.shop_id();
    let post_id = event.post_id();
    let entry = event.clone().into_map();
    if let Err(err) = event.insert().await {
        tracing::warn!("fail to record the click event: {err}");
    }

    if let Some(shop_id) = shop_id {
        let field = if kind == "click" {
            "click_count"
        } else {
            "view_count"
        };
        let query = Query::new(Map::from_entry("id", shop_id));
        let mut mutation = Mutation::new(Map::from_entry(field, Map::from_entry("$inc", 1)));
        if let Err(err) = Shop::update_one(&query, &mut mutation).await {
            tracing::warn!("fail to update the `{field}` of the shop `{shop_id}`: {err}");
        }
    }
    if let Some(post_id) = post_id.filter(|_| kind == "view") {
        let query = Query::new(Map::from_entry("id", post_id));
        let mut mutation = Mutation::new(Map::from_entry(
            "view_count",
            Map::from_entry("$inc", 1),
        ));
        if let Err(err) = Post::update_one(&query, &mut mutation).await {
            tracing::warn!("fail to update the `view_count` of the post `{post_id}`: {err}");
        }
    }

    service::feed::record(entry.clone());
    let cloud_event = req.cloud_event("clicks", entry);
    if let Err(err) = MessageChannel::shared().try_send(cloud_event) {
        tracing::warn!("fail to publish the click event: {err}");
    }

    res.set_code(StatusCode::CREATED);
    Ok(res.into())
}

/// Streams the recorded click events to a subscribed admin dashboard.
///
/// Each connection holds one channel subscription, released when the client
/// disconnects.
pub async fn stream(req: Request) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let subscription = req.subscription();
    let channel = MessageChannel::with_subscription(subscription);
    let stream = channel.into_stream().map(|event| {
        let event_id = event.id().to_owned();
        let event_type = event.event_type().to_owned();
        let event_data = event.stringify_data();
        Ok(Event::default()
            .event(event_type)
            .data(event_data)
            .id(event_id))
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}
