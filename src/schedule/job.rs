use crate::{model::ClickEvent, service};
use std::time::Duration;
use zino::{Cluster, prelude::*};

/// Logs the live-feed depth and the running click total.
pub fn log_live_feed(ctx: &mut JobContext) {
    let job_id = ctx.job_id().to_string();
    let last_tick = ctx.last_tick();
    let snapshot = service::feed::snapshot();
    let total = snapshot.get_u64("total").unwrap_or_default();
    let depth = snapshot
        .get_array("entries")
        .map(|entries| entries.len())
        .unwrap_or_default();
    if let Some(job_data) = ctx.get_data_mut::<Map>() {
        let counter = job_data
            .get("counter")
            .map(|c| c.as_u64().unwrap_or_default() + 1)
            .unwrap_or_default();
        job_data.upsert("counter", counter);
        job_data.upsert("last_tick", last_tick);
        job_data.upsert("feed_total", total);
    }
    tracing::info!(job_id, total, depth, "live feed heartbeat");
}

/// Purges the click events older than the configured retention window.
pub fn purge_click_events(ctx: &mut JobContext) -> BoxFuture<'_> {
    Box::pin(async move {
        let cutoff = DateTime::now() - Duration::from_secs(*CLICK_RETENTION_DAYS * 24 * 60 * 60);
        let filters = Map::from_entry("created_at", Map::from_entry("$lt", cutoff.to_utc_timestamp()));
        match ClickEvent::delete_many(&Query::new(filters)).await {
            Ok(query_ctx) => {
                let rows_affected = query_ctx.rows_affected();
                if let Some(job_data) = ctx.get_data_mut::<Map>() {
                    job_data.upsert("last_purge", DateTime::now());
                    job_data.upsert("rows_affected", rows_affected);
                }
                tracing::info!(rows_affected, "purged the stale click events");
            }
            Err(err) => tracing::error!("fail to purge the click events: {err}"),
        }
    })
}

/// Number of days a click event is retained before the nightly purge.
static CLICK_RETENTION_DAYS: LazyLock<u64> = LazyLock::new(|| {
    Cluster::config()
        .get_table("webshopguiden")
        .and_then(|config| config.get_u64("click-retention-days"))
        .unwrap_or(90)
});
