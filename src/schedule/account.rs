use crate::model::Account;
use zino::prelude::*;

pub fn create_initial_account(_ctx: &mut JobContext) -> BoxFuture<'_> {
    let mut query = Account::default_query();
    query.add_filter("roles", "admin");
    Box::pin(async move {
        if Account::count(&query).await.is_ok_and(|total| total == 0) {
            let mut admin = Account::new();
            let mut data = Map::new();
            data.upsert("name", "Administrator");
            data.upsert("roles", "admin");
            data.upsert("account", "admin");
            data.upsert("password", "admin");
            if admin.read_map(&data).is_success()
                && let Err(err) = admin.insert().await
            {
                tracing::error!("fail to create initial account: {err}");
            }
        }
    })
}
