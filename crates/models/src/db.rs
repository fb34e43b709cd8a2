use std::time::Duration;

use anyhow::anyhow;
use common::retry::{retry_with_policy, RetryPolicy};
use configs::DatabaseConfig;
use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client, Collection,
};
use tracing::info;

use crate::resource::Resource;

/// Connect to the store according to `cfg`.
///
/// Each attempt builds a client and, when `probe_on_startup` is set, proves the
/// server is reachable with a `ping`. Attempts are spaced by
/// `connect_retry_delay_secs`; once the budget is spent the last error is returned
/// and the caller is expected to abort startup.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<Client> {
    let policy = RetryPolicy::fixed(
        cfg.connect_attempts,
        Duration::from_secs(cfg.connect_retry_delay_secs),
    );
    let client = retry_with_policy(&policy, || try_connect(cfg))
        .await
        .map_err(|e| {
            anyhow!("could not connect to MongoDB after {} attempt(s): {e}", policy.max_attempts())
        })?;
    Ok(client)
}

async fn try_connect(cfg: &DatabaseConfig) -> mongodb::error::Result<Client> {
    let mut options = ClientOptions::parse(&cfg.uri).await?;
    options.server_selection_timeout = Some(Duration::from_secs(cfg.server_selection_timeout_secs));
    let client = Client::with_options(options)?;
    if cfg.probe_on_startup {
        client.database("admin").run_command(doc! { "ping": 1 }, None).await?;
        info!("connected to MongoDB");
    } else {
        info!("MongoDB client created; connectivity checked on first use");
    }
    Ok(client)
}

/// The raw collection backing resource `R`.
pub fn collection<R: Resource>(client: &Client) -> Collection<Document> {
    client.database(R::DATABASE).collection::<Document>(R::COLLECTION)
}
