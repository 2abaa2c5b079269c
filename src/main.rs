mod alert;
mod config;
mod cost_explorer_client;
mod error;
mod event;
mod handler;
mod notifox_client;
mod sts_identity_client;
mod time_range;

use std::sync::Arc;

use lambda_runtime::{handler_fn, Context, Error};
use log::info;
use serde_json::Value;

use crate::config::Config;
use crate::cost_explorer_client::CostExplorerCostClient;
use crate::handler::CostNotifier;
use crate::notifox_client::NotifoxClient;
use crate::sts_identity_client::StsIdentityClient;

type Notifier = CostNotifier<CostExplorerCostClient, StsIdentityClient, NotifoxClient>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;
    simple_logger::init_with_level(config.log_level)?;
    config.log_presence();

    let notifier = Arc::new(CostNotifier::new(
        CostExplorerCostClient::new(),
        StsIdentityClient::new(),
        NotifoxClient::from_config(&config),
    ));

    lambda_runtime::run(handler_fn(move |event: Value, context: Context| {
        let notifier = Arc::clone(&notifier);
        async move { report_handler(&notifier, event, context).await }
    }))
    .await?;
    Ok(())
}

async fn report_handler(
    notifier: &Notifier,
    event: Value,
    context: Context,
) -> Result<Value, Error> {
    info!("Lambda function started (request {})", context.request_id);
    let output = notifier.handle(&event).await?;
    Ok(serde_json::to_value(output)?)
}
