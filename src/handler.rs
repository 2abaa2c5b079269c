use chrono::{DateTime, Utc};
use log::{error, info};
use serde::Serialize;
use serde_json::Value;

use crate::alert::AlertMessage;
use crate::cost_explorer_client::MonthlyCost;
use crate::error::CostNotifierError;
use crate::event::ScheduledEvent;
use crate::notifox_client::Notify;
use crate::sts_identity_client::Identify;
use crate::time_range::TimeRange;

const SUCCESS_MESSAGE: &str = "Alert sent successfully";

#[derive(Debug, PartialEq, Serialize)]
pub struct NotifierOutput {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
    pub cost: f64,
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_detail_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Looks up this month's spend and the owning account, then sends one alert.
/// The first failing step aborts the rest of the invocation.
pub struct CostNotifier<C, I, N> {
    cost: C,
    identity: I,
    notifier: N,
}

impl<C, I, N> CostNotifier<C, I, N>
where
    C: MonthlyCost,
    I: Identify,
    N: Notify,
{
    pub fn new(cost: C, identity: I, notifier: N) -> Self {
        CostNotifier {
            cost,
            identity,
            notifier,
        }
    }

    pub async fn handle(&self, event: &Value) -> Result<NotifierOutput, CostNotifierError> {
        let result = self.handle_at(event, Utc::now()).await;
        match result {
            Ok(_) => info!("Lambda function completed successfully"),
            Err(ref e) => error!("Error in handler ({}): {}", e.category(), e),
        }
        result
    }

    async fn handle_at(
        &self,
        event: &Value,
        now: DateTime<Utc>,
    ) -> Result<NotifierOutput, CostNotifierError> {
        info!("Event received: {}", event);
        let scheduled = ScheduledEvent::from_value(event);

        let time_range = TimeRange::from(now);
        let cost = self.cost.monthly_cost(&time_range).await?;
        let account_id = self.identity.account_id().await?;

        let message = AlertMessage {
            account_id: &account_id,
            cost,
        }
        .to_string();
        info!("Constructed alert message: {}", message);

        self.notifier.send_alert(&message).await?;
        info!("Successfully sent alert");

        Ok(NotifierOutput {
            status_code: 200,
            message: SUCCESS_MESSAGE.to_string(),
            cost,
            schedule_name: scheduled.schedule_name(),
            timezone: scheduled.timezone(),
            event_source: scheduled.source,
            event_detail_type: scheduled.detail_type,
            account_id,
        })
    }
}
