use crate::error::CostLookupError;
use async_trait::async_trait;

use bigdecimal::BigDecimal;
use log::info;
use rusoto_ce::{
    CostExplorer, CostExplorerClient, DateInterval, GetCostAndUsageRequest, ResultByTime,
};
use rusoto_core::Region;

use std::str::FromStr;
use crate::time_range::TimeRange;

const GRANULARITY: &str = "MONTHLY";
const UNBLENDED_COST: &str = "UnblendedCost";

pub struct CostExplorerCostClient {
    client: CostExplorerClient,
}

#[async_trait]
pub trait MonthlyCost {
    async fn monthly_cost(&self, time_range: &TimeRange) -> Result<f64, CostLookupError>;
}

#[async_trait]
impl MonthlyCost for CostExplorerCostClient {
    async fn monthly_cost(&self, time_range: &TimeRange) -> Result<f64, CostLookupError> {
        let response = self
            .client
            .get_cost_and_usage(GetCostAndUsageRequest {
                time_period: DateInterval {
                    start: time_range.start_date(),
                    end: time_range.end_date(),
                },
                granularity: GRANULARITY.to_string(),
                metrics: vec![UNBLENDED_COST.to_string()],
                ..Default::default()
            })
            .await?;
        info!("Successfully retrieved cost data from Cost Explorer");

        let cost = Self::unblended_cost(response.results_by_time)?;
        info!("Monthly cost retrieved: ${:.2}", cost);
        Ok(cost)
    }
}

impl CostExplorerCostClient {
    /// Cost Explorer is only served from us-east-1.
    pub fn new() -> Self {
        Self::new_with_client(CostExplorerClient::new(Region::UsEast1))
    }

    pub(crate) fn new_with_client(client: CostExplorerClient) -> Self {
        CostExplorerCostClient { client }
    }

    fn unblended_cost(
        results_by_time: Option<Vec<ResultByTime>>,
    ) -> Result<f64, CostLookupError> {
        let results_by_time = results_by_time.map_or(vec![], |results| results);
        let amount = results_by_time
            .into_iter()
            .next()
            .ok_or(CostLookupError::NoResults)?
            .total
            .and_then(|mut total| total.remove(UNBLENDED_COST))
            .and_then(|metric| metric.amount)
            .ok_or(CostLookupError::NoneValue)?;

        // BigDecimal rejects anything that is not a plain decimal; the float
        // itself comes from a correctly rounded parse of the same text.
        let amount = amount.trim();
        BigDecimal::from_str(amount)?;
        amount
            .parse::<f64>()
            .ok()
            .filter(|cost| cost.is_finite())
            .ok_or(CostLookupError::ToPrimitive)
    }
}
