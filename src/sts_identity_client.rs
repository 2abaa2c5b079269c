use async_trait::async_trait;
use log::info;
use rusoto_core::Region;
use rusoto_sts::{GetCallerIdentityRequest, Sts, StsClient};

use crate::error::IdentityLookupError;

pub struct StsIdentityClient {
    client: StsClient,
}

#[async_trait]
pub trait Identify {
    async fn account_id(&self) -> Result<String, IdentityLookupError>;
}

#[async_trait]
impl Identify for StsIdentityClient {
    async fn account_id(&self) -> Result<String, IdentityLookupError> {
        info!("Fetching AWS account ID");
        let identity = self
            .client
            .get_caller_identity(GetCallerIdentityRequest::default())
            .await?;

        let account_id = identity.account.ok_or(IdentityLookupError::NoneValue)?;
        info!("Retrieved account ID: {}", account_id);
        Ok(account_id)
    }
}

impl StsIdentityClient {
    pub fn new() -> Self {
        Self::new_with_client(StsClient::new(Region::default()))
    }

    pub(crate) fn new_with_client(client: StsClient) -> Self {
        StsIdentityClient { client }
    }
}
