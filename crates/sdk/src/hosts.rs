//! Host discovery, detail retrieval, and response actions.

use falcon_api::FalconClient;
use falcon_types::{CallArgs, DispatchError, Params, ResultEnvelope};
use serde_json::Value;

use crate::dispatch::dispatch;

/// Operations on the hosts in your environment.
#[derive(Debug, Clone)]
pub struct Hosts {
    client: FalconClient,
}

impl Hosts {
    /// Creates the façade over a configured client.
    pub fn new(client: FalconClient) -> Self {
        Self { client }
    }

    /// Take various actions on the hosts in your environment, such as
    /// containing or lifting containment.
    ///
    /// # Errors
    /// Fails before any network use when `action_name` or the body is
    /// missing; every reachable outcome arrives inside the envelope.
    pub async fn perform_action(
        &self,
        parameters: Option<Params>,
        body: Value,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "PerformActionV2",
            CallArgs::parameters(parameters).with_json(body),
        )
        .await
    }

    /// Get details on one or more hosts by providing agent IDs.
    pub async fn get_device_details(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "GetDeviceDetails",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Search for hosts with continuous pagination; the returned offset
    /// token feeds the next page.
    pub async fn query_devices_by_filter_scroll(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "QueryDevicesByFilterScroll",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Search for hosts by platform, hostname, IP, and other criteria.
    pub async fn query_devices_by_filter(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "QueryDevicesByFilter",
            CallArgs::parameters(parameters),
        )
        .await
    }
}
