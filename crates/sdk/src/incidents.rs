//! Incident monitoring: CrowdScore, behaviors, and incident actions.

use falcon_api::FalconClient;
use falcon_types::{CallArgs, DispatchError, Params, ResultEnvelope};
use serde_json::Value;

use crate::dispatch::dispatch;

/// Operations on incidents and detection behaviors.
#[derive(Debug, Clone)]
pub struct Incidents {
    client: FalconClient,
}

impl Incidents {
    /// Creates the façade over a configured client.
    pub fn new(client: FalconClient) -> Self {
        Self { client }
    }

    /// Query environment-wide CrowdScore and return the entity data.
    pub async fn crowdscore(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "CrowdScore", CallArgs::parameters(parameters)).await
    }

    /// Get details on behaviors by providing behavior IDs in the body.
    pub async fn get_behaviors(&self, body: Value) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "GetBehaviors", CallArgs::new().with_json(body)).await
    }

    /// Perform a set of actions on one or more incidents, such as adding
    /// tags or changing status.
    pub async fn perform_incident_action(
        &self,
        body: Value,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "PerformIncidentAction",
            CallArgs::new().with_json(body),
        )
        .await
    }

    /// Get details on incidents by providing incident IDs in the body.
    pub async fn get_incidents(&self, body: Value) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "GetIncidents", CallArgs::new().with_json(body)).await
    }

    /// Search for behaviors by providing an FQL filter, sorting, and paging
    /// details.
    pub async fn query_behaviors(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "QueryBehaviors",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Search for incidents by providing an FQL filter, sorting, and paging
    /// details.
    pub async fn query_incidents(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "QueryIncidents",
            CallArgs::parameters(parameters),
        )
        .await
    }
}
