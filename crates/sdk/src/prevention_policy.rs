//! Prevention policy management: lifecycle, precedence, and membership.

use falcon_api::FalconClient;
use falcon_types::{CallArgs, DispatchError, Params, ResultEnvelope};
use serde_json::Value;

use crate::dispatch::dispatch;

/// Operations on prevention policies.
#[derive(Debug, Clone)]
pub struct PreventionPolicy {
    client: FalconClient,
}

impl PreventionPolicy {
    /// Creates the façade over a configured client.
    pub fn new(client: FalconClient) -> Self {
        Self { client }
    }

    /// Search for members of a prevention policy and return full host
    /// details.
    pub async fn query_combined_policy_members(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "queryCombinedPreventionPolicyMembers",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Search for prevention policies and return full policy details.
    pub async fn query_combined_policies(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "queryCombinedPreventionPolicies",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Perform the specified action on the prevention policies named in the
    /// body.
    pub async fn perform_policies_action(
        &self,
        parameters: Option<Params>,
        body: Value,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "performPreventionPoliciesAction",
            CallArgs::parameters(parameters).with_json(body),
        )
        .await
    }

    /// Set the precedence of prevention policies based on the order of IDs
    /// in the body.
    pub async fn set_policies_precedence(
        &self,
        body: Value,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "setPreventionPoliciesPrecedence",
            CallArgs::new().with_json(body),
        )
        .await
    }

    /// Retrieve a set of prevention policies by specifying their IDs.
    pub async fn get_policies(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "getPreventionPolicies",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Create prevention policies by specifying details about the policies
    /// to create.
    pub async fn create_policies(&self, body: Value) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "createPreventionPolicies",
            CallArgs::new().with_json(body),
        )
        .await
    }

    /// Delete a set of prevention policies by specifying their IDs.
    pub async fn delete_policies(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "deletePreventionPolicies",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Update prevention policies by specifying the policy ID and the
    /// details to update.
    pub async fn update_policies(&self, body: Value) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "updatePreventionPolicies",
            CallArgs::new().with_json(body),
        )
        .await
    }

    /// Search for members of a prevention policy and return a set of agent
    /// IDs.
    pub async fn query_policy_members(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "queryPreventionPolicyMembers",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Search for prevention policies and return a set of policy IDs.
    pub async fn query_policies(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "queryPreventionPolicies",
            CallArgs::parameters(parameters),
        )
        .await
    }
}
