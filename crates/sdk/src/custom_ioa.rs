//! Custom indicator-of-attack rule management.
//!
//! Several published operation ids carry a `Mixin0` suffix; the methods
//! here expose clean names and map onto those ids.

use falcon_api::FalconClient;
use falcon_types::{CallArgs, DispatchError, Params, ResultEnvelope};
use serde_json::Value;

use crate::dispatch::dispatch;

/// Operations on custom IOA rule groups and rules.
#[derive(Debug, Clone)]
pub struct CustomIoa {
    client: FalconClient,
}

impl CustomIoa {
    /// Creates the façade over a configured client.
    pub fn new(client: FalconClient) -> Self {
        Self { client }
    }

    /// Get pattern severities by ID.
    pub async fn get_patterns(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "get_patterns", CallArgs::parameters(parameters)).await
    }

    /// Get platforms by ID.
    pub async fn get_platforms(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "get_platformsMixin0",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Get rule groups by ID.
    pub async fn get_rule_groups(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "get_rule_groupsMixin0",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Create a rule group for a platform with a name and an optional
    /// description.
    pub async fn create_rule_group(&self, body: Value) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "create_rule_groupMixin0",
            CallArgs::new().with_json(body),
        )
        .await
    }

    /// Delete rule groups by ID.
    pub async fn delete_rule_groups(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "delete_rule_groupsMixin0",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Update a rule group's name, description, or enabled state.
    pub async fn update_rule_group(&self, body: Value) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "update_rule_groupMixin0",
            CallArgs::new().with_json(body),
        )
        .await
    }

    /// Get rule types by ID.
    pub async fn get_rule_types(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "get_rule_types",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Get rules by ID and optionally version, in the format `ID[:version]`.
    /// Accepts a body, so the ID list is not constrained by URL size.
    pub async fn get_rules_get(&self, body: Value) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "get_rules_get", CallArgs::new().with_json(body)).await
    }

    /// Get rules by ID and optionally version; the number of IDs is
    /// constrained by URL size. For long lists use [`Self::get_rules_get`].
    pub async fn get_rules(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "get_rulesMixin0",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Create a rule within a rule group.
    pub async fn create_rule(&self, body: Value) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "create_rule", CallArgs::new().with_json(body)).await
    }

    /// Delete rules from a rule group by ID.
    pub async fn delete_rules(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "delete_rules", CallArgs::parameters(parameters)).await
    }

    /// Update rules within a rule group.
    pub async fn update_rules(&self, body: Value) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "update_rules", CallArgs::new().with_json(body)).await
    }

    /// Validate field values and check for matches if a test string is
    /// provided.
    pub async fn validate(&self, body: Value) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "validate", CallArgs::new().with_json(body)).await
    }

    /// Get all pattern severity IDs.
    pub async fn query_patterns(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "query_patterns",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Get all platform IDs.
    pub async fn query_platforms(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "query_platformsMixin0",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Find all rule groups matching the query, returning full group
    /// details.
    pub async fn query_rule_groups_full(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "query_rule_groups_full",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Find all rule group IDs matching the query.
    pub async fn query_rule_groups(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "query_rule_groupsMixin0",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Get all rule type IDs.
    pub async fn query_rule_types(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "query_rule_types",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Find all rule IDs matching the query.
    pub async fn query_rules(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "query_rulesMixin0",
            CallArgs::parameters(parameters),
        )
        .await
    }
}
