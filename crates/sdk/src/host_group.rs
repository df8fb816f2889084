//! Host group management: grouping hosts and acting on groups.

use falcon_api::FalconClient;
use falcon_types::{CallArgs, DispatchError, Params, ResultEnvelope};
use serde_json::Value;

use crate::dispatch::dispatch;

/// Operations on host groups.
#[derive(Debug, Clone)]
pub struct HostGroup {
    client: FalconClient,
}

impl HostGroup {
    /// Creates the façade over a configured client.
    pub fn new(client: FalconClient) -> Self {
        Self { client }
    }

    /// Search for members of a host group and return full host details.
    pub async fn query_combined_group_members(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "queryCombinedGroupMembers",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Search for host groups and return full group details.
    pub async fn query_combined_host_groups(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "queryCombinedHostGroups",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Perform the specified action on the host groups named in the body.
    pub async fn perform_group_action(
        &self,
        parameters: Option<Params>,
        body: Value,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "performGroupAction",
            CallArgs::parameters(parameters).with_json(body),
        )
        .await
    }

    /// Retrieve a set of host groups by specifying their IDs.
    pub async fn get_host_groups(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "getHostGroups",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Create host groups by specifying details about the groups to create.
    pub async fn create_host_groups(&self, body: Value) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "createHostGroups",
            CallArgs::new().with_json(body),
        )
        .await
    }

    /// Delete a set of host groups by specifying their IDs.
    pub async fn delete_host_groups(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "deleteHostGroups",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Update host groups by specifying the group ID and the details to
    /// update.
    pub async fn update_host_groups(&self, body: Value) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "updateHostGroups",
            CallArgs::new().with_json(body),
        )
        .await
    }

    /// Search for members of a host group and return a set of agent IDs.
    pub async fn query_group_members(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "queryGroupMembers",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Search for host groups and return a set of host group IDs.
    pub async fn query_host_groups(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "queryHostGroups",
            CallArgs::parameters(parameters),
        )
        .await
    }
}
