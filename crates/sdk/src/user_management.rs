//! User account and role assignment management.

use falcon_api::FalconClient;
use falcon_types::{CallArgs, DispatchError, Params, ResultEnvelope};
use serde_json::Value;

use crate::dispatch::dispatch;

/// Operations on users and their role assignments.
#[derive(Debug, Clone)]
pub struct UserManagement {
    client: FalconClient,
}

impl UserManagement {
    /// Creates the façade over a configured client.
    pub fn new(client: FalconClient) -> Self {
        Self { client }
    }

    /// Get info about one or more roles.
    pub async fn get_roles(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "GetRoles", CallArgs::parameters(parameters)).await
    }

    /// Assign one or more roles to a user.
    pub async fn grant_user_role_ids(
        &self,
        parameters: Option<Params>,
        body: Value,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "GrantUserRoleIds",
            CallArgs::parameters(parameters).with_json(body),
        )
        .await
    }

    /// Revoke one or more roles from a user.
    pub async fn revoke_user_role_ids(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "RevokeUserRoleIds",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Show role IDs for all roles available in your customer account.
    pub async fn get_available_role_ids(&self) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "GetAvailableRoleIds", CallArgs::new()).await
    }

    /// Show role IDs of roles assigned to a user.
    pub async fn get_user_role_ids(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "GetUserRoleIds",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Get info about one or more users.
    pub async fn retrieve_user(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "RetrieveUser", CallArgs::parameters(parameters)).await
    }

    /// Create a new user; after creating, assign one or more roles with
    /// [`Self::grant_user_role_ids`].
    pub async fn create_user(&self, body: Value) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "CreateUser", CallArgs::new().with_json(body)).await
    }

    /// Modify an existing user's first or last name.
    pub async fn update_user(
        &self,
        parameters: Option<Params>,
        body: Value,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "UpdateUser",
            CallArgs::parameters(parameters).with_json(body),
        )
        .await
    }

    /// Delete a user permanently.
    pub async fn delete_user(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "DeleteUser", CallArgs::parameters(parameters)).await
    }

    /// List the usernames (usually an email address) for all users in your
    /// customer account.
    pub async fn retrieve_emails_by_cid(&self) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "RetrieveEmailsByCID", CallArgs::new()).await
    }

    /// List user IDs for all users in your customer account.
    pub async fn retrieve_user_uuids_by_cid(&self) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "RetrieveUserUUIDsByCID", CallArgs::new()).await
    }

    /// Get a user's ID by providing a username (usually an email address).
    pub async fn retrieve_user_uuid(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "RetrieveUserUUID",
            CallArgs::parameters(parameters),
        )
        .await
    }
}
