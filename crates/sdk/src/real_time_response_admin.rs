//! Real Time Response administrator operations: privileged commands plus
//! put-file and custom-script management.

use falcon_api::FalconClient;
use falcon_types::{CallArgs, DispatchError, Params, ResultEnvelope};
use serde_json::Value;

use crate::dispatch::dispatch;

/// Administrator-level Real Time Response operations.
#[derive(Debug, Clone)]
pub struct RealTimeResponseAdmin {
    client: FalconClient,
}

impl RealTimeResponseAdmin {
    /// Creates the façade over a configured client.
    pub fn new(client: FalconClient) -> Self {
        Self { client }
    }

    /// Batch executes an administrator command across the hosts mapped to
    /// the given batch ID.
    pub async fn batch_admin_command(
        &self,
        parameters: Option<Params>,
        body: Value,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "BatchAdminCmd",
            CallArgs::parameters(parameters).with_json(body),
        )
        .await
    }

    /// Get status of an executed administrator command on a single host.
    /// Poll with an increasing `sequence_id` until `complete` is true.
    pub async fn check_admin_command_status(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "RTR_CheckAdminCommandStatus",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Execute an administrator command on a single host.
    pub async fn execute_admin_command(
        &self,
        body: Value,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "RTR_ExecuteAdminCommand",
            CallArgs::new().with_json(body),
        )
        .await
    }

    /// Get put-files based on the IDs given, as used for the `put` command.
    pub async fn get_put_files(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "RTR_GetPut_Files",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Upload a new put-file for the `put` command. The payload is sent as
    /// opaque bytes.
    pub async fn create_put_files(&self, body: Vec<u8>) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "RTR_CreatePut_Files",
            CallArgs::new().with_raw(body),
        )
        .await
    }

    /// Delete a put-file based on the ID given; one file at a time.
    pub async fn delete_put_files(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "RTR_DeletePut_Files",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Get custom-scripts based on the IDs given, as used for the
    /// `runscript` command.
    pub async fn get_scripts(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "RTR_GetScripts",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Upload a new custom-script for the `runscript` command. The payload
    /// is sent as opaque bytes.
    pub async fn create_scripts(&self, body: Vec<u8>) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "RTR_CreateScripts",
            CallArgs::new().with_raw(body),
        )
        .await
    }

    /// Delete a custom-script based on the ID given; one script at a time.
    pub async fn delete_scripts(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "RTR_DeleteScripts",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Upload a new script to replace an existing one.
    pub async fn update_scripts(&self, body: Vec<u8>) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "RTR_UpdateScripts",
            CallArgs::new().with_raw(body),
        )
        .await
    }

    /// Get a list of put-file IDs available to the user for the `put`
    /// command.
    pub async fn list_put_files(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "RTR_ListPut_Files",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Get a list of custom-script IDs available to the user for the
    /// `runscript` command.
    pub async fn list_scripts(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "RTR_ListScripts",
            CallArgs::parameters(parameters),
        )
        .await
    }
}
