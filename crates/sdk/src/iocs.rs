//! Custom indicator-of-compromise observations.
//!
//! The indicator CRUD endpoints this collection once offered were removed
//! from the cloud. Those methods stay on the façade and answer locally with
//! a canned error envelope naming their replacements, so existing callers
//! fail loudly instead of hitting dead routes.

use falcon_api::FalconClient;
use falcon_types::{CallArgs, DispatchError, Params, ResultEnvelope};

use crate::dispatch::{deprecation_result, dispatch};

/// Operations on custom IOC observations.
#[derive(Debug, Clone)]
pub struct Iocs {
    client: FalconClient,
}

impl Iocs {
    /// Creates the façade over a configured client.
    pub fn new(client: FalconClient) -> Self {
        Self { client }
    }

    /// Number of hosts in your customer account that have observed a given
    /// custom IOC.
    pub async fn devices_count(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "DevicesCount", CallArgs::parameters(parameters)).await
    }

    /// Find hosts that have observed a given custom IOC.
    pub async fn devices_ran_on(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(&self.client, "DevicesRanOn", CallArgs::parameters(parameters)).await
    }

    /// Search for processes associated with a custom IOC on a device.
    pub async fn processes_ran_on(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "ProcessesRanOn",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// For the provided process ID, retrieve the process details.
    pub async fn entities_processes(
        &self,
        parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        dispatch(
            &self.client,
            "entities_processes",
            CallArgs::parameters(parameters),
        )
        .await
    }

    /// Formerly retrieved an IOC. The endpoint was removed from the cloud;
    /// use the `indicator_get_v1` operation of the IOC management API.
    pub async fn get_ioc(
        &self,
        _parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        Ok(deprecation_result(
            "GetIOC has been removed from the cloud. Use the indicator_get_v1 \
             operation of the IOC management API to perform this action.",
        ))
    }

    /// Formerly created an IOC. The endpoint was removed from the cloud;
    /// use the `indicator_create_v1` operation of the IOC management API.
    pub async fn create_ioc(
        &self,
        _body: serde_json::Value,
    ) -> Result<ResultEnvelope, DispatchError> {
        Ok(deprecation_result(
            "CreateIOC has been removed from the cloud. Use the indicator_create_v1 \
             operation of the IOC management API to perform this action.",
        ))
    }

    /// Formerly deleted an IOC. The endpoint was removed from the cloud;
    /// use the `indicator_delete_v1` operation of the IOC management API.
    pub async fn delete_ioc(
        &self,
        _parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        Ok(deprecation_result(
            "DeleteIOC has been removed from the cloud. Use the indicator_delete_v1 \
             operation of the IOC management API to perform this action.",
        ))
    }

    /// Formerly updated an IOC. The endpoint was removed from the cloud;
    /// use the `indicator_update_v1` operation of the IOC management API.
    pub async fn update_ioc(
        &self,
        _parameters: Option<Params>,
        _body: serde_json::Value,
    ) -> Result<ResultEnvelope, DispatchError> {
        Ok(deprecation_result(
            "UpdateIOC has been removed from the cloud. Use the indicator_update_v1 \
             operation of the IOC management API to perform this action.",
        ))
    }

    /// Formerly searched IOCs. The endpoint was removed from the cloud; use
    /// the `indicator_search_v1` operation of the IOC management API.
    pub async fn query_iocs(
        &self,
        _parameters: Option<Params>,
    ) -> Result<ResultEnvelope, DispatchError> {
        Ok(deprecation_result(
            "QueryIOCs has been removed from the cloud. Use the indicator_search_v1 \
             operation of the IOC management API to perform this action.",
        ))
    }
}
