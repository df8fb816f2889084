//! Falcon SDK: service façades over the cloud security REST API.
//!
//! Construct credentials for a cloud region, build a client, then call
//! operations through the per-collection façades:
//!
//! ```ignore
//! use falcon_sdk::{CloudRegion, Credentials, FalconClient, Hosts, TransportConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::for_region("<bearer token>", CloudRegion::Us1);
//!     let client = FalconClient::new(credentials, TransportConfig::default())?;
//!     let hosts = Hosts::new(client.clone());
//!
//!     let found = hosts.query_devices_by_filter(None).await?;
//!     println!("status: {}", found.status_code);
//!     Ok(())
//! }
//! ```
//!
//! Every façade method returns `Result<ResultEnvelope, DispatchError>`. The
//! `Err` arm is exclusively pre-network argument problems; every transport
//! and HTTP outcome arrives inside the envelope, status code included.

mod dispatch;

pub mod custom_ioa;
pub mod host_group;
pub mod hosts;
pub mod incidents;
pub mod iocs;
pub mod prevention_policy;
pub mod real_time_response_admin;
pub mod user_management;

pub use custom_ioa::CustomIoa;
pub use host_group::HostGroup;
pub use hosts::Hosts;
pub use incidents::Incidents;
pub use iocs::Iocs;
pub use prevention_policy::PreventionPolicy;
pub use real_time_response_admin::RealTimeResponseAdmin;
pub use user_management::UserManagement;

pub use falcon_api::{ClientError, FalconClient, TransportConfig};
pub use falcon_registry::{EndpointRegistry, catalog};
pub use falcon_types::{
    CallArgs, CloudRegion, Credentials, DispatchError, EndpointDescriptor, Params, RequestBody,
    ResultEnvelope,
};
