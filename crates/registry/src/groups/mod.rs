//! Per-resource-group endpoint tables.
//!
//! Paths and parameter schemas mirror the vendor's published API
//! documentation. Tables are data only; request semantics live in the
//! builder.

pub(crate) mod custom_ioa;
pub(crate) mod host_group;
pub(crate) mod hosts;
pub(crate) mod incidents;
pub(crate) mod iocs;
pub(crate) mod prevention_policy;
pub(crate) mod real_time_response_admin;
pub(crate) mod user_management;
