//! Indicators of compromise operations.
//!
//! Only the operations still served by the cloud are cataloged; the removed
//! indicator CRUD endpoints are answered directly by the façade layer.

use falcon_types::{EndpointDescriptor, ParamKind};

const GROUP: &str = "iocs";

pub(crate) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "DevicesCount",
            "GET",
            "/indicators/aggregates/devices-count/v1",
            "Number of hosts in your customer account that have observed a \
             given custom IOC",
            GROUP,
        )
        .query("type", ParamKind::String, true)
        .query("value", ParamKind::String, true),
        EndpointDescriptor::new(
            "DevicesRanOn",
            "GET",
            "/indicators/queries/devices/v1",
            "Find hosts that have observed a given custom IOC",
            GROUP,
        )
        .query("type", ParamKind::String, true)
        .query("value", ParamKind::String, true)
        .query("limit", ParamKind::Integer, false)
        .query("offset", ParamKind::String, false),
        EndpointDescriptor::new(
            "ProcessesRanOn",
            "GET",
            "/indicators/queries/processes/v1",
            "Search for processes associated with a custom IOC",
            GROUP,
        )
        .query("type", ParamKind::String, true)
        .query("value", ParamKind::String, true)
        .query("device_id", ParamKind::String, true)
        .query("limit", ParamKind::Integer, false)
        .query("offset", ParamKind::String, false),
        EndpointDescriptor::new(
            "entities_processes",
            "GET",
            "/processes/entities/processes/v1",
            "For the provided ProcessID retrieve the process details",
            GROUP,
        )
        .query_multi("ids", true),
    ]
}
