//! Host (device) management operations.

use falcon_types::{EndpointDescriptor, ParamKind};

const GROUP: &str = "hosts";

pub(crate) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "PerformActionV2",
            "POST",
            "/devices/entities/devices-actions/v2",
            "Take various actions on the hosts in your environment, such as \
             containing or lifting containment",
            GROUP,
        )
        .query("action_name", ParamKind::String, true)
        .json_body(true),
        EndpointDescriptor::new(
            "GetDeviceDetails",
            "GET",
            "/devices/entities/devices/v1",
            "Get details on one or more hosts by providing agent IDs (AID)",
            GROUP,
        )
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "QueryDevicesByFilterScroll",
            "GET",
            "/devices/queries/devices-scroll/v1",
            "Search for hosts in your environment with continuous pagination \
             capability",
            GROUP,
        )
        .query("offset", ParamKind::String, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false)
        .query("filter", ParamKind::String, false),
        EndpointDescriptor::new(
            "QueryDevicesByFilter",
            "GET",
            "/devices/queries/devices/v1",
            "Search for hosts in your environment by platform, hostname, IP, \
             and other criteria",
            GROUP,
        )
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false)
        .query("filter", ParamKind::String, false),
    ]
}
