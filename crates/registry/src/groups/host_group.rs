//! Host group management operations.

use falcon_types::{EndpointDescriptor, ParamKind};

const GROUP: &str = "host_group";

pub(crate) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "queryCombinedGroupMembers",
            "GET",
            "/devices/combined/host-group-members/v1",
            "Search for members of a Host Group and return full host details",
            GROUP,
        )
        .query("id", ParamKind::String, false)
        .query("filter", ParamKind::String, false)
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
        EndpointDescriptor::new(
            "queryCombinedHostGroups",
            "GET",
            "/devices/combined/host-groups/v1",
            "Search for Host Groups and return full group details",
            GROUP,
        )
        .query("filter", ParamKind::String, false)
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
        EndpointDescriptor::new(
            "performGroupAction",
            "POST",
            "/devices/entities/host-group-actions/v1",
            "Perform the specified action on the Host Groups specified in \
             the request",
            GROUP,
        )
        .query("action_name", ParamKind::String, true)
        .json_body(true),
        EndpointDescriptor::new(
            "getHostGroups",
            "GET",
            "/devices/entities/host-groups/v1",
            "Retrieve a set of Host Groups by specifying their IDs",
            GROUP,
        )
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "createHostGroups",
            "POST",
            "/devices/entities/host-groups/v1",
            "Create Host Groups by specifying details about the group to \
             create",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "deleteHostGroups",
            "DELETE",
            "/devices/entities/host-groups/v1",
            "Delete a set of Host Groups by specifying their IDs",
            GROUP,
        )
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "updateHostGroups",
            "PATCH",
            "/devices/entities/host-groups/v1",
            "Update Host Groups by specifying the ID of the group and \
             details to update",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "queryGroupMembers",
            "GET",
            "/devices/queries/host-group-members/v1",
            "Search for members of a Host Group and return a set of Agent IDs",
            GROUP,
        )
        .query("id", ParamKind::String, false)
        .query("filter", ParamKind::String, false)
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
        EndpointDescriptor::new(
            "queryHostGroups",
            "GET",
            "/devices/queries/host-groups/v1",
            "Search for Host Groups and return a set of Host Group IDs",
            GROUP,
        )
        .query("filter", ParamKind::String, false)
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
    ]
}
