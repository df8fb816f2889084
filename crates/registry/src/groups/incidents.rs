//! Incident and CrowdScore operations.

use falcon_types::{EndpointDescriptor, ParamKind};

const GROUP: &str = "incidents";

pub(crate) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "CrowdScore",
            "GET",
            "/incidents/combined/crowdscores/v1",
            "Query environment wide CrowdScore and return the entity data",
            GROUP,
        )
        .query("filter", ParamKind::String, false)
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
        EndpointDescriptor::new(
            "GetBehaviors",
            "POST",
            "/incidents/entities/behaviors/GET/v1",
            "Get details on behaviors by providing behavior IDs",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "PerformIncidentAction",
            "POST",
            "/incidents/entities/incident-actions/v1",
            "Perform a set of actions on one or more incidents, such as \
             adding tags or changing status",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "GetIncidents",
            "POST",
            "/incidents/entities/incidents/GET/v1",
            "Get details on incidents by providing incident IDs",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "QueryBehaviors",
            "GET",
            "/incidents/queries/behaviors/v1",
            "Search for behaviors by providing an FQL filter, sorting, and \
             paging details",
            GROUP,
        )
        .query("filter", ParamKind::String, false)
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
        EndpointDescriptor::new(
            "QueryIncidents",
            "GET",
            "/incidents/queries/incidents/v1",
            "Search for incidents by providing an FQL filter, sorting, and \
             paging details",
            GROUP,
        )
        .query("filter", ParamKind::String, false)
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
    ]
}
