//! Prevention policy management operations.

use falcon_types::{EndpointDescriptor, ParamKind};

const GROUP: &str = "prevention_policy";

pub(crate) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "queryCombinedPreventionPolicyMembers",
            "GET",
            "/policy/combined/prevention-members/v1",
            "Search for members of a Prevention Policy and return full host \
             details",
            GROUP,
        )
        .query("id", ParamKind::String, false)
        .query("filter", ParamKind::String, false)
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
        EndpointDescriptor::new(
            "queryCombinedPreventionPolicies",
            "GET",
            "/policy/combined/prevention/v1",
            "Search for Prevention Policies and return full policy details",
            GROUP,
        )
        .query("filter", ParamKind::String, false)
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
        EndpointDescriptor::new(
            "performPreventionPoliciesAction",
            "POST",
            "/policy/entities/prevention-actions/v1",
            "Perform the specified action on the Prevention Policies \
             specified in the request",
            GROUP,
        )
        .query("action_name", ParamKind::String, true)
        .json_body(true),
        EndpointDescriptor::new(
            "setPreventionPoliciesPrecedence",
            "POST",
            "/policy/entities/prevention-precedence/v1",
            "Set the precedence of Prevention Policies based on the order of \
             IDs specified in the request",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "getPreventionPolicies",
            "GET",
            "/policy/entities/prevention/v1",
            "Retrieve a set of Prevention Policies by specifying their IDs",
            GROUP,
        )
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "createPreventionPolicies",
            "POST",
            "/policy/entities/prevention/v1",
            "Create Prevention Policies by specifying details about the \
             policy to create",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "deletePreventionPolicies",
            "DELETE",
            "/policy/entities/prevention/v1",
            "Delete a set of Prevention Policies by specifying their IDs",
            GROUP,
        )
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "updatePreventionPolicies",
            "PATCH",
            "/policy/entities/prevention/v1",
            "Update Prevention Policies by specifying the ID of the policy \
             and details to update",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "queryPreventionPolicyMembers",
            "GET",
            "/policy/queries/prevention-members/v1",
            "Search for members of a Prevention Policy and return a set of \
             Agent IDs",
            GROUP,
        )
        .query("id", ParamKind::String, false)
        .query("filter", ParamKind::String, false)
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
        EndpointDescriptor::new(
            "queryPreventionPolicies",
            "GET",
            "/policy/queries/prevention/v1",
            "Search for Prevention Policies and return a set of policy IDs",
            GROUP,
        )
        .query("filter", ParamKind::String, false)
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
    ]
}
