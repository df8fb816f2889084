//! Custom indicator-of-attack rule operations.
//!
//! Several operation ids carry a `Mixin0` suffix in the published API; the
//! façade exposes clean method names and maps to these ids.

use falcon_types::{EndpointDescriptor, ParamKind};

const GROUP: &str = "custom_ioa";

pub(crate) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "get_patterns",
            "GET",
            "/ioarules/entities/pattern-severities/v1",
            "Get pattern severities by ID",
            GROUP,
        )
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "get_platformsMixin0",
            "GET",
            "/ioarules/entities/platforms/v1",
            "Get platforms by ID",
            GROUP,
        )
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "get_rule_groupsMixin0",
            "GET",
            "/ioarules/entities/rule-groups/v1",
            "Get rule groups by ID",
            GROUP,
        )
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "create_rule_groupMixin0",
            "POST",
            "/ioarules/entities/rule-groups/v1",
            "Create a rule group for a platform with a name and an optional \
             description",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "delete_rule_groupsMixin0",
            "DELETE",
            "/ioarules/entities/rule-groups/v1",
            "Delete rule groups by ID",
            GROUP,
        )
        .query_multi("ids", true)
        .query("comment", ParamKind::String, false),
        EndpointDescriptor::new(
            "update_rule_groupMixin0",
            "PATCH",
            "/ioarules/entities/rule-groups/v1",
            "Update a rule group's name, description, or enabled state",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "get_rule_types",
            "GET",
            "/ioarules/entities/rule-types/v1",
            "Get rule types by ID",
            GROUP,
        )
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "get_rules_get",
            "POST",
            "/ioarules/entities/rules/GET/v1",
            "Get rules by ID and optionally version, in the format \
             ID[:version]",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "get_rulesMixin0",
            "GET",
            "/ioarules/entities/rules/v1",
            "Get rules by ID and optionally version; the number of IDs is \
             constrained by URL size",
            GROUP,
        )
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "create_rule",
            "POST",
            "/ioarules/entities/rules/v1",
            "Create a rule within a rule group",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "delete_rules",
            "DELETE",
            "/ioarules/entities/rules/v1",
            "Delete rules from a rule group by ID",
            GROUP,
        )
        .query("rule_group_id", ParamKind::String, true)
        .query_multi("ids", true)
        .query("comment", ParamKind::String, false),
        EndpointDescriptor::new(
            "update_rules",
            "PATCH",
            "/ioarules/entities/rules/v1",
            "Update rules within a rule group",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "validate",
            "POST",
            "/ioarules/entities/rules/validate/v1",
            "Validate field values and check for matches if a test string is \
             provided",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "query_patterns",
            "GET",
            "/ioarules/queries/pattern-severities/v1",
            "Get all pattern severity IDs",
            GROUP,
        )
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false),
        EndpointDescriptor::new(
            "query_platformsMixin0",
            "GET",
            "/ioarules/queries/platforms/v1",
            "Get all platform IDs",
            GROUP,
        )
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false),
        EndpointDescriptor::new(
            "query_rule_groups_full",
            "GET",
            "/ioarules/queries/rule-groups-full/v1",
            "Find all rule groups matching the query with optional filter",
            GROUP,
        )
        .query("filter", ParamKind::String, false)
        .query("q", ParamKind::String, false)
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
        EndpointDescriptor::new(
            "query_rule_groupsMixin0",
            "GET",
            "/ioarules/queries/rule-groups/v1",
            "Find all rule group IDs matching the query with optional filter",
            GROUP,
        )
        .query("filter", ParamKind::String, false)
        .query("q", ParamKind::String, false)
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
        EndpointDescriptor::new(
            "query_rule_types",
            "GET",
            "/ioarules/queries/rule-types/v1",
            "Get all rule type IDs",
            GROUP,
        )
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false),
        EndpointDescriptor::new(
            "query_rulesMixin0",
            "GET",
            "/ioarules/queries/rules/v1",
            "Find all rule IDs matching the query with optional filter",
            GROUP,
        )
        .query("filter", ParamKind::String, false)
        .query("q", ParamKind::String, false)
        .query("offset", ParamKind::Integer, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
    ]
}
