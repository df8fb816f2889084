//! Real Time Response administrator operations.

use falcon_types::{EndpointDescriptor, ParamKind};

const GROUP: &str = "real_time_response_admin";

pub(crate) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "BatchAdminCmd",
            "POST",
            "/real-time-response/combined/batch-admin-command/v1",
            "Batch executes an RTR administrator command across the hosts \
             mapped to the given batch ID",
            GROUP,
        )
        .query("timeout", ParamKind::Integer, false)
        .query("timeout_duration", ParamKind::String, false)
        .json_body(true),
        EndpointDescriptor::new(
            "RTR_CheckAdminCommandStatus",
            "GET",
            "/real-time-response/entities/admin-command/v1",
            "Get status of an executed RTR administrator command on a single \
             host",
            GROUP,
        )
        .query("cloud_request_id", ParamKind::String, true)
        .query("sequence_id", ParamKind::Integer, true),
        EndpointDescriptor::new(
            "RTR_ExecuteAdminCommand",
            "POST",
            "/real-time-response/entities/admin-command/v1",
            "Execute an RTR administrator command on a single host",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "RTR_GetPut_Files",
            "GET",
            "/real-time-response/entities/put-files/v1",
            "Get put-files based on the IDs given, as used for the RTR put \
             command",
            GROUP,
        )
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "RTR_CreatePut_Files",
            "POST",
            "/real-time-response/entities/put-files/v1",
            "Upload a new put-file to use for the RTR put command",
            GROUP,
        )
        .raw_body(true),
        EndpointDescriptor::new(
            "RTR_DeletePut_Files",
            "DELETE",
            "/real-time-response/entities/put-files/v1",
            "Delete a put-file based on the ID given; one file at a time",
            GROUP,
        )
        .query("ids", ParamKind::String, true),
        EndpointDescriptor::new(
            "RTR_GetScripts",
            "GET",
            "/real-time-response/entities/scripts/v1",
            "Get custom-scripts based on the IDs given, as used for the RTR \
             runscript command",
            GROUP,
        )
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "RTR_CreateScripts",
            "POST",
            "/real-time-response/entities/scripts/v1",
            "Upload a new custom-script to use for the RTR runscript command",
            GROUP,
        )
        .raw_body(true),
        EndpointDescriptor::new(
            "RTR_DeleteScripts",
            "DELETE",
            "/real-time-response/entities/scripts/v1",
            "Delete a custom-script based on the ID given; one script at a \
             time",
            GROUP,
        )
        .query("ids", ParamKind::String, true),
        EndpointDescriptor::new(
            "RTR_UpdateScripts",
            "PATCH",
            "/real-time-response/entities/scripts/v1",
            "Upload a new script to replace an existing one",
            GROUP,
        )
        .raw_body(true),
        EndpointDescriptor::new(
            "RTR_ListPut_Files",
            "GET",
            "/real-time-response/queries/put-files/v1",
            "Get a list of put-file IDs that are available to the user for \
             the put command",
            GROUP,
        )
        .query("filter", ParamKind::String, false)
        .query("offset", ParamKind::String, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
        EndpointDescriptor::new(
            "RTR_ListScripts",
            "GET",
            "/real-time-response/queries/scripts/v1",
            "Get a list of custom-script IDs that are available to the user \
             for the runscript command",
            GROUP,
        )
        .query("filter", ParamKind::String, false)
        .query("offset", ParamKind::String, false)
        .query("limit", ParamKind::Integer, false)
        .query("sort", ParamKind::String, false),
    ]
}
