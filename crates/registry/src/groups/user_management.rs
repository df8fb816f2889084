//! User and role management operations.

use falcon_types::{EndpointDescriptor, ParamKind};

const GROUP: &str = "user_management";

pub(crate) fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "GetRoles",
            "GET",
            "/user-roles/entities/user-roles/v1",
            "Get info about a role",
            GROUP,
        )
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "GrantUserRoleIds",
            "POST",
            "/user-roles/entities/user-roles/v1",
            "Assign one or more roles to a user",
            GROUP,
        )
        .query("user_uuid", ParamKind::String, true)
        .json_body(true),
        EndpointDescriptor::new(
            "RevokeUserRoleIds",
            "DELETE",
            "/user-roles/entities/user-roles/v1",
            "Revoke one or more roles from a user",
            GROUP,
        )
        .query("user_uuid", ParamKind::String, true)
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "GetAvailableRoleIds",
            "GET",
            "/user-roles/queries/user-role-ids-by-cid/v1",
            "Show role IDs for all roles available in your customer account",
            GROUP,
        ),
        EndpointDescriptor::new(
            "GetUserRoleIds",
            "GET",
            "/user-roles/queries/user-role-ids-by-user-uuid/v1",
            "Show role IDs of roles assigned to a user",
            GROUP,
        )
        .query("user_uuid", ParamKind::String, true),
        EndpointDescriptor::new(
            "RetrieveUser",
            "GET",
            "/users/entities/users/v1",
            "Get info about a user",
            GROUP,
        )
        .query_multi("ids", true),
        EndpointDescriptor::new(
            "CreateUser",
            "POST",
            "/users/entities/users/v1",
            "Create a new user; after creating, assign one or more roles",
            GROUP,
        )
        .json_body(true),
        EndpointDescriptor::new(
            "UpdateUser",
            "PATCH",
            "/users/entities/users/v1",
            "Modify an existing user's first or last name",
            GROUP,
        )
        .query("user_uuid", ParamKind::String, true)
        .json_body(true),
        EndpointDescriptor::new(
            "DeleteUser",
            "DELETE",
            "/users/entities/users/v1",
            "Delete a user permanently",
            GROUP,
        )
        .query("user_uuid", ParamKind::String, true),
        EndpointDescriptor::new(
            "RetrieveEmailsByCID",
            "GET",
            "/users/queries/emails-by-cid/v1",
            "List the usernames (usually an email address) for all users in \
             your customer account",
            GROUP,
        ),
        EndpointDescriptor::new(
            "RetrieveUserUUIDsByCID",
            "GET",
            "/users/queries/user-uuids-by-cid/v1",
            "List user IDs for all users in your customer account",
            GROUP,
        ),
        EndpointDescriptor::new(
            "RetrieveUserUUID",
            "GET",
            "/users/queries/user-uuids-by-email/v1",
            "Get a user's ID by providing a username (usually an email \
             address)",
            GROUP,
        )
        .query_multi("uid", true),
    ]
}
