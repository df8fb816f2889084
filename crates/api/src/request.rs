//! Request construction from endpoint descriptors and call arguments.
//!
//! This module turns a descriptor plus caller-supplied arguments into a
//! fully resolved [`RequestEnvelope`]: path placeholders filled, query pairs
//! ordered, body routed, bearer header attached. Every failure here is
//! raised before any network activity.

use falcon_types::{
    CallArgs, CollectionFormat, Credentials, DispatchError, EndpointDescriptor, ParamLocation,
    RequestBody, RequestEnvelope,
};
use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;
use tracing::debug;

/// Bytes escaped when placeholder values are filled into a path. RFC 3986
/// unreserved bytes pass through untouched.
const PATH_VALUE_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builds the outbound envelope for one operation call.
///
/// Parameters are routed by the descriptor's declaration: path parameters
/// fill `{}` placeholders positionally, query parameters become ordered
/// pairs, and the body passes through verbatim. Keys the descriptor does not
/// declare are dropped.
///
/// # Errors
/// Returns [`DispatchError::MissingParameter`] when a required parameter or
/// body is absent, and [`DispatchError::InvalidMethod`] when the descriptor
/// declares a method outside GET/POST/PATCH/DELETE.
pub fn build_request(
    descriptor: &EndpointDescriptor,
    args: &CallArgs,
    credentials: &Credentials,
) -> Result<RequestEnvelope, DispatchError> {
    if !matches!(
        descriptor.method.as_str(),
        "GET" | "POST" | "PATCH" | "DELETE"
    ) {
        return Err(DispatchError::InvalidMethod {
            method: descriptor.method.clone(),
        });
    }

    let path = fill_path_template(descriptor, args)?;
    let query = build_query_pairs(descriptor, args)?;
    let body = select_body(descriptor, args)?;
    note_undeclared_params(descriptor, args);

    let mut headers = IndexMap::new();
    headers.insert(
        "Authorization".to_string(),
        format!("Bearer {}", credentials.access_token),
    );

    Ok(RequestEnvelope {
        method: descriptor.method.clone(),
        url: format!("{}{}", credentials.base_url, path),
        query,
        body,
        headers,
    })
}

/// Fills `{}` placeholders from path parameters in declaration order.
/// Placeholders cannot be left unfilled, so an absent value always fails.
fn fill_path_template(
    descriptor: &EndpointDescriptor,
    args: &CallArgs,
) -> Result<String, DispatchError> {
    let mut path = descriptor.path_template.clone();
    for spec in descriptor.path_params() {
        let value = args.params.get(&spec.name).filter(|v| !v.is_null());
        let Some(value) = value else {
            return Err(DispatchError::missing(&spec.name, ParamLocation::Path));
        };
        path = path.replacen("{}", &render_path_value(value), 1);
    }
    Ok(path)
}

/// Renders a path value and percent-encodes it. Lists are comma-joined
/// before encoding.
fn render_path_value(value: &Value) -> String {
    let text = match value {
        Value::Array(items) => items
            .iter()
            .map(scalar_to_string)
            .collect::<Vec<_>>()
            .join(","),
        other => scalar_to_string(other),
    };
    utf8_percent_encode(&text, PATH_VALUE_ESCAPE).to_string()
}

/// Builds query pairs in the descriptor's declaration order.
///
/// Multi-format arrays repeat the key once per element; csv-format arrays
/// collapse to a single comma-joined pair. A JSON `null` counts as absent.
fn build_query_pairs(
    descriptor: &EndpointDescriptor,
    args: &CallArgs,
) -> Result<Vec<(String, String)>, DispatchError> {
    let mut pairs = Vec::new();
    for spec in descriptor.query_params() {
        let value = args.params.get(&spec.name).filter(|v| !v.is_null());
        let Some(value) = value else {
            if spec.required {
                return Err(DispatchError::missing(&spec.name, ParamLocation::Query));
            }
            continue;
        };
        match value {
            Value::Array(items) => match spec.collection_format {
                CollectionFormat::Multi => {
                    for item in items {
                        pairs.push((spec.name.clone(), scalar_to_string(item)));
                    }
                }
                CollectionFormat::Csv => {
                    if !items.is_empty() {
                        let joined = items
                            .iter()
                            .map(scalar_to_string)
                            .collect::<Vec<_>>()
                            .join(",");
                        pairs.push((spec.name.clone(), joined));
                    }
                }
            },
            other => pairs.push((spec.name.clone(), scalar_to_string(other))),
        }
    }
    Ok(pairs)
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn select_body(
    descriptor: &EndpointDescriptor,
    args: &CallArgs,
) -> Result<Option<RequestBody>, DispatchError> {
    match descriptor.body_param() {
        Some(spec) => {
            if spec.required && args.body.is_none() {
                return Err(DispatchError::missing(&spec.name, ParamLocation::Body));
            }
            Ok(args.body.clone())
        }
        None => {
            if args.body.is_some() {
                debug!(
                    operation = %descriptor.operation_id,
                    "request body dropped; operation declares none"
                );
            }
            Ok(None)
        }
    }
}

fn note_undeclared_params(descriptor: &EndpointDescriptor, args: &CallArgs) {
    let undeclared: Vec<&str> = args
        .params
        .keys()
        .map(String::as_str)
        .filter(|name| !descriptor.parameters.iter().any(|p| p.name == *name))
        .collect();
    if !undeclared.is_empty() {
        debug!(
            operation = %descriptor.operation_id,
            dropped = ?undeclared,
            "undeclared parameters dropped"
        );
    }
}

#[cfg(test)]
mod tests {
    use falcon_types::ParamKind;
    use serde_json::json;

    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("test-token", "https://api.crowdstrike.com")
    }

    fn params(value: Value) -> CallArgs {
        let map = value.as_object().expect("params literal").clone();
        CallArgs::parameters(Some(map))
    }

    #[test]
    fn multi_array_values_repeat_the_query_key() {
        let descriptor = EndpointDescriptor::new(
            "GetDeviceDetails",
            "GET",
            "/devices/entities/devices/v1",
            "",
            "hosts",
        )
        .query_multi("ids", true);

        let envelope = build_request(
            &descriptor,
            &params(json!({"ids": ["abc", "def"]})),
            &credentials(),
        )
        .expect("build envelope");

        assert_eq!(
            envelope.query,
            vec![
                ("ids".to_string(), "abc".to_string()),
                ("ids".to_string(), "def".to_string()),
            ]
        );
    }

    #[test]
    fn csv_array_values_join_with_commas() {
        let descriptor =
            EndpointDescriptor::new("op", "GET", "/path/v1", "", "test").query(
                "fields",
                ParamKind::Array,
                false,
            );

        let envelope = build_request(
            &descriptor,
            &params(json!({"fields": ["a", "b", "c"]})),
            &credentials(),
        )
        .expect("build envelope");

        assert_eq!(envelope.query, vec![("fields".to_string(), "a,b,c".to_string())]);
    }

    #[test]
    fn scalar_values_render_via_display_form() {
        let descriptor = EndpointDescriptor::new("op", "GET", "/path/v1", "", "test")
            .query("limit", ParamKind::Integer, false)
            .query("verbose", ParamKind::Boolean, false);

        let envelope = build_request(
            &descriptor,
            &params(json!({"limit": 42, "verbose": true})),
            &credentials(),
        )
        .expect("build envelope");

        assert_eq!(
            envelope.query,
            vec![
                ("limit".to_string(), "42".to_string()),
                ("verbose".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn missing_required_query_parameter_fails() {
        let descriptor = EndpointDescriptor::new("op", "GET", "/path/v1", "", "test")
            .query_multi("ids", true);

        let err = build_request(&descriptor, &CallArgs::new(), &credentials()).unwrap_err();
        assert_eq!(err, DispatchError::missing("ids", ParamLocation::Query));
    }

    #[test]
    fn null_value_counts_as_absent() {
        let descriptor = EndpointDescriptor::new("op", "GET", "/path/v1", "", "test")
            .query("filter", ParamKind::String, true);

        let err = build_request(
            &descriptor,
            &params(json!({"filter": null})),
            &credentials(),
        )
        .unwrap_err();
        assert_eq!(err, DispatchError::missing("filter", ParamLocation::Query));
    }

    #[test]
    fn optional_parameters_may_be_omitted() {
        let descriptor = EndpointDescriptor::new("op", "GET", "/path/v1", "", "test")
            .query("filter", ParamKind::String, false)
            .query("limit", ParamKind::Integer, false);

        let envelope =
            build_request(&descriptor, &CallArgs::new(), &credentials()).expect("build envelope");
        assert!(envelope.query.is_empty());
    }

    #[test]
    fn declared_order_is_preserved_in_query() {
        let descriptor = EndpointDescriptor::new(
            "RevokeUserRoleIds",
            "DELETE",
            "/user-roles/entities/user-roles/v1",
            "",
            "user_management",
        )
        .query("user_uuid", ParamKind::String, true)
        .query_multi("ids", true);

        // Argument map order deliberately reversed from declaration order.
        let envelope = build_request(
            &descriptor,
            &params(json!({"ids": ["R1", "R2"], "user_uuid": "U1"})),
            &credentials(),
        )
        .expect("build envelope");

        assert_eq!(
            envelope.query,
            vec![
                ("user_uuid".to_string(), "U1".to_string()),
                ("ids".to_string(), "R1".to_string()),
                ("ids".to_string(), "R2".to_string()),
            ]
        );
    }

    #[test]
    fn path_placeholders_fill_in_declaration_order() {
        let descriptor = EndpointDescriptor::new("op", "GET", "/batches/{}/sessions/{}", "", "test")
            .path_param("batch_id")
            .path_param("session_id");

        let envelope = build_request(
            &descriptor,
            &params(json!({"batch_id": "b 1", "session_id": "s/2"})),
            &credentials(),
        )
        .expect("build envelope");

        assert_eq!(
            envelope.url,
            "https://api.crowdstrike.com/batches/b%201/sessions/s%2F2"
        );
    }

    #[test]
    fn path_list_values_comma_join_before_encoding() {
        let descriptor = EndpointDescriptor::new("op", "GET", "/entities/{}", "", "test")
            .path_param("ids");

        let envelope = build_request(
            &descriptor,
            &params(json!({"ids": ["a", "b"]})),
            &credentials(),
        )
        .expect("build envelope");

        assert_eq!(envelope.url, "https://api.crowdstrike.com/entities/a%2Cb");
    }

    #[test]
    fn missing_path_parameter_fails() {
        let descriptor = EndpointDescriptor::new("op", "GET", "/entities/{}", "", "test")
            .path_param("id");

        let err = build_request(&descriptor, &CallArgs::new(), &credentials()).unwrap_err();
        assert_eq!(err, DispatchError::missing("id", ParamLocation::Path));
    }

    #[test]
    fn missing_required_body_fails() {
        let descriptor =
            EndpointDescriptor::new("op", "POST", "/path/v1", "", "test").json_body(true);

        let err = build_request(&descriptor, &CallArgs::new(), &credentials()).unwrap_err();
        assert_eq!(err, DispatchError::missing("body", ParamLocation::Body));
    }

    #[test]
    fn body_passes_through_verbatim() {
        let descriptor =
            EndpointDescriptor::new("op", "POST", "/path/v1", "", "test").json_body(true);
        let body = json!({"ids": ["a"], "action_parameters": [{"name": "tag", "value": "x"}]});

        let envelope = build_request(
            &descriptor,
            &CallArgs::new().with_json(body.clone()),
            &credentials(),
        )
        .expect("build envelope");

        assert_eq!(envelope.body, Some(RequestBody::Json(body)));
    }

    #[test]
    fn undeclared_body_is_dropped() {
        let descriptor = EndpointDescriptor::new("op", "GET", "/path/v1", "", "test");

        let envelope = build_request(
            &descriptor,
            &CallArgs::new().with_json(json!({"ignored": true})),
            &credentials(),
        )
        .expect("build envelope");

        assert!(envelope.body.is_none());
    }

    #[test]
    fn undeclared_parameters_are_dropped() {
        let descriptor = EndpointDescriptor::new("op", "GET", "/path/v1", "", "test")
            .query("filter", ParamKind::String, false);

        let envelope = build_request(
            &descriptor,
            &params(json!({"filter": "name:'x'", "unknown": "y"})),
            &credentials(),
        )
        .expect("build envelope");

        assert_eq!(
            envelope.query,
            vec![("filter".to_string(), "name:'x'".to_string())]
        );
    }

    #[test]
    fn bearer_header_and_base_url_are_attached() {
        let descriptor = EndpointDescriptor::new("op", "GET", "/path/v1", "", "test");

        let envelope =
            build_request(&descriptor, &CallArgs::new(), &credentials()).expect("build envelope");

        assert_eq!(envelope.url, "https://api.crowdstrike.com/path/v1");
        assert_eq!(
            envelope.headers.get("Authorization").map(String::as_str),
            Some("Bearer test-token")
        );
    }

    #[test]
    fn unsupported_method_is_rejected() {
        let descriptor = EndpointDescriptor::new("op", "TRACE", "/path/v1", "", "test");

        let err = build_request(&descriptor, &CallArgs::new(), &credentials()).unwrap_err();
        assert_eq!(
            err,
            DispatchError::InvalidMethod {
                method: "TRACE".to_string()
            }
        );
    }
}
