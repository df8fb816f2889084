//! Static descriptions of documented API operations.
//!
//! An [`EndpointDescriptor`] is the single source of truth for how one
//! operation is called: HTTP method, path template, and the parameters it
//! accepts. Descriptors are declared once in the endpoint catalog and never
//! mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a declared parameter is placed in the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// Appended to the URL query string.
    Query,
    /// Substituted into a `{}` placeholder of the path template.
    Path,
    /// Sent as the request body.
    Body,
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Query => "query",
            Self::Path => "path",
            Self::Body => "body",
        })
    }
}

/// Declared value shape of a parameter, as documented by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// Plain string value.
    #[default]
    String,
    /// Integer value (offsets, limits).
    Integer,
    /// Boolean value.
    Boolean,
    /// List of values; serialization is governed by [`CollectionFormat`].
    Array,
    /// Structured JSON payload (body parameters only).
    Json,
    /// Opaque byte payload for upload operations (body parameters only).
    Binary,
}

/// How an array-valued query parameter is rendered on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionFormat {
    /// Single pair with comma-joined values (`ids=a,b`).
    #[default]
    Csv,
    /// Repeated pairs, one per element (`ids=a&ids=b`).
    Multi,
}

/// Declares one accepted parameter of an API operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Name callers use in the argument map (for body parameters, `body`).
    pub name: String,
    /// Request location this parameter is routed to.
    pub location: ParamLocation,
    /// Whether omitting this parameter fails the call before any network use.
    pub required: bool,
    /// Declared value shape.
    #[serde(default)]
    pub kind: ParamKind,
    /// Array rendering style; only meaningful for query arrays.
    #[serde(default)]
    pub collection_format: CollectionFormat,
}

/// Describes one documented API operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Stable operation identifier, unique across the whole catalog.
    pub operation_id: String,
    /// HTTP method (GET, POST, PATCH, DELETE).
    pub method: String,
    /// URL path, possibly containing positional `{}` placeholders.
    pub path_template: String,
    /// Short human-readable summary from the API documentation.
    #[serde(default)]
    pub description: String,
    /// Resource group the operation belongs to (e.g. `hosts`).
    #[serde(default)]
    pub resource_group: String,
    /// Accepted parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

impl EndpointDescriptor {
    /// Creates a descriptor with no parameters; chain the builder methods to
    /// declare them in wire order.
    pub fn new(
        operation_id: &str,
        method: &str,
        path_template: &str,
        description: &str,
        resource_group: &str,
    ) -> Self {
        Self {
            operation_id: operation_id.to_string(),
            method: method.to_string(),
            path_template: path_template.to_string(),
            description: description.to_string(),
            resource_group: resource_group.to_string(),
            parameters: Vec::new(),
        }
    }

    /// Declares a scalar query parameter.
    pub fn query(mut self, name: &str, kind: ParamKind, required: bool) -> Self {
        self.parameters.push(ParameterSpec {
            name: name.to_string(),
            location: ParamLocation::Query,
            required,
            kind,
            collection_format: CollectionFormat::Csv,
        });
        self
    }

    /// Declares an array query parameter serialized as repeated pairs.
    pub fn query_multi(mut self, name: &str, required: bool) -> Self {
        self.parameters.push(ParameterSpec {
            name: name.to_string(),
            location: ParamLocation::Query,
            required,
            kind: ParamKind::Array,
            collection_format: CollectionFormat::Multi,
        });
        self
    }

    /// Declares a path parameter filling the next `{}` placeholder.
    /// Path parameters are always required.
    pub fn path_param(mut self, name: &str) -> Self {
        self.parameters.push(ParameterSpec {
            name: name.to_string(),
            location: ParamLocation::Path,
            required: true,
            kind: ParamKind::String,
            collection_format: CollectionFormat::Csv,
        });
        self
    }

    /// Declares a structured JSON body.
    pub fn json_body(mut self, required: bool) -> Self {
        self.parameters.push(ParameterSpec {
            name: "body".to_string(),
            location: ParamLocation::Body,
            required,
            kind: ParamKind::Json,
            collection_format: CollectionFormat::Csv,
        });
        self
    }

    /// Declares an opaque byte body for upload operations.
    pub fn raw_body(mut self, required: bool) -> Self {
        self.parameters.push(ParameterSpec {
            name: "body".to_string(),
            location: ParamLocation::Body,
            required,
            kind: ParamKind::Binary,
            collection_format: CollectionFormat::Csv,
        });
        self
    }

    /// The body parameter, if the operation declares one.
    pub fn body_param(&self) -> Option<&ParameterSpec> {
        self.parameters
            .iter()
            .find(|p| p.location == ParamLocation::Body)
    }

    /// Path parameters in declaration order.
    pub fn path_params(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters
            .iter()
            .filter(|p| p.location == ParamLocation::Path)
    }

    /// Query parameters in declaration order.
    pub fn query_params(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters
            .iter()
            .filter(|p| p.location == ParamLocation::Query)
    }
}
