//! Static catalog of documented Falcon API operations.
//!
//! Each resource group declares its endpoint descriptors in a module under
//! [`groups`]; the merged catalog is assembled once per process and shared
//! read-only, so lookups are safe from any number of concurrent callers.

mod groups;

use falcon_types::{DispatchError, EndpointDescriptor};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Read-only lookup table of endpoint descriptors keyed by operation id.
#[derive(Debug, Clone, Default)]
pub struct EndpointRegistry {
    by_operation: IndexMap<String, EndpointDescriptor>,
}

impl EndpointRegistry {
    /// Builds a registry from descriptor tables. A duplicate operation id
    /// replaces the earlier entry; the bundled catalog is tested to contain
    /// no duplicates.
    pub fn from_descriptors(descriptors: Vec<EndpointDescriptor>) -> Self {
        let mut by_operation = IndexMap::with_capacity(descriptors.len());
        for descriptor in descriptors {
            by_operation.insert(descriptor.operation_id.clone(), descriptor);
        }
        Self { by_operation }
    }

    /// Resolves an operation id to its descriptor.
    pub fn lookup(&self, operation_id: &str) -> Result<&EndpointDescriptor, DispatchError> {
        self.by_operation
            .get(operation_id)
            .ok_or_else(|| DispatchError::UnknownOperation {
                operation_id: operation_id.to_string(),
            })
    }

    /// Number of cataloged operations.
    pub fn len(&self) -> usize {
        self.by_operation.len()
    }

    /// Whether the catalog holds no operations.
    pub fn is_empty(&self) -> bool {
        self.by_operation.is_empty()
    }

    /// All descriptors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &EndpointDescriptor> {
        self.by_operation.values()
    }

    /// Descriptors belonging to one resource group.
    pub fn group<'a>(
        &'a self,
        resource_group: &'a str,
    ) -> impl Iterator<Item = &'a EndpointDescriptor> {
        self.iter()
            .filter(move |d| d.resource_group == resource_group)
    }
}

static CATALOG: Lazy<EndpointRegistry> = Lazy::new(|| {
    let mut descriptors = Vec::new();
    descriptors.extend(groups::hosts::endpoints());
    descriptors.extend(groups::host_group::endpoints());
    descriptors.extend(groups::incidents::endpoints());
    descriptors.extend(groups::prevention_policy::endpoints());
    descriptors.extend(groups::real_time_response_admin::endpoints());
    descriptors.extend(groups::user_management::endpoints());
    descriptors.extend(groups::iocs::endpoints());
    descriptors.extend(groups::custom_ioa::endpoints());
    EndpointRegistry::from_descriptors(descriptors)
});

/// The bundled catalog covering every supported resource group.
pub fn catalog() -> &'static EndpointRegistry {
    &CATALOG
}
