//! Shared dispatch path for the service façades.

use falcon_api::FalconClient;
use falcon_registry::catalog;
use falcon_types::{CallArgs, DispatchError, ResultEnvelope};
use indexmap::IndexMap;
use serde_json::json;

/// Resolves an operation id against the catalog and executes it.
///
/// Every façade method funnels through here; none of them carries its own
/// request or response logic.
pub(crate) async fn dispatch(
    client: &FalconClient,
    operation_id: &str,
    args: CallArgs,
) -> Result<ResultEnvelope, DispatchError> {
    let descriptor = catalog().lookup(operation_id)?;
    client.execute(descriptor, &args).await
}

/// Canned envelope for operations the cloud no longer serves.
///
/// Shaped like an API error response (status 500, `errors` list, empty
/// `resources`) so callers keep a single inspection path.
pub(crate) fn deprecation_result(message: &str) -> ResultEnvelope {
    ResultEnvelope::new(
        500,
        IndexMap::new(),
        json!({
            "errors": [{"message": message}],
            "resources": []
        }),
    )
}
