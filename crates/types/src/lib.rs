//! Shared type definitions for the Falcon SDK: endpoint descriptors, call
//! arguments, request/result envelopes, credentials, and caller-facing
//! errors.

use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub mod endpoint;
pub mod envelope;
pub mod error;

pub use endpoint::{
    CollectionFormat, EndpointDescriptor, ParamKind, ParamLocation, ParameterSpec,
};
pub use envelope::{CallArgs, Params, RequestBody, RequestEnvelope, ResultEnvelope};
pub use error::DispatchError;

/// Documented Falcon cloud regions and their API hosts.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum CloudRegion {
    /// US-1, the default commercial cloud.
    #[default]
    #[serde(rename = "us-1")]
    Us1,
    /// US-2 commercial cloud.
    #[serde(rename = "us-2")]
    Us2,
    /// EU-1 commercial cloud.
    #[serde(rename = "eu-1")]
    Eu1,
    /// US GovCloud.
    #[serde(rename = "us-gov-1")]
    UsGov1,
}

impl CloudRegion {
    /// API host for this region.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Us1 => "https://api.crowdstrike.com",
            Self::Us2 => "https://api.us-2.crowdstrike.com",
            Self::Eu1 => "https://api.eu-1.crowdstrike.com",
            Self::UsGov1 => "https://api.laggar.gcw.crowdstrike.com",
        }
    }

    /// Short region slug as used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us1 => "us-1",
            Self::Us2 => "us-2",
            Self::Eu1 => "eu-1",
            Self::UsGov1 => "us-gov-1",
        }
    }
}

impl fmt::Display for CloudRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudRegion {
    type Err = ParseCloudRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "us-1" => Ok(Self::Us1),
            "us-2" => Ok(Self::Us2),
            "eu-1" => Ok(Self::Eu1),
            "us-gov-1" => Ok(Self::UsGov1),
            _ => Err(ParseCloudRegionError),
        }
    }
}

/// Error returned when a region slug is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCloudRegionError;

impl fmt::Display for ParseCloudRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid cloud region; expected 'us-1', 'us-2', 'eu-1' or 'us-gov-1'")
    }
}

impl Error for ParseCloudRegionError {}

/// Bearer credentials plus the cloud endpoint they are valid for.
///
/// Credentials are supplied fully formed at client construction and held for
/// the client's lifetime; the SDK never acquires or refreshes tokens.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// OAuth2 bearer token, used verbatim in the Authorization header.
    pub access_token: String,
    /// API base URL without a trailing slash.
    pub base_url: String,
}

impl Credentials {
    /// Creates credentials for an explicit base URL. A trailing slash is
    /// trimmed so path concatenation stays uniform.
    pub fn new(access_token: &str, base_url: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates credentials for a documented cloud region.
    pub fn for_region(access_token: &str, region: CloudRegion) -> Self {
        Self::new(access_token, region.base_url())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
