/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::operation::ServiceMetadata;
use http::Uri;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The region to send requests to.
///
/// The region MUST be specified unless an endpoint override is configured. See
/// http://docs.aws.amazon.com/general/latest/gr/rande.html for information on AWS regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(Cow<'static, str>);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }

    /// Loads the region from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`.
    pub fn from_env() -> Option<Self> {
        region_from(|key| std::env::var(key).ok())
    }
}

fn region_from(env: impl Fn(&str) -> Option<String>) -> Option<Region> {
    ["AWS_REGION", "AWS_DEFAULT_REGION"]
        .iter()
        .filter_map(|key| env(key))
        .find(|value| !value.trim().is_empty())
        .map(Region::new)
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("no region was configured and no endpoint override was set")]
    MissingRegion,
    #[error("`{0}` is not a valid endpoint")]
    InvalidEndpoint(String),
    #[error("endpoint `{0}` must have a scheme and an authority")]
    IncompleteEndpoint(String),
}

/// Client configuration shared by every service.
#[derive(Clone, Debug, Default)]
pub struct Config {
    region: Option<Region>,
    endpoint: Option<Uri>,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Region from the environment, no endpoint override.
    pub fn from_env() -> Self {
        Config {
            region: Region::from_env(),
            endpoint: None,
        }
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Resolves the endpoint requests to `service` are sent to.
    ///
    /// An override wins; otherwise the endpoint is
    /// `https://{endpoint_prefix}.{region}.amazonaws.com/`.
    pub fn endpoint_for(&self, service: &ServiceMetadata) -> Result<Uri, ConfigError> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }
        let region = self.region.as_ref().ok_or(ConfigError::MissingRegion)?;
        let endpoint = format!(
            "https://{}.{}.amazonaws.com/",
            service.endpoint_prefix, region
        );
        endpoint
            .parse()
            .map_err(|_| ConfigError::InvalidEndpoint(endpoint))
    }
}

#[derive(Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint: Option<Uri>,
}

impl Builder {
    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.region = region.into();
        self
    }

    /// Sends every request to `endpoint` instead of the regional default.
    pub fn endpoint(mut self, endpoint: Uri) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Parses and sets an endpoint override.
    pub fn endpoint_str(self, endpoint: &str) -> Result<Self, ConfigError> {
        let uri: Uri = endpoint
            .parse()
            .map_err(|_| ConfigError::InvalidEndpoint(endpoint.to_string()))?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(ConfigError::IncompleteEndpoint(endpoint.to_string()));
        }
        Ok(self.endpoint(uri))
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint: self.endpoint,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{region_from, Config, ConfigError, Region};
    use crate::operation::{JsonVersion, ServiceMetadata};
    use http::Uri;

    const CLOUDTRAIL: ServiceMetadata = ServiceMetadata {
        service_name: "cloudtrail",
        endpoint_prefix: "cloudtrail",
        target_prefix: "com.amazonaws.cloudtrail.v20131101.CloudTrail_20131101",
        json_version: JsonVersion::V1_1,
    };

    #[test]
    fn region_env_precedence() {
        let env = |vars: &'static [(&'static str, &'static str)]| {
            move |key: &str| {
                vars.iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| v.to_string())
            }
        };
        assert_eq!(
            Some(Region::from_static("us-west-2")),
            region_from(env(&[
                ("AWS_DEFAULT_REGION", "eu-west-1"),
                ("AWS_REGION", "us-west-2")
            ]))
        );
        assert_eq!(
            Some(Region::from_static("eu-west-1")),
            region_from(env(&[("AWS_DEFAULT_REGION", "eu-west-1"), ("AWS_REGION", "")]))
        );
        assert_eq!(None, region_from(env(&[])));
    }

    #[test]
    fn default_endpoint() {
        let config = Config::builder()
            .region(Region::new("us-east-1"))
            .build();
        assert_eq!(
            Uri::from_static("https://cloudtrail.us-east-1.amazonaws.com/"),
            config.endpoint_for(&CLOUDTRAIL).unwrap()
        );
    }

    #[test]
    fn endpoint_override() {
        let config = Config::builder()
            .endpoint_str("http://localhost:8000")
            .unwrap()
            .build();
        assert_eq!(
            Uri::from_static("http://localhost:8000"),
            config.endpoint_for(&CLOUDTRAIL).unwrap()
        );
        assert_eq!(
            Err(ConfigError::IncompleteEndpoint("localhost".to_string())),
            Config::builder().endpoint_str("localhost").map(|_| ())
        );
    }

    #[test]
    fn missing_region() {
        assert_eq!(
            Err(ConfigError::MissingRegion),
            Config::default().endpoint_for(&CLOUDTRAIL)
        );
    }
}
