//! Purpose: Client configuration assembled in code or from the environment.
//! Exports: `ClientConfig` and the `ENV_*` variable names.
//! Role: Single place endpoint/timeout/target-prefix inputs are validated.
//! Invariants: The endpoint is an http(s) origin with the path reset to `/`.
//! Invariants: Empty environment values are treated as unset.

use crate::core::error::{ApiResult, Error, ErrorKind};
use crate::core::request::RequestMarshaller;
use std::time::Duration;
use url::Url;

pub const ENV_ENDPOINT: &str = "SAGEMAKER_ENDPOINT";
pub const ENV_TIMEOUT_MS: &str = "SAGEMAKER_TIMEOUT_MS";
pub const ENV_TARGET_PREFIX: &str = "SAGEMAKER_TARGET_PREFIX";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientConfig {
    endpoint: Option<Url>,
    timeout: Option<Duration>,
    target_prefix: Option<String>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from a variable lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| read_var(&lookup, name);
        let mut config = Self::new();
        if let Some(endpoint) = read(ENV_ENDPOINT) {
            config = config.with_endpoint(&endpoint)?;
        }
        if let Some(raw) = read(ENV_TIMEOUT_MS) {
            config = config.with_timeout(parse_timeout_ms(&raw).map_err(|err| {
                err.with_hint(format!("{ENV_TIMEOUT_MS} must be a positive integer"))
            })?);
        }
        if let Some(prefix) = read(ENV_TARGET_PREFIX) {
            config = config.with_target_prefix(prefix.trim());
        }
        Ok(config)
    }

    /// Marshaller honouring only `SAGEMAKER_TARGET_PREFIX`; endpoint and timeout are not read.
    pub fn marshaller_from_env() -> RequestMarshaller {
        Self::marshaller_from_lookup(|name| std::env::var(name).ok())
    }

    pub fn marshaller_from_lookup<F>(lookup: F) -> RequestMarshaller
    where
        F: Fn(&str) -> Option<String>,
    {
        match read_var(&lookup, ENV_TARGET_PREFIX) {
            Some(prefix) => RequestMarshaller::new().with_target_prefix(prefix.trim().to_string()),
            None => RequestMarshaller::new(),
        }
    }

    pub fn with_endpoint(mut self, raw: &str) -> ApiResult<Self> {
        self.endpoint = Some(normalize_endpoint(raw)?);
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_target_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.target_prefix = Some(prefix.into());
        self
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn target_prefix(&self) -> Option<&str> {
        self.target_prefix.as_deref()
    }

    pub fn marshaller(&self) -> RequestMarshaller {
        match &self.target_prefix {
            Some(prefix) => RequestMarshaller::new().with_target_prefix(prefix.clone()),
            None => RequestMarshaller::new(),
        }
    }
}

fn read_var<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.trim().is_empty())
}

pub fn parse_timeout_ms(raw: &str) -> ApiResult<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(Error::new(ErrorKind::Usage).with_message("timeout must be greater than zero")),
        Ok(ms) => Ok(Duration::from_millis(ms)),
        Err(err) => Err(Error::new(ErrorKind::Usage)
            .with_message(format!("invalid timeout: {raw}"))
            .with_source(err)),
    }
}

fn normalize_endpoint(raw: &str) -> ApiResult<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message("invalid endpoint url")
            .with_hint("expected an origin such as https://api.sagemaker.us-east-1.amazonaws.com")
            .with_source(err)
    })?;
    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(
            Error::new(ErrorKind::Usage).with_message("endpoint url must use http or https scheme")
        );
    }
    if url.path() != "/" && !url.path().is_empty() {
        return Err(Error::new(ErrorKind::Usage).with_message("endpoint url must not include a path"));
    }
    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
