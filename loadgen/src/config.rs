use std::{env, num::NonZeroUsize, str::FromStr};

use crate::error::{LoadErr, Result};

pub const DEFAULT_TARGET: &str = "http://192.168.100.7:3000/api/v1/camera/getdata";
pub const DEFAULT_CHANNEL: &str = "P3";
pub const DEFAULT_REQUESTS: NonZeroUsize = NonZeroUsize::new(10_000).unwrap();

const TARGET_VAR: &str = "LOADGEN_TARGET";
const REQUESTS_VAR: &str = "LOADGEN_REQUESTS";
const CHANNEL_VAR: &str = "LOADGEN_CHANNEL";
const POLICY_VAR: &str = "LOADGEN_POLICY";
const SEED_VAR: &str = "LOADGEN_SEED";

/// What to do when a request can't be delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the whole run at the first failed request.
    #[default]
    FailFast,
    /// Report the failure and keep going with the next request.
    Continue,
}

impl FromStr for FailurePolicy {
    type Err = LoadErr;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fail_fast" => Ok(Self::FailFast),
            "continue" => Ok(Self::Continue),
            other => Err(LoadErr::InvalidConfig(format!(
                "unknown failure policy: {other}"
            ))),
        }
    }
}

/// Immutable parameters of a load generation run.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    target: String,
    channel: String,
    requests: NonZeroUsize,
    policy: FailurePolicy,
    seed: Option<u64>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET, DEFAULT_REQUESTS)
    }
}

impl LoadConfig {
    /// Creates a new configuration with the default channel, fail-fast policy and no seed.
    ///
    /// # Args
    /// * `target` - The URL every request is posted to.
    /// * `requests` - How many requests the run sends.
    pub fn new(target: impl Into<String>, requests: NonZeroUsize) -> Self {
        Self {
            target: target.into(),
            channel: DEFAULT_CHANNEL.to_string(),
            requests,
            policy: FailurePolicy::default(),
            seed: None,
        }
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, falling back to the defaults for every missing key.
    ///
    /// # Errors
    /// `InvalidConfig` if a present value can't be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(target) = lookup(TARGET_VAR) {
            if target.trim().is_empty() {
                return Err(LoadErr::InvalidConfig(format!("{TARGET_VAR} is empty")));
            }
            config.target = target;
        }

        if let Some(requests) = lookup(REQUESTS_VAR) {
            config.requests = requests.trim().parse().map_err(|e| {
                LoadErr::InvalidConfig(format!("{REQUESTS_VAR}={requests:?}: {e}"))
            })?;
        }

        if let Some(channel) = lookup(CHANNEL_VAR) {
            config.channel = channel;
        }

        if let Some(policy) = lookup(POLICY_VAR) {
            config.policy = policy.trim().parse()?;
        }

        if let Some(seed) = lookup(SEED_VAR) {
            let seed = seed
                .trim()
                .parse()
                .map_err(|e| LoadErr::InvalidConfig(format!("{SEED_VAR}={seed:?}: {e}")))?;
            config.seed = Some(seed);
        }

        Ok(config)
    }

    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    #[inline]
    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    #[inline]
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
