//! Configuration for ChainedSequence operations
//!
//! The only knob is the forwarding mode: the calling convention used for
//! optional arguments whose "explicitly null" form is not universally
//! accepted. It is resolved once per process from the environment, or
//! installed by the application before first use.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::{ChainError, ChainResult};

/// Environment variable consulted by [`ChainConfig::from_env`].
pub const FORWARDING_ENV_VAR: &str = "CHAINED_SEQUENCE_FORWARDING";

/// How optional arguments are forwarded to the underlying primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardingMode {
    /// Optional arguments may only be omitted; an explicit null key and an
    /// `accumulate` initial value are rejected.
    Legacy,
    /// An explicit null key means identity; `accumulate` takes an initial value.
    #[default]
    Modern,
}

impl ForwardingMode {
    /// Resolve what an explicitly null `key` means for `operation`.
    ///
    /// `Ok(())` means "compare the elements themselves".
    pub fn check_null_key(self, operation: &str) -> ChainResult<()> {
        match self {
            ForwardingMode::Modern => Ok(()),
            ForwardingMode::Legacy => Err(ChainError::invalid(format!(
                "{}() key must be omitted rather than null in legacy forwarding mode",
                operation
            ))),
        }
    }

    /// Check whether `accumulate` may be given an initial value.
    pub fn check_initial(self, operation: &str) -> ChainResult<()> {
        match self {
            ForwardingMode::Modern => Ok(()),
            ForwardingMode::Legacy => Err(ChainError::invalid(format!(
                "{}() does not accept an initial value in legacy forwarding mode",
                operation
            ))),
        }
    }
}

impl fmt::Display for ForwardingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForwardingMode::Legacy => write!(f, "legacy"),
            ForwardingMode::Modern => write!(f, "modern"),
        }
    }
}

impl FromStr for ForwardingMode {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(ForwardingMode::Legacy),
            "modern" => Ok(ForwardingMode::Modern),
            other => Err(ChainError::UnsupportedEnvironment(format!(
                "Expected forwarding mode 'legacy' or 'modern'; got '{}'",
                other
            ))),
        }
    }
}

/// Process-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default)]
    pub forwarding: ForwardingMode,
}

static GLOBAL_CONFIG: OnceCell<ChainResult<ChainConfig>> = OnceCell::new();

impl ChainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the forwarding mode
    pub fn forwarding(mut self, mode: ForwardingMode) -> Self {
        self.forwarding = mode;
        self
    }

    /// Read the configuration from `CHAINED_SEQUENCE_FORWARDING`.
    ///
    /// An unset variable selects the modern convention; any other value
    /// than `legacy` or `modern` is an unsupported environment.
    pub fn from_env() -> ChainResult<Self> {
        match std::env::var(FORWARDING_ENV_VAR) {
            Ok(value) => match value.parse::<ForwardingMode>() {
                Ok(mode) => {
                    log::debug!("Resolved forwarding mode '{}' from {}", mode, FORWARDING_ENV_VAR);
                    Ok(Self::new().forwarding(mode))
                }
                Err(e) => {
                    log::warn!("Unsupported {} value: {}", FORWARDING_ENV_VAR, e);
                    Err(e)
                }
            },
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(ChainError::UnsupportedEnvironment(format!(
                "{} is not readable: {}",
                FORWARDING_ENV_VAR, e
            ))),
        }
    }

    /// Install the process-wide configuration.
    ///
    /// Fails, returning the rejected configuration, once the configuration
    /// has been resolved.
    pub fn install(config: ChainConfig) -> Result<(), ChainConfig> {
        let mode = config.forwarding;
        GLOBAL_CONFIG
            .set(Ok(config))
            .map_err(|rejected| rejected.unwrap_or_default())?;
        log::debug!("Installed forwarding mode '{}'", mode);
        Ok(())
    }

    /// The process-wide configuration, resolved from the environment on
    /// first use.
    pub fn global() -> ChainResult<&'static ChainConfig> {
        GLOBAL_CONFIG.get_or_init(Self::from_env).as_ref().map_err(Clone::clone)
    }
}

/// The process-wide forwarding mode.
pub fn forwarding_mode() -> ChainResult<ForwardingMode> {
    ChainConfig::global().map(|config| config.forwarding)
}
