//! # Engine Configuration
//!
//! Defaults follow the protocol: MWM 14, security 2, every core for the
//! searches, Kerl for key derivation.
//!
//! ## Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `ENTANGLED_MWM` | `pow.mwm` |
//! | `ENTANGLED_POW_THREADS` | `pow.threads` |
//! | `ENTANGLED_MINING_NPROCS` | `mining.nprocs` |
//! | `ENTANGLED_SECURITY` | `signing.security` and `mining.security` |
//! | `ENTANGLED_SPONGE` | `signing.sponge` |

use crate::error::Result;
use en_02_proof_of_work::PowConfig;
use en_03_bundle_miner::MiningConfig;
use serde::Deserialize;
use shared_crypto::SpongeKind;
use shared_types::SecurityLevel;
use std::str::FromStr;
use tracing::{info, warn};

/// Complete engine configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Proof-of-work configuration.
    pub pow: PowConfig,
    /// Key derivation configuration.
    pub signing: SigningConfig,
    /// Bundle miner configuration.
    pub mining: MiningConfig,
}

/// Key derivation configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SigningConfig {
    /// Sponge used for subseeds, keys, digests and addresses.
    pub sponge: SpongeKind,
    /// Security level used when a caller does not pass one.
    pub security: SecurityLevel,
}

impl EngineConfig {
    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.pow.validate()?;
        Ok(())
    }

    /// Defaults overridden from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden through `lookup`. Unparseable values are logged
    /// and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(mwm) = parse_var::<usize, _>(&lookup, "ENTANGLED_MWM") {
            config.pow.mwm = mwm;
        }
        if let Some(threads) = parse_var::<usize, _>(&lookup, "ENTANGLED_POW_THREADS") {
            config.pow.threads = threads;
        }
        if let Some(nprocs) = parse_var::<usize, _>(&lookup, "ENTANGLED_MINING_NPROCS") {
            config.mining.nprocs = nprocs;
        }
        if let Some(level) = parse_var::<u8, _>(&lookup, "ENTANGLED_SECURITY") {
            match SecurityLevel::try_from(level) {
                Ok(security) => {
                    config.signing.security = security;
                    config.mining.security = security;
                }
                Err(e) => warn!("ENTANGLED_SECURITY ignored: {}", e),
            }
        }
        if let Some(sponge) = parse_var::<SpongeKind, _>(&lookup, "ENTANGLED_SPONGE") {
            config.signing.sponge = sponge;
        }

        config
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => {
            info!("Loaded {} from environment", key);
            Some(value)
        }
        Err(e) => {
            warn!("{} ignored: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.pow.mwm, 14);
        assert_eq!(config.pow.threads, 0);
        assert_eq!(config.signing.security, SecurityLevel::Medium);
        assert_eq!(config.signing.sponge, SpongeKind::Kerl);
        assert_eq!(config.mining.nprocs, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("ENTANGLED_MWM", "9"),
            ("ENTANGLED_POW_THREADS", "2"),
            ("ENTANGLED_MINING_NPROCS", "3"),
            ("ENTANGLED_SECURITY", "1"),
            ("ENTANGLED_SPONGE", "curl-p27"),
        ]));
        assert_eq!(config.pow.mwm, 9);
        assert_eq!(config.pow.threads, 2);
        assert_eq!(config.mining.nprocs, 3);
        assert_eq!(config.signing.security, SecurityLevel::Low);
        assert_eq!(config.mining.security, SecurityLevel::Low);
        assert_eq!(config.signing.sponge, SpongeKind::CurlP27);
    }

    #[test]
    fn test_bad_env_values_ignored() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("ENTANGLED_MWM", "lots"),
            ("ENTANGLED_SECURITY", "4"),
            ("ENTANGLED_SPONGE", "sha256"),
        ]));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: EngineConfig = serde_json::from_str(
            r#"{ "pow": { "mwm": 5 }, "signing": { "sponge": "curl-p81", "security": 3 } }"#,
        )
        .unwrap();
        assert_eq!(config.pow.mwm, 5);
        assert_eq!(config.pow.threads, 0);
        assert_eq!(config.signing.sponge, SpongeKind::CurlP81);
        assert_eq!(config.signing.security, SecurityLevel::High);
        assert!(config.mining.fully_secure);
    }

    #[test]
    fn test_invalid_mwm_rejected() {
        let mut config = EngineConfig::default();
        config.pow.mwm = 244;
        assert_eq!(config.validate().map_err(|e| e.code()), Err(5));
    }
}
