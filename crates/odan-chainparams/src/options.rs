use serde::Deserialize;

use crate::chaintype::ChainType;
use crate::deployments::{BuriedDeployment, DeploymentPos, DeploymentStart, DeploymentTimeout};
use crate::error::{ErrorCode, ParamsError};
use crate::identity::parse_signet_challenge;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SigNetOptions {
    /// Custom challenge script; `None` selects the default signet.
    pub challenge: Option<Vec<u8>>,
    /// Replaces the DNS seed list when present.
    pub seeds: Option<Vec<String>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionBitsParameters {
    pub start: DeploymentStart,
    pub timeout: DeploymentTimeout,
    pub min_activation_height: i64,
}

/// Overrides accepted by the regression-test network (and the unit-test
/// network built on it). Applied in order; later entries win.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegTestOptions {
    pub activation_heights: Vec<(BuriedDeployment, i64)>,
    pub version_bits_parameters: Vec<(DeploymentPos, VersionBitsParameters)>,
    pub fastprune: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainOptions {
    pub signet: SigNetOptions,
    pub regtest: RegTestOptions,
}

fn malformed(msg: String) -> ParamsError {
    ParamsError::new(ErrorCode::ParamsErrMalformedOverride, msg)
}

fn parse_height(arg: &str, value: &str) -> Result<i64, ParamsError> {
    let height: i64 = value
        .parse()
        .map_err(|_| malformed(format!("{arg}: invalid height {value:?}")))?;
    if height < 0 {
        return Err(ParamsError::new(
            ErrorCode::ParamsErrNegativeHeight,
            format!("{arg}: height {height} is negative"),
        ));
    }
    Ok(height)
}

fn parse_time(arg: &str, value: &str) -> Result<i64, ParamsError> {
    let t: i64 = value
        .parse()
        .map_err(|_| malformed(format!("{arg}: invalid time {value:?}")))?;
    if t < 0 {
        return Err(malformed(format!("{arg}: time {t} is negative")));
    }
    Ok(t)
}

/// Parses `name@height`, e.g. `segwit@10`.
pub fn parse_activation_height(arg: &str) -> Result<(BuriedDeployment, i64), ParamsError> {
    let Some((name, value)) = arg.split_once('@') else {
        return Err(malformed(format!("{arg:?}: expected name@height")));
    };
    let deployment = name.parse::<BuriedDeployment>().map_err(|e| {
        ParamsError::new(e.code, format!("{arg:?}: {}", e.msg))
    })?;
    Ok((deployment, parse_height(arg, value)?))
}

/// Parses `name:start:timeout[:min_activation_height]`. `start` may be
/// `always_active` or `never_active`, `timeout` may be `no_timeout`.
pub fn parse_vbparams(arg: &str) -> Result<(DeploymentPos, VersionBitsParameters), ParamsError> {
    let parts: Vec<&str> = arg.split(':').collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(malformed(format!(
            "{arg:?}: expected name:start:timeout[:min_activation_height]"
        )));
    }
    let pos = parts[0]
        .parse::<DeploymentPos>()
        .map_err(|e| ParamsError::new(e.code, format!("{arg:?}: {}", e.msg)))?;
    let start = match parts[1] {
        "always_active" => DeploymentStart::AlwaysActive,
        "never_active" => DeploymentStart::NeverActive,
        v => DeploymentStart::Time(parse_time(arg, v)?),
    };
    let timeout = match parts[2] {
        "no_timeout" => DeploymentTimeout::NoTimeout,
        v => DeploymentTimeout::Time(parse_time(arg, v)?),
    };
    let min_activation_height = match parts.get(3) {
        Some(v) => parse_height(arg, v)?,
        None => 0,
    };
    Ok((
        pos,
        VersionBitsParameters {
            start,
            timeout,
            min_activation_height,
        },
    ))
}

/// Network selection as it arrives from a config file or request body.
#[derive(Clone, Debug, Deserialize)]
pub struct NetworkConfig {
    pub chain: ChainType,
    #[serde(default)]
    pub signet_challenge: Option<String>,
    #[serde(default)]
    pub signet_seeds: Option<Vec<String>>,
    #[serde(default)]
    pub fastprune: bool,
    #[serde(default)]
    pub test_activation_heights: Vec<String>,
    #[serde(default)]
    pub vbparams: Vec<String>,
}

impl NetworkConfig {
    pub fn new(chain: ChainType) -> Self {
        Self {
            chain,
            signet_challenge: None,
            signet_seeds: None,
            fastprune: false,
            test_activation_heights: Vec::new(),
            vbparams: Vec::new(),
        }
    }

    pub fn from_json(s: &str) -> Result<Self, ParamsError> {
        serde_json::from_str(s).map_err(|e| malformed(format!("network config: {e}")))
    }

    pub fn signet_options(&self) -> Result<SigNetOptions, ParamsError> {
        let challenge = match &self.signet_challenge {
            Some(h) => Some(parse_signet_challenge(h)?),
            None => None,
        };
        Ok(SigNetOptions {
            challenge,
            seeds: self.signet_seeds.clone(),
        })
    }

    pub fn regtest_options(&self) -> Result<RegTestOptions, ParamsError> {
        let activation_heights = self
            .test_activation_heights
            .iter()
            .map(|a| parse_activation_height(a))
            .collect::<Result<Vec<_>, _>>()?;
        let version_bits_parameters = self
            .vbparams
            .iter()
            .map(|a| parse_vbparams(a))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RegTestOptions {
            activation_heights,
            version_bits_parameters,
            fastprune: self.fastprune,
        })
    }

    pub fn chain_options(&self) -> Result<ChainOptions, ParamsError> {
        Ok(ChainOptions {
            signet: self.signet_options()?,
            regtest: self.regtest_options()?,
        })
    }
}
