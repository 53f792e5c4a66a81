use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::constants::VERSIONBITS_NUM_BITS;
use crate::error::{ErrorCode, ParamsError};

/// Rule changes activated unconditionally at a fixed height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuriedDeployment {
    /// BIP34: height in coinbase.
    HeightInCb,
    /// BIP65: OP_CHECKLOCKTIMEVERIFY.
    Cltv,
    /// BIP66: strict DER signatures.
    DerSig,
    /// BIP68/112/113.
    Csv,
    /// BIP141/143/147.
    Segwit,
}

impl BuriedDeployment {
    pub const ALL: [BuriedDeployment; 5] = [
        BuriedDeployment::HeightInCb,
        BuriedDeployment::Cltv,
        BuriedDeployment::DerSig,
        BuriedDeployment::Csv,
        BuriedDeployment::Segwit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuriedDeployment::HeightInCb => "bip34",
            BuriedDeployment::Cltv => "cltv",
            BuriedDeployment::DerSig => "dersig",
            BuriedDeployment::Csv => "csv",
            BuriedDeployment::Segwit => "segwit",
        }
    }
}

impl FromStr for BuriedDeployment {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuriedDeployment::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| {
                ParamsError::new(
                    ErrorCode::ParamsErrUnknownDeployment,
                    format!("unknown buried deployment {s:?}"),
                )
            })
    }
}

impl fmt::Display for BuriedDeployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Slots of the versionbits deployment table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentPos {
    TestDummy,
    /// BIPs 340-342.
    Taproot,
}

pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = 2;

impl DeploymentPos {
    pub const ALL: [DeploymentPos; MAX_VERSION_BITS_DEPLOYMENTS] =
        [DeploymentPos::TestDummy, DeploymentPos::Taproot];

    pub fn name(self) -> &'static str {
        match self {
            DeploymentPos::TestDummy => "testdummy",
            DeploymentPos::Taproot => "taproot",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for DeploymentPos {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeploymentPos::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| {
                ParamsError::new(
                    ErrorCode::ParamsErrUnknownDeployment,
                    format!("unknown versionbits deployment {s:?}"),
                )
            })
    }
}

impl fmt::Display for DeploymentPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Either kind of deployment, for queries that accept both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Deployment {
    Buried(BuriedDeployment),
    Signaled(DeploymentPos),
}

impl From<BuriedDeployment> for Deployment {
    fn from(d: BuriedDeployment) -> Self {
        Deployment::Buried(d)
    }
}

impl From<DeploymentPos> for Deployment {
    fn from(d: DeploymentPos) -> Self {
        Deployment::Signaled(d)
    }
}

impl FromStr for Deployment {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(d) = s.parse::<BuriedDeployment>() {
            return Ok(Deployment::Buried(d));
        }
        s.parse::<DeploymentPos>()
            .map(Deployment::Signaled)
            .map_err(|_| {
                ParamsError::new(
                    ErrorCode::ParamsErrUnknownDeployment,
                    format!("unknown deployment {s:?}"),
                )
            })
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deployment::Buried(d) => d.fmt(f),
            Deployment::Signaled(d) => d.fmt(f),
        }
    }
}

/// When signaling may begin. Times are compared with the median time past
/// of the block closing the previous window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStart {
    /// Active from genesis; no signaling.
    AlwaysActive,
    /// Never activates regardless of signaling.
    NeverActive,
    Time(i64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentTimeout {
    NoTimeout,
    Time(i64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Bip9Deployment {
    pub bit: u8,
    pub start: DeploymentStart,
    pub timeout: DeploymentTimeout,
    /// Earliest height at which a locked-in deployment may become active.
    /// Production networks keep this a multiple of the confirmation window;
    /// that is not checked.
    pub min_activation_height: u64,
}

impl Bip9Deployment {
    pub fn mask(&self) -> u32 {
        1u32 << self.bit
    }
}

/// Bits must lie in the versionbits range and be unique across the table.
pub fn check_deployment_bits(
    deployments: &[Bip9Deployment; MAX_VERSION_BITS_DEPLOYMENTS],
) -> Result<(), ParamsError> {
    for (i, d) in deployments.iter().enumerate() {
        if d.bit >= VERSIONBITS_NUM_BITS {
            return Err(ParamsError::new(
                ErrorCode::ParamsErrDeploymentBit,
                format!("{}: bit {} out of range", DeploymentPos::ALL[i], d.bit),
            ));
        }
        for (j, other) in deployments.iter().enumerate().skip(i + 1) {
            if other.bit == d.bit {
                return Err(ParamsError::new(
                    ErrorCode::ParamsErrDeploymentBit,
                    format!(
                        "{} and {} share bit {}",
                        DeploymentPos::ALL[i],
                        DeploymentPos::ALL[j],
                        d.bit
                    ),
                ));
            }
        }
    }
    Ok(())
}
