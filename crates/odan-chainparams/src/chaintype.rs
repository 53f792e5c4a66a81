use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, ParamsError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    Main,
    #[serde(rename = "test")]
    Testnet,
    Signet,
    Regtest,
    #[serde(rename = "unittest")]
    UnitTest,
}

impl ChainType {
    pub const ALL: [ChainType; 5] = [
        ChainType::Main,
        ChainType::Testnet,
        ChainType::Signet,
        ChainType::Regtest,
        ChainType::UnitTest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChainType::Main => "main",
            ChainType::Testnet => "test",
            ChainType::Signet => "signet",
            ChainType::Regtest => "regtest",
            ChainType::UnitTest => "unittest",
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainType {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChainType::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                ParamsError::new(ErrorCode::ParamsErrUnknownChain, format!("unknown chain {s:?}"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for c in ChainType::ALL {
            assert_eq!(c.as_str().parse::<ChainType>().unwrap(), c);
        }
        let err = "mainnet".parse::<ChainType>().unwrap_err();
        assert_eq!(err.code, ErrorCode::ParamsErrUnknownChain);
    }

    #[test]
    fn serde_names_match_display() {
        for c in ChainType::ALL {
            let s = serde_json::to_string(&c).unwrap();
            assert_eq!(s, format!("\"{c}\""));
        }
    }
}
