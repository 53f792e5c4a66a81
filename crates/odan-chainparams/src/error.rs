use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ParamsErrGenesisHash,
    ParamsErrGenesisMerkle,
    ParamsErrGenesisPow,
    ParamsErrSignetChallenge,

    ParamsErrUnknownDeployment,
    ParamsErrNegativeHeight,
    ParamsErrMalformedOverride,
    ParamsErrDeploymentBit,
    ParamsErrSubsidyPolicy,
    ParamsErrHistoryShort,
    ParamsErrUnknownChain,
    ParamsErrSeeds,

    ParamsErrHex,
    ParamsErrMerkleEmpty,
    ParamsErrScriptParse,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ParamsErrGenesisHash => "PARAMS_ERR_GENESIS_HASH",
            ErrorCode::ParamsErrGenesisMerkle => "PARAMS_ERR_GENESIS_MERKLE",
            ErrorCode::ParamsErrGenesisPow => "PARAMS_ERR_GENESIS_POW",
            ErrorCode::ParamsErrSignetChallenge => "PARAMS_ERR_SIGNET_CHALLENGE",

            ErrorCode::ParamsErrUnknownDeployment => "PARAMS_ERR_UNKNOWN_DEPLOYMENT",
            ErrorCode::ParamsErrNegativeHeight => "PARAMS_ERR_NEGATIVE_HEIGHT",
            ErrorCode::ParamsErrMalformedOverride => "PARAMS_ERR_MALFORMED_OVERRIDE",
            ErrorCode::ParamsErrDeploymentBit => "PARAMS_ERR_DEPLOYMENT_BIT",
            ErrorCode::ParamsErrSubsidyPolicy => "PARAMS_ERR_SUBSIDY_POLICY",
            ErrorCode::ParamsErrHistoryShort => "PARAMS_ERR_HISTORY_SHORT",
            ErrorCode::ParamsErrUnknownChain => "PARAMS_ERR_UNKNOWN_CHAIN",
            ErrorCode::ParamsErrSeeds => "PARAMS_ERR_SEEDS",

            ErrorCode::ParamsErrHex => "PARAMS_ERR_HEX",
            ErrorCode::ParamsErrMerkleEmpty => "PARAMS_ERR_MERKLE_EMPTY",
            ErrorCode::ParamsErrScriptParse => "PARAMS_ERR_SCRIPT_PARSE",
        }
    }

    /// Configuration-fatal codes mean the built-in network data (or a
    /// caller-supplied signet challenge) is inconsistent; the parameter set
    /// must not be used.
    pub fn is_configuration_fatal(self) -> bool {
        matches!(
            self,
            ErrorCode::ParamsErrGenesisHash
                | ErrorCode::ParamsErrGenesisMerkle
                | ErrorCode::ParamsErrGenesisPow
                | ErrorCode::ParamsErrSignetChallenge
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}: {}", .code.as_str(), .msg)]
pub struct ParamsError {
    pub code: ErrorCode,
    pub msg: String,
}

impl ParamsError {
    pub fn new(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }
}
