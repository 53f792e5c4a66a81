pub mod block;
pub mod chainparams;
pub mod chaintype;
pub mod checkpoints;
mod compactsize;
pub mod constants;
pub mod deployments;
pub mod error;
pub mod genesis;
mod hash;
pub mod identity;
pub mod merkle;
pub mod options;
pub mod params;
pub mod pow;
pub mod script;
pub mod seeds;
pub mod subsidy;
pub mod tx;
pub mod uint256;
pub mod versionbits;
mod wire_read;

pub use block::{Block, BlockHeader};
pub use chainparams::{
    create_chain_params, network_genesis, ChainParams, NetworkGenesis, NodePolicy,
};
pub use chaintype::ChainType;
pub use checkpoints::{AssumeUtxoData, ChainTxData, CheckpointData, SnapshotAnchors};
pub use deployments::{
    Bip9Deployment, BuriedDeployment, Deployment, DeploymentPos, DeploymentStart,
    DeploymentTimeout,
};
pub use error::{ErrorCode, ParamsError};
pub use genesis::{build_verified_genesis, verify_genesis, GenesisExpectation, GenesisInputs};
pub use identity::{Base58Prefixes, ChainIdentity};
pub use options::{ChainOptions, NetworkConfig, RegTestOptions, SigNetOptions, VersionBitsParameters};
pub use params::ConsensusParams;
pub use seeds::SeedList;
pub use subsidy::SubsidyPolicy;
pub use uint256::Uint256;
pub use versionbits::{BlockSignal, SignalWindow, ThresholdState, VersionBitsEval};

#[cfg(test)]
mod tests;
