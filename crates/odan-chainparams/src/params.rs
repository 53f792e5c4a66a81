use std::collections::BTreeMap;

use serde::Serialize;

use crate::deployments::{
    Bip9Deployment, BuriedDeployment, Deployment, DeploymentPos, MAX_VERSION_BITS_DEPLOYMENTS,
};
use crate::error::ParamsError;
use crate::subsidy::SubsidyPolicy;
use crate::uint256::Uint256;
use crate::versionbits::{
    compute_block_version, threshold_state, window_statistics, BlockSignal, SignalWindow,
    ThresholdState, VersionBitsEval, VersionBitsStats,
};

/// Heights at which the buried deployments take effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BuriedHeights {
    pub bip34: u64,
    pub bip65: u64,
    pub bip66: u64,
    pub csv: u64,
    pub segwit: u64,
}

impl BuriedHeights {
    pub fn get(&self, d: BuriedDeployment) -> u64 {
        match d {
            BuriedDeployment::HeightInCb => self.bip34,
            BuriedDeployment::Cltv => self.bip65,
            BuriedDeployment::DerSig => self.bip66,
            BuriedDeployment::Csv => self.csv,
            BuriedDeployment::Segwit => self.segwit,
        }
    }

    pub fn set(&mut self, d: BuriedDeployment, height: u64) {
        let slot = match d {
            BuriedDeployment::HeightInCb => &mut self.bip34,
            BuriedDeployment::Cltv => &mut self.bip65,
            BuriedDeployment::DerSig => &mut self.bip66,
            BuriedDeployment::Csv => &mut self.csv,
            BuriedDeployment::Segwit => &mut self.segwit,
        };
        *slot = height;
    }
}

/// Upgrade heights of the contract layer: QIP rule changes, offline
/// staking and the EVM hard forks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpgradeHeights {
    pub qip5: u64,
    pub qip6: u64,
    pub qip7: u64,
    pub qip9: u64,
    pub offline_stake: u64,
    pub muir_glacier: u64,
    pub london: u64,
    pub shanghai: u64,
    pub cancun: u64,
}

/// Consensus rules of one network. Built once by the factory and read-only
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsensusParams {
    pub hash_genesis_block: Uint256,
    pub subsidy: SubsidyPolicy,
    pub buried: BuriedHeights,
    /// Block hash at the BIP34 height; zero when unknown.
    pub bip34_hash: Uint256,
    pub min_bip9_warning_height: u64,
    /// Blocks validated with relaxed script flags, keyed by hash.
    pub script_flag_exceptions: BTreeMap<Uint256, u32>,
    pub upgrades: UpgradeHeights,

    pub pow_limit: Uint256,
    pub pos_limit: Uint256,
    pub pow_target_timespan: i64,
    pub pow_target_spacing: i64,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    pub pos_no_retargeting: bool,

    pub rule_change_activation_threshold: u64,
    pub miner_confirmation_window: u64,
    pub deployments: [Bip9Deployment; MAX_VERSION_BITS_DEPLOYMENTS],

    pub minimum_chain_work: Uint256,
    pub default_assume_valid: Uint256,

    pub signet_blocks: bool,
    pub signet_challenge: Vec<u8>,

    pub coinbase_maturity: u64,
    pub last_pow_block: u64,
    pub last_big_reward: u64,
    pub mpos_reward_recipients: u64,
    pub first_mpos_block: u64,
    pub fix_utxo_cache_hf_height: u64,
    pub enable_header_signature_height: u64,
    pub checkpoint_span: u64,
    pub delegations_address: [u8; 20],
    pub stake_timestamp_mask: u32,
}

impl ConsensusParams {
    pub fn deployment_height(&self, d: BuriedDeployment) -> u64 {
        self.buried.get(d)
    }

    pub fn deployment_active_at(&self, d: BuriedDeployment, height: u64) -> bool {
        height >= self.buried.get(d)
    }

    pub fn deployment(&self, pos: DeploymentPos) -> &Bip9Deployment {
        &self.deployments[pos.index()]
    }

    pub fn signal_window(&self) -> SignalWindow {
        SignalWindow {
            period: self.miner_confirmation_window,
            threshold: self.rule_change_activation_threshold,
        }
    }

    pub fn deployment_state(
        &self,
        pos: DeploymentPos,
        height: u64,
        history: &[BlockSignal],
    ) -> Result<VersionBitsEval, ParamsError> {
        threshold_state(self.deployment(pos), &self.signal_window(), height, history)
    }

    /// Height of the window boundary at which the current state began.
    pub fn state_since_height(
        &self,
        pos: DeploymentPos,
        height: u64,
        history: &[BlockSignal],
    ) -> Result<u64, ParamsError> {
        Ok(self.deployment_state(pos, height, history)?.since_height)
    }

    pub fn deployment_statistics(
        &self,
        pos: DeploymentPos,
        tip_height: u64,
        history: &[BlockSignal],
    ) -> Result<VersionBitsStats, ParamsError> {
        window_statistics(
            self.deployment(pos),
            &self.signal_window(),
            tip_height,
            history,
        )
    }

    /// Whether `deployment` applies to the block at `height`. Buried
    /// deployments ignore `history`; signaled ones need it up to the start
    /// of the window containing `height`.
    pub fn is_active(
        &self,
        deployment: Deployment,
        height: u64,
        history: &[BlockSignal],
    ) -> Result<bool, ParamsError> {
        match deployment {
            Deployment::Buried(d) => Ok(self.deployment_active_at(d, height)),
            Deployment::Signaled(pos) => {
                let ev = self.deployment_state(pos, height, history)?;
                Ok(ev.state == ThresholdState::Active)
            }
        }
    }

    pub fn compute_block_version(
        &self,
        height: u64,
        history: &[BlockSignal],
    ) -> Result<i32, ParamsError> {
        compute_block_version(&self.deployments, &self.signal_window(), height, history)
    }

    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    pub fn block_subsidy(&self, height: u64) -> u64 {
        self.subsidy.block_subsidy(height)
    }

    pub fn is_proof_of_stake_height(&self, height: u64) -> bool {
        height > self.last_pow_block
    }
}
