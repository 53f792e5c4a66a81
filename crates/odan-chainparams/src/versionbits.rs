use serde::{Deserialize, Serialize};

use crate::constants::{VERSIONBITS_TOP_BITS, VERSIONBITS_TOP_MASK};
use crate::deployments::{Bip9Deployment, DeploymentStart, DeploymentTimeout};
use crate::error::{ErrorCode, ParamsError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThresholdState {
    Defined,
    Started,
    LockedIn,
    Active,
    Failed,
}

impl ThresholdState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdState::Defined => "DEFINED",
            ThresholdState::Started => "STARTED",
            ThresholdState::LockedIn => "LOCKED_IN",
            ThresholdState::Active => "ACTIVE",
            ThresholdState::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ThresholdState::Active | ThresholdState::Failed)
    }
}

/// What the block index knows about one block: its version field and the
/// median time past ending at that block. `history[h]` describes height `h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSignal {
    pub version: i32,
    pub median_time_past: i64,
}

/// Confirmation window size and lock-in threshold of a network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SignalWindow {
    pub period: u64,
    pub threshold: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VersionBitsEval {
    pub state: ThresholdState,
    /// First window boundary at which `state` was entered.
    pub since_height: u64,
    pub boundary_height: u64,
    pub prev_window_signal_count: u64,
    pub period: u64,
    pub threshold: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VersionBitsStats {
    pub period: u64,
    pub threshold: u64,
    /// Blocks of the current window up to and including the tip.
    pub elapsed: u64,
    pub count: u64,
    /// Whether the threshold can still be reached in this window.
    pub possible: bool,
}

/// A block signals for `d` when its version carries the versionbits top
/// bits `001` and the deployment's bit.
pub fn condition(d: &Bip9Deployment, version: i32) -> bool {
    let v = version as u32;
    (v & VERSIONBITS_TOP_MASK) == VERSIONBITS_TOP_BITS as u32 && (v & d.mask()) != 0
}

fn check_window(window: &SignalWindow) -> Result<(), ParamsError> {
    if window.period == 0 || window.threshold > window.period {
        return Err(ParamsError::new(
            ErrorCode::ParamsErrMalformedOverride,
            format!(
                "versionbits: threshold {} / period {} is not a valid window",
                window.threshold, window.period
            ),
        ));
    }
    Ok(())
}

fn count_signals(d: &Bip9Deployment, blocks: &[BlockSignal]) -> u64 {
    blocks.iter().filter(|b| condition(d, b.version)).count() as u64
}

fn next_state(
    prev: ThresholdState,
    boundary_height: u64,
    prev_mtp: i64,
    prev_window_signal_count: u64,
    d: &Bip9Deployment,
    threshold: u64,
) -> ThresholdState {
    match prev {
        ThresholdState::Defined => match d.start {
            DeploymentStart::Time(start) if prev_mtp >= start => ThresholdState::Started,
            _ => ThresholdState::Defined,
        },
        ThresholdState::Started => {
            if prev_window_signal_count >= threshold {
                ThresholdState::LockedIn
            } else {
                match d.timeout {
                    DeploymentTimeout::Time(t) if prev_mtp >= t => ThresholdState::Failed,
                    _ => ThresholdState::Started,
                }
            }
        }
        ThresholdState::LockedIn => {
            if boundary_height >= d.min_activation_height {
                ThresholdState::Active
            } else {
                ThresholdState::LockedIn
            }
        }
        ThresholdState::Active => ThresholdState::Active,
        ThresholdState::Failed => ThresholdState::Failed,
    }
}

/// State of deployment `d` for the block at `height`.
///
/// The state only changes at window boundaries and depends on blocks
/// strictly before the boundary, so `history` must cover heights
/// `0..boundary_height`. The genesis window is always `Defined` (there is no
/// previous block to read a time from). Lock-in is tested before timeout.
pub fn threshold_state(
    d: &Bip9Deployment,
    window: &SignalWindow,
    height: u64,
    history: &[BlockSignal],
) -> Result<VersionBitsEval, ParamsError> {
    check_window(window)?;
    let period = window.period;
    let boundary_height = height - (height % period);

    let fixed = match d.start {
        DeploymentStart::AlwaysActive => Some(ThresholdState::Active),
        DeploymentStart::NeverActive => Some(ThresholdState::Failed),
        DeploymentStart::Time(_) => None,
    };
    if let Some(state) = fixed {
        return Ok(VersionBitsEval {
            state,
            since_height: 0,
            boundary_height,
            prev_window_signal_count: 0,
            period,
            threshold: window.threshold,
        });
    }

    if (history.len() as u64) < boundary_height {
        return Err(ParamsError::new(
            ErrorCode::ParamsErrHistoryShort,
            format!(
                "versionbits: need {} blocks of history for height {}, got {}",
                boundary_height,
                height,
                history.len()
            ),
        ));
    }

    let mut state = ThresholdState::Defined;
    let mut since_height = 0u64;
    let mut prev_cnt = 0u64;
    let mut bh = period;
    while bh <= boundary_height {
        let start = (bh - period) as usize;
        let end = bh as usize;
        prev_cnt = count_signals(d, &history[start..end]);
        let prev_mtp = history[end - 1].median_time_past;
        let next = next_state(state, bh, prev_mtp, prev_cnt, d, window.threshold);
        if next != state {
            since_height = bh;
            state = next;
        }
        bh += period;
    }

    Ok(VersionBitsEval {
        state,
        since_height,
        boundary_height,
        prev_window_signal_count: prev_cnt,
        period,
        threshold: window.threshold,
    })
}

/// Signaling progress of the window containing `tip_height`, counting the
/// blocks from the window start through the tip.
pub fn window_statistics(
    d: &Bip9Deployment,
    window: &SignalWindow,
    tip_height: u64,
    history: &[BlockSignal],
) -> Result<VersionBitsStats, ParamsError> {
    check_window(window)?;
    if (history.len() as u64) <= tip_height {
        return Err(ParamsError::new(
            ErrorCode::ParamsErrHistoryShort,
            format!(
                "versionbits: tip {} outside history of {} blocks",
                tip_height,
                history.len()
            ),
        ));
    }
    let elapsed = tip_height % window.period + 1;
    let start = (tip_height + 1 - elapsed) as usize;
    let count = count_signals(d, &history[start..=tip_height as usize]);
    Ok(VersionBitsStats {
        period: window.period,
        threshold: window.threshold,
        elapsed,
        count,
        possible: window.period - window.threshold >= elapsed - count,
    })
}

/// Block version a miner should use for the block at `height`: the top
/// bits plus the bit of every deployment still collecting or locked in.
pub fn compute_block_version(
    deployments: &[Bip9Deployment],
    window: &SignalWindow,
    height: u64,
    history: &[BlockSignal],
) -> Result<i32, ParamsError> {
    let mut version = VERSIONBITS_TOP_BITS as u32;
    for d in deployments {
        let ev = threshold_state(d, window, height, history)?;
        if matches!(ev.state, ThresholdState::Started | ThresholdState::LockedIn) {
            version |= d.mask();
        }
    }
    Ok(version as i32)
}
