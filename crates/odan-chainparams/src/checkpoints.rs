use std::collections::BTreeMap;

use serde::Serialize;

use crate::uint256::Uint256;

/// Trusted height → block hash pins. Blocks conflicting with a checkpoint
/// are rejected by the validator; nothing here validates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CheckpointData {
    checkpoints: BTreeMap<u64, Uint256>,
}

impl CheckpointData {
    pub fn new(entries: impl IntoIterator<Item = (u64, Uint256)>) -> Self {
        Self {
            checkpoints: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, height: u64) -> Option<&Uint256> {
        self.checkpoints.get(&height)
    }

    pub fn last(&self) -> Option<(u64, &Uint256)> {
        self.checkpoints.iter().next_back().map(|(h, v)| (*h, v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &Uint256)> {
        self.checkpoints.iter().map(|(h, v)| (*h, v))
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}

/// Snapshot anchor: a UTXO-set snapshot at `height` that a node may load
/// instead of replaying history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AssumeUtxoData {
    pub height: u64,
    pub hash_serialized: Uint256,
    /// Transactions in the chain up to and including `height`.
    pub chain_tx_count: u64,
    pub blockhash: Uint256,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotAnchors {
    anchors: Vec<AssumeUtxoData>,
}

impl SnapshotAnchors {
    pub fn new(anchors: Vec<AssumeUtxoData>) -> Self {
        Self { anchors }
    }

    pub fn for_height(&self, height: u64) -> Option<&AssumeUtxoData> {
        self.anchors.iter().find(|a| a.height == height)
    }

    pub fn for_blockhash(&self, blockhash: &Uint256) -> Option<&AssumeUtxoData> {
        self.anchors.iter().find(|a| &a.blockhash == blockhash)
    }

    pub fn available_heights(&self) -> Vec<u64> {
        self.anchors.iter().map(|a| a.height).collect()
    }

    pub fn as_slice(&self) -> &[AssumeUtxoData] {
        &self.anchors
    }
}

/// Transaction-rate summary used to estimate sync progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ChainTxData {
    /// UNIX time of the last known transaction count.
    pub time: i64,
    pub tx_count: u64,
    /// Estimated transactions per second after `time`.
    pub tx_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(b: u8) -> Uint256 {
        Uint256::from_bytes([b; 32])
    }

    #[test]
    fn checkpoint_lookup_is_exact_height() {
        let c = CheckpointData::new([(0, h(1)), (500, h(2))]);
        assert_eq!(c.get(0), Some(&h(1)));
        assert_eq!(c.get(500), Some(&h(2)));
        assert_eq!(c.get(499), None);
        assert_eq!(c.last(), Some((500, &h(2))));
    }

    #[test]
    fn snapshot_lookup() {
        let a = AssumeUtxoData {
            height: 2010,
            hash_serialized: h(3),
            chain_tx_count: 2011,
            blockhash: h(4),
        };
        let s = SnapshotAnchors::new(vec![a]);
        assert_eq!(s.for_height(2010), Some(&a));
        assert_eq!(s.for_height(2011), None);
        assert_eq!(s.for_blockhash(&h(4)), Some(&a));
        assert_eq!(s.for_blockhash(&h(3)), None);
        assert_eq!(s.available_heights(), vec![2010]);
    }
}
