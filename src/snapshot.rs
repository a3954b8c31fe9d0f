//! Serializable export of a codec's mode table.
//!
//! ModeName strings are consumed outside the planning process — by log
//! viewers, gait-definition editors, and visualization tooling that often do
//! not link this crate. A [`ModeTableSnapshot`] is the hand-off format: the
//! complete table (every mode number with its canonical name and stance
//! flags) plus the leg labels it was generated from, serialized with serde.
//! A consumer that resolves names through the snapshot is guaranteed to agree
//! with the codec that produced it.
//!
//! The snapshot is a value — exporting it never mutates the codec, and the
//! codec never reads one back (names entering the process go through
//! [`ModeCodec::name_to_mode`]).
//!
//! # Example
//!
//! ```rust
//! use stance_codec::hexapod::HexapodCodec;
//! use stance_codec::snapshot::ModeTableSnapshot;
//!
//! let codec = HexapodCodec::new();
//! let snapshot = ModeTableSnapshot::from_codec(&codec);
//! let json = serde_json::to_string(&snapshot).unwrap();
//! let restored: ModeTableSnapshot = serde_json::from_str(&json).unwrap();
//! assert_eq!(restored, snapshot);
//! ```
//!
//! [`ModeCodec::name_to_mode`]: crate::codec::ModeCodec::name_to_mode

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::codec::ModeCodec;
use crate::legs::LegVocabulary;

/// Current snapshot format version.
pub const MODE_TABLE_VERSION: u16 = 1;

/// A serializable dump of one codec's complete mode table.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ModeTableSnapshot {
    /// Format version — always [`MODE_TABLE_VERSION`] for newly created snapshots.
    pub version: u16,
    /// Leg labels in ordering-convention order.
    pub leg_labels: Vec<String>,
    /// One entry per mode, dense over `[0, 2^N)`, in mode-number order.
    pub entries: Vec<ModeEntry>,
}

/// One row of the mode table.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ModeEntry {
    /// The mode number.
    pub mode: usize,
    /// Its canonical name.
    pub name: String,
    /// Its stance flags in ordering order (`true` = leg in contact).
    pub stance: Vec<bool>,
}

impl ModeTableSnapshot {
    /// Export the complete table of `codec`.
    pub fn from_codec<V, const N: usize>(codec: &ModeCodec<V, N>) -> Self
    where
        V: LegVocabulary<N>,
    {
        let entries: Vec<ModeEntry> = codec
            .names()
            .map(|(mode, name)| ModeEntry {
                mode,
                name: name.to_string(),
                // In-table modes always unpack.
                stance: codec.mode_to_stance(mode).unwrap_or([false; N]).to_vec(),
            })
            .collect();

        Self {
            version: MODE_TABLE_VERSION,
            leg_labels: V::LABELS.iter().map(|label| label.to_string()).collect(),
            entries,
        }
    }

    /// Number of modes in this snapshot.
    pub fn mode_count(&self) -> usize {
        self.entries.len()
    }

    /// Look up a mode number by canonical name.
    ///
    /// Returns `None` if the name is not present — snapshot consumers have no
    /// fallback parse; that belongs to the codec proper.
    pub fn find_mode(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexapod::HexapodCodec;

    #[test]
    fn test_snapshot_covers_every_mode_in_order() {
        let codec = HexapodCodec::new();
        let snapshot = ModeTableSnapshot::from_codec(&codec);
        assert_eq!(snapshot.mode_count(), 64);
        for (expected, entry) in snapshot.entries.iter().enumerate() {
            assert_eq!(entry.mode, expected);
        }
    }

    #[test]
    fn test_snapshot_version_is_current() {
        let codec = HexapodCodec::new();
        let snapshot = ModeTableSnapshot::from_codec(&codec);
        assert_eq!(snapshot.version, MODE_TABLE_VERSION);
    }

    #[test]
    fn test_snapshot_labels_match_vocabulary() {
        let codec = HexapodCodec::new();
        let snapshot = ModeTableSnapshot::from_codec(&codec);
        assert_eq!(snapshot.leg_labels, ["LF", "RF", "LM", "RM", "LH", "RH"]);
    }

    #[test]
    fn test_snapshot_entries_agree_with_codec() {
        let codec = HexapodCodec::new();
        let snapshot = ModeTableSnapshot::from_codec(&codec);
        for entry in &snapshot.entries {
            assert_eq!(codec.mode_to_name(entry.mode), entry.name);
            assert_eq!(
                codec.mode_to_stance(entry.mode).unwrap().to_vec(),
                entry.stance
            );
        }
    }

    #[test]
    fn test_find_mode_has_no_fallback_parse() {
        let codec = HexapodCodec::new();
        let snapshot = ModeTableSnapshot::from_codec(&codec);
        assert_eq!(snapshot.find_mode("LF_RF_LH"), Some(50));
        assert_eq!(snapshot.find_mode("MODE_5"), None);
        assert_eq!(snapshot.find_mode("not_a_real_mode"), None);
    }
}
