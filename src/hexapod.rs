//! Reference six-leg vocabulary.
//!
//! The reference robot is a hexapod with the ordering convention
//! `{LF, RF, LM, RM, LH, RH}` — left/right front, middle, and hind legs,
//! front-to-back, left before right. This is the vocabulary used by the
//! switched-dynamics planning stack the codec was built for, and it ships as
//! a concrete example of what a production [`LegVocabulary`] looks like. Your
//! own platform follows the same pattern — implement the trait with your leg
//! labels in your ordering.
//!
//! Under this ordering the mode bits are:
//!
//! ```text
//! bit:   5    4    3    2    1    0
//! leg:  LF   RF   LM   RM   LH   RH
//! ```
//!
//! so the 64 contact modes run from [`modes::FLY`] (0, airborne) to
//! [`modes::STANCE`] (63, all feet loaded), with e.g. [`modes::LF_RM_LH`] and
//! [`modes::RF_LM_RH`] as the two tripods of the alternating hexapod gait.
//!
//! # See also
//!
//! - `demos/hexapod.rs` — tripod-gait walkthrough over this vocabulary
//! - [`LegVocabulary`] — the trait to implement for your own platform

use crate::codec::ModeCodec;
use crate::legs::LegVocabulary;
use crate::stance::StanceVector;

// ─── Leg ────────────────────────────────────────────────────────────────────

/// One leg of the reference hexapod, carrying its ordering position.
///
/// The discriminants are the ordering indices, not the mode bits: `LF` is
/// ordering position 0 and therefore owns the *highest* mode bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Leg {
    /// Left front leg (ordering position 0, mode bit 5).
    LF = 0,
    /// Right front leg (ordering position 1, mode bit 4).
    RF = 1,
    /// Left middle leg (ordering position 2, mode bit 3).
    LM = 2,
    /// Right middle leg (ordering position 3, mode bit 2).
    RM = 3,
    /// Left hind leg (ordering position 4, mode bit 1).
    LH = 4,
    /// Right hind leg (ordering position 5, mode bit 0).
    RH = 5,
}

impl Leg {
    /// All six legs in ordering-convention order.
    pub const ALL: [Leg; 6] = [Leg::LF, Leg::RF, Leg::LM, Leg::RM, Leg::LH, Leg::RH];

    /// Ordering position of this leg.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Label of this leg as it appears in mode names.
    pub fn label(self) -> &'static str {
        HexapodLegs::LABELS[self.index()]
    }

    /// Leg at ordering position `index`, or `None` past the end.
    pub fn from_index(index: usize) -> Option<Leg> {
        Leg::ALL.get(index).copied()
    }
}

// ─── Vocabulary ─────────────────────────────────────────────────────────────

/// The reference hexapod ordering convention `{LF, RF, LM, RM, LH, RH}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexapodLegs;

impl LegVocabulary<6> for HexapodLegs {
    const LABELS: [&'static str; 6] = ["LF", "RF", "LM", "RM", "LH", "RH"];
}

/// Stance vector for the reference hexapod.
pub type HexapodStance = StanceVector<6>;

/// Mode codec for the reference hexapod.
pub type HexapodCodec = ModeCodec<HexapodLegs, 6>;

/// The process-wide hexapod codec, built once on first use.
///
/// Construction happens under a one-time-initialization barrier
/// (`std::sync::OnceLock`), so concurrent first callers race safely and every
/// caller afterwards reads the same immutable tables without locking.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn codec() -> &'static HexapodCodec {
    static CODEC: std::sync::OnceLock<HexapodCodec> = std::sync::OnceLock::new();
    CODEC.get_or_init(HexapodCodec::new)
}

// ─── Named modes ────────────────────────────────────────────────────────────

/// Named mode numbers for every hexapod contact combination.
///
/// These are plain `usize` constants, not an enum: downstream consumers treat
/// mode numbers as opaque integers, and the constants exist so that gait
/// definitions and tests can spell `modes::LF_RM_LH` instead of 38. Each
/// value equals what [`stance_to_mode`] produces for that combination — the
/// conformance suite in `tests/` checks all 64 against the codec.
///
/// [`stance_to_mode`]: crate::stance::stance_to_mode
pub mod modes {
    /// Flight phase, no leg in contact.
    pub const FLY: usize = 0;
    /// Only RH in contact.
    pub const RH: usize = 1;
    /// Only LH in contact.
    pub const LH: usize = 2;
    /// LH, RH in contact.
    pub const LH_RH: usize = 3;
    /// Only RM in contact.
    pub const RM: usize = 4;
    /// RM, RH in contact.
    pub const RM_RH: usize = 5;
    /// RM, LH in contact.
    pub const RM_LH: usize = 6;
    /// RM, LH, RH in contact.
    pub const RM_LH_RH: usize = 7;
    /// Only LM in contact.
    pub const LM: usize = 8;
    /// LM, RH in contact.
    pub const LM_RH: usize = 9;
    /// LM, LH in contact.
    pub const LM_LH: usize = 10;
    /// LM, LH, RH in contact.
    pub const LM_LH_RH: usize = 11;
    /// LM, RM in contact.
    pub const LM_RM: usize = 12;
    /// LM, RM, RH in contact.
    pub const LM_RM_RH: usize = 13;
    /// LM, RM, LH in contact.
    pub const LM_RM_LH: usize = 14;
    /// LM, RM, LH, RH in contact.
    pub const LM_RM_LH_RH: usize = 15;
    /// Only RF in contact.
    pub const RF: usize = 16;
    /// RF, RH in contact.
    pub const RF_RH: usize = 17;
    /// RF, LH in contact.
    pub const RF_LH: usize = 18;
    /// RF, LH, RH in contact.
    pub const RF_LH_RH: usize = 19;
    /// RF, RM in contact.
    pub const RF_RM: usize = 20;
    /// RF, RM, RH in contact.
    pub const RF_RM_RH: usize = 21;
    /// RF, RM, LH in contact.
    pub const RF_RM_LH: usize = 22;
    /// RF, RM, LH, RH in contact.
    pub const RF_RM_LH_RH: usize = 23;
    /// RF, LM in contact.
    pub const RF_LM: usize = 24;
    /// RF, LM, RH in contact.
    pub const RF_LM_RH: usize = 25;
    /// RF, LM, LH in contact.
    pub const RF_LM_LH: usize = 26;
    /// RF, LM, LH, RH in contact.
    pub const RF_LM_LH_RH: usize = 27;
    /// RF, LM, RM in contact.
    pub const RF_LM_RM: usize = 28;
    /// RF, LM, RM, RH in contact.
    pub const RF_LM_RM_RH: usize = 29;
    /// RF, LM, RM, LH in contact.
    pub const RF_LM_RM_LH: usize = 30;
    /// RF, LM, RM, LH, RH in contact.
    pub const RF_LM_RM_LH_RH: usize = 31;
    /// Only LF in contact.
    pub const LF: usize = 32;
    /// LF, RH in contact.
    pub const LF_RH: usize = 33;
    /// LF, LH in contact.
    pub const LF_LH: usize = 34;
    /// LF, LH, RH in contact.
    pub const LF_LH_RH: usize = 35;
    /// LF, RM in contact.
    pub const LF_RM: usize = 36;
    /// LF, RM, RH in contact.
    pub const LF_RM_RH: usize = 37;
    /// LF, RM, LH in contact.
    pub const LF_RM_LH: usize = 38;
    /// LF, RM, LH, RH in contact.
    pub const LF_RM_LH_RH: usize = 39;
    /// LF, LM in contact.
    pub const LF_LM: usize = 40;
    /// LF, LM, RH in contact.
    pub const LF_LM_RH: usize = 41;
    /// LF, LM, LH in contact.
    pub const LF_LM_LH: usize = 42;
    /// LF, LM, LH, RH in contact.
    pub const LF_LM_LH_RH: usize = 43;
    /// LF, LM, RM in contact.
    pub const LF_LM_RM: usize = 44;
    /// LF, LM, RM, RH in contact.
    pub const LF_LM_RM_RH: usize = 45;
    /// LF, LM, RM, LH in contact.
    pub const LF_LM_RM_LH: usize = 46;
    /// LF, LM, RM, LH, RH in contact.
    pub const LF_LM_RM_LH_RH: usize = 47;
    /// LF, RF in contact.
    pub const LF_RF: usize = 48;
    /// LF, RF, RH in contact.
    pub const LF_RF_RH: usize = 49;
    /// LF, RF, LH in contact.
    pub const LF_RF_LH: usize = 50;
    /// LF, RF, LH, RH in contact.
    pub const LF_RF_LH_RH: usize = 51;
    /// LF, RF, RM in contact.
    pub const LF_RF_RM: usize = 52;
    /// LF, RF, RM, RH in contact.
    pub const LF_RF_RM_RH: usize = 53;
    /// LF, RF, RM, LH in contact.
    pub const LF_RF_RM_LH: usize = 54;
    /// LF, RF, RM, LH, RH in contact.
    pub const LF_RF_RM_LH_RH: usize = 55;
    /// LF, RF, LM in contact.
    pub const LF_RF_LM: usize = 56;
    /// LF, RF, LM, RH in contact.
    pub const LF_RF_LM_RH: usize = 57;
    /// LF, RF, LM, LH in contact.
    pub const LF_RF_LM_LH: usize = 58;
    /// LF, RF, LM, LH, RH in contact.
    pub const LF_RF_LM_LH_RH: usize = 59;
    /// LF, RF, LM, RM in contact.
    pub const LF_RF_LM_RM: usize = 60;
    /// LF, RF, LM, RM, RH in contact.
    pub const LF_RF_LM_RM_RH: usize = 61;
    /// LF, RF, LM, RM, LH in contact.
    pub const LF_RF_LM_RM_LH: usize = 62;
    /// Full stance, all six legs in contact.
    pub const STANCE: usize = 63;
}

// ─── Tests ──────────────────────────────────────────────────────────────────
