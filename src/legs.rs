//! Generic leg vocabulary — the platform-independent ordering convention.
//!
//! Every representation the codec produces (stance vector, mode number, mode
//! name) is indexed by the same fixed leg ordering. That ordering is a
//! process-wide constant: it is decided once per robot platform, at compile
//! time, and shared by every component that touches contact states.
//!
//! # Implementing for a new platform
//!
//! ```rust
//! use stance_codec::legs::LegVocabulary;
//! use stance_codec::codec::ModeCodec;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! pub struct QuadrupedLegs;
//!
//! impl LegVocabulary<4> for QuadrupedLegs {
//!     const LABELS: [&'static str; 4] = ["LF", "RF", "LH", "RH"];
//! }
//!
//! let codec: ModeCodec<QuadrupedLegs, 4> = ModeCodec::new();
//! assert_eq!(codec.mode_to_name(0b1001), "LF_RH");
//! ```
//!
//! # Invariants
//!
//! - The ordering never changes for the lifetime of the process.
//! - The leg at ordering position 0 owns the *highest*-order of the `N` mode
//!   bits; the leg at position `N - 1` owns bit 0.
//! - Labels are non-empty, contain no `_`, and are pairwise distinct —
//!   otherwise composed mode names would not parse back unambiguously.

/// Platform-independent leg ordering trait.
///
/// Implementors define the fixed assignment of leg labels to bit/array
/// positions for one robot platform. The codec is generic over this trait —
/// the same packing arithmetic and table construction work for any leg count
/// as long as the platform can name its legs in a fixed order.
///
/// The const generic `N` is the number of legs. Mode numbers for this
/// vocabulary occupy `[0, 2^N)`, so `N` is expected to stay small (the
/// reference hexapod uses 6; anything beyond 16 legs makes the full name
/// table impractically large).
pub trait LegVocabulary<const N: usize> {
    /// Leg labels in ordering-convention order.
    ///
    /// `LABELS[0]` is the leg that contributes the highest-order mode bit.
    /// Labels must be non-empty, `_`-free, and pairwise distinct.
    const LABELS: [&'static str; N];

    /// Number of legs (equal to the const generic `N`).
    /// Provided as an associated constant for ergonomic access at the type level.
    const LEG_COUNT: usize = N;

    /// Number of distinct contact modes: `2^N`.
    const MODE_COUNT: usize = 1 << N;

    /// Label of the leg at ordering position `index`, or `None` past the end.
    fn label(index: usize) -> Option<&'static str> {
        Self::LABELS.get(index).copied()
    }
}
