//! The mode codec — canonical name table with a generated inverse.
//!
//! Hand-maintained symmetric tables (number→name next to name→number) are a
//! classic source of drift: one side gets edited, the other does not, and the
//! mismatch corrupts every gait definition that passes through it. This
//! module keeps exactly one source of truth. [`ModeCodec::new`] generates the
//! forward table from the packing formula in [`crate::stance`] and the leg
//! labels in the [`LegVocabulary`], then derives the inverse map from that
//! forward table. Neither view is ever authored by hand.
//!
//! Both tables are built once at construction and never mutated afterwards;
//! every accessor takes `&self`, so a constructed codec can be shared freely
//! across threads (see [`crate::hexapod::codec`] for the `OnceLock`-backed
//! process-wide instance).

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::marker::PhantomData;

use hashbrown::HashMap;

use crate::error::ModeError;
use crate::legs::LegVocabulary;
use crate::stance::{self, StanceVector};

// ─── Canonical names ────────────────────────────────────────────────────────

/// Canonical name of the all-swing mode (mode number 0).
pub const FLIGHT_NAME: &str = "FLY";

/// Canonical name of the all-stance mode (mode number `2^N − 1`).
pub const FULL_STANCE_NAME: &str = "STANCE";

/// Prefix of the generic fallback form for numbers outside the name table.
pub const FALLBACK_PREFIX: &str = "MODE_";

/// Compose the canonical name for one mode from the vocabulary's labels.
///
/// Stance-leg labels joined by `_` in ordering order, with the two special
/// endpoints [`FLIGHT_NAME`] and [`FULL_STANCE_NAME`].
fn compose_name<V: LegVocabulary<N>, const N: usize>(mode: usize) -> String {
    if mode == 0 {
        return String::from(FLIGHT_NAME);
    }
    if mode == V::MODE_COUNT - 1 {
        return String::from(FULL_STANCE_NAME);
    }
    let mut name = String::new();
    for (i, label) in V::LABELS.iter().enumerate() {
        if mode & (1 << (N - 1 - i)) != 0 {
            if !name.is_empty() {
                name.push('_');
            }
            name.push_str(label);
        }
    }
    name
}

// ─── ModeCodec ──────────────────────────────────────────────────────────────

/// Bidirectional stance ↔ mode ↔ name converter for one leg vocabulary.
///
/// Holds the leg ordering convention (as the type parameter `V`) and the two
/// generated table views. Construction is the only moment anything is
/// computed; afterwards the codec is immutable and every operation is a pure
/// lookup or pure arithmetic.
///
/// ```rust
/// use stance_codec::hexapod::HexapodCodec;
///
/// let codec = HexapodCodec::new();
/// assert_eq!(codec.mode_to_name(0), "FLY");
/// assert_eq!(codec.mode_to_name(63), "STANCE");
/// assert_eq!(codec.name_to_mode("LF_RF_LH").unwrap(), 50);
/// ```
#[derive(Clone, Debug)]
pub struct ModeCodec<V: LegVocabulary<N>, const N: usize> {
    /// Forward view: canonical name for every mode in `[0, 2^N)`, dense.
    names: Vec<String>,
    /// Inverse view, derived from `names` — never authored independently.
    modes_by_name: HashMap<String, usize>,
    _vocabulary: PhantomData<V>,
}

impl<V: LegVocabulary<N>, const N: usize> ModeCodec<V, N> {
    /// Build the codec for vocabulary `V`, generating both table views.
    pub fn new() -> Self {
        let names: Vec<String> = (0..V::MODE_COUNT).map(compose_name::<V, N>).collect();

        let mut modes_by_name = HashMap::with_capacity(names.len());
        for (mode, name) in names.iter().enumerate() {
            let previous = modes_by_name.insert(name.clone(), mode);
            debug_assert!(
                previous.is_none(),
                "duplicate mode name {name:?} — leg labels must be distinct"
            );
        }

        Self {
            names,
            modes_by_name,
            _vocabulary: PhantomData,
        }
    }

    /// Number of distinct contact modes: `2^N`.
    pub fn mode_count(&self) -> usize {
        V::MODE_COUNT
    }

    /// Pack a stance vector into its mode number. Total, never fails.
    pub fn stance_to_mode(&self, stance: &StanceVector<N>) -> usize {
        stance::stance_to_mode(stance)
    }

    /// Unpack a mode number into its stance vector.
    ///
    /// Rejects mode numbers at or above `2^N` with [`ModeError::OutOfRange`].
    pub fn mode_to_stance(&self, mode: usize) -> Result<StanceVector<N>, ModeError> {
        stance::mode_to_stance(mode)
    }

    /// Canonical name of a mode number. Never fails.
    ///
    /// In-range numbers borrow from the table; numbers outside it render as
    /// the owned fallback form `"MODE_<n>"`.
    pub fn mode_to_name(&self, mode: usize) -> Cow<'_, str> {
        match self.names.get(mode) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(format!("{FALLBACK_PREFIX}{mode}")),
        }
    }

    /// Parse a mode name back to its mode number.
    ///
    /// Resolution order: exact inverse-table lookup, then the fallback form
    /// `"MODE_<digits>"`. The fallback parse is deliberately not
    /// range-checked — `mode_to_name` and `name_to_mode` must round-trip for
    /// synthetic out-of-table values, and composing with [`Self::mode_to_stance`]
    /// restores range enforcement. Anything else is [`ModeError::UnknownMode`],
    /// carrying the input for diagnostics.
    pub fn name_to_mode(&self, name: &str) -> Result<usize, ModeError> {
        if let Some(&mode) = self.modes_by_name.get(name) {
            return Ok(mode);
        }
        if let Some(digits) = name.strip_prefix(FALLBACK_PREFIX) {
            // `parse` alone would accept a leading `+`; require pure digits.
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(mode) = digits.parse::<usize>() {
                    return Ok(mode);
                }
            }
        }
        Err(ModeError::UnknownMode(String::from(name)))
    }

    /// Canonical name of a stance vector. Total — every stance is in the table.
    pub fn stance_to_name(&self, stance: &StanceVector<N>) -> &str {
        &self.names[stance::stance_to_mode(stance)]
    }

    /// Parse a mode name straight to a stance vector.
    ///
    /// Composes [`Self::name_to_mode`] and [`Self::mode_to_stance`], so an
    /// out-of-range `"MODE_<n>"` fails here even though the parse succeeds.
    pub fn name_to_stance(&self, name: &str) -> Result<StanceVector<N>, ModeError> {
        let mode = self.name_to_mode(name)?;
        self.mode_to_stance(mode)
    }

    /// Iterate over the full table as `(mode, canonical name)` pairs.
    pub fn names(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().enumerate().map(|(mode, name)| (mode, name.as_str()))
    }
}

impl<V: LegVocabulary<N>, const N: usize> Default for ModeCodec<V, N> {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexapod::HexapodCodec;
    use alloc::collections::BTreeSet;
    use alloc::string::ToString;

    #[test]
    fn test_endpoint_names() {
        let codec = HexapodCodec::new();
        assert_eq!(codec.mode_to_name(0), "FLY");
        assert_eq!(codec.mode_to_name(63), "STANCE");
    }

    #[test]
    fn test_single_leg_names() {
        let codec = HexapodCodec::new();
        let cases: &[(usize, &str)] = &[
            (32, "LF"),
            (16, "RF"),
            (8, "LM"),
            (4, "RM"),
            (2, "LH"),
            (1, "RH"),
        ];
        for &(mode, expected) in cases {
            assert_eq!(codec.mode_to_name(mode), expected, "mode {mode}");
        }
    }

    #[test]
    fn test_composed_names_follow_ordering_order() {
        let codec = HexapodCodec::new();
        // 50 = 0b110010: LF, RF, LH in stance.
        assert_eq!(codec.mode_to_name(50), "LF_RF_LH");
        // 38 = 0b100110: LF, RM, LH, one tripod of the alternating gait.
        assert_eq!(codec.mode_to_name(38), "LF_RM_LH");
        // 25 = 0b011001: RF, LM, RH, the other tripod.
        assert_eq!(codec.mode_to_name(25), "RF_LM_RH");
    }

    #[test]
    fn test_name_round_trip_all_modes() {
        let codec = HexapodCodec::new();
        for mode in 0..codec.mode_count() {
            let name = codec.mode_to_name(mode);
            assert_eq!(
                codec.name_to_mode(&name).unwrap(),
                mode,
                "name round trip broke at mode {mode} ({name})"
            );
        }
    }

    #[test]
    fn test_no_duplicate_names_in_table() {
        let codec = HexapodCodec::new();
        let distinct: BTreeSet<&str> = codec.names().map(|(_, name)| name).collect();
        assert_eq!(distinct.len(), codec.mode_count());
    }

    #[test]
    fn test_table_is_complete_over_the_mode_range() {
        let codec = HexapodCodec::new();
        let modes: Vec<usize> = codec.names().map(|(mode, _)| mode).collect();
        assert_eq!(modes, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn test_fallback_name_for_out_of_table_mode() {
        let codec = HexapodCodec::new();
        assert_eq!(codec.mode_to_name(64), "MODE_64");
        assert_eq!(codec.mode_to_name(1000), "MODE_1000");
    }

    #[test]
    fn test_fallback_round_trip() {
        let codec = HexapodCodec::new();
        for mode in [64usize, 65, 255, 4096] {
            let name = codec.mode_to_name(mode).into_owned();
            assert_eq!(codec.name_to_mode(&name).unwrap(), mode);
        }
    }

    #[test]
    fn test_fallback_parse_accepts_in_range_numbers_too() {
        let codec = HexapodCodec::new();
        // "MODE_5" is not the canonical name of mode 5 ("RM_RH") but still parses.
        assert_eq!(codec.name_to_mode("MODE_5").unwrap(), 5);
    }

    #[test]
    fn test_unknown_name_is_an_error_carrying_the_input() {
        let codec = HexapodCodec::new();
        let cases = ["not_a_real_mode", "", "LF_", "_RH", "lf", "LF__RH"];
        for name in cases {
            match codec.name_to_mode(name) {
                Err(ModeError::UnknownMode(s)) => assert_eq!(s, name),
                other => panic!("{name:?} should be UnknownMode, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_fallback_forms_are_unknown() {
        let codec = HexapodCodec::new();
        let cases = [
            "MODE_",
            "MODE_abc",
            "MODE_12x",
            "MODE_+5",
            "MODE_-1",
            "mode_3",
            "MODE_99999999999999999999999999", // overflows usize
        ];
        for name in cases {
            assert!(
                matches!(codec.name_to_mode(name), Err(ModeError::UnknownMode(_))),
                "{name:?} should be UnknownMode"
            );
        }
    }

    #[test]
    fn test_name_ordering_is_not_commutative_with_lookup() {
        // Names are defined in ordering order only; a reordered label string
        // is not a canonical name.
        let codec = HexapodCodec::new();
        assert!(codec.name_to_mode("RH_LF").is_err());
        assert_eq!(codec.name_to_mode("LF_RH").unwrap(), 33);
    }

    #[test]
    fn test_stance_to_name_always_in_table() {
        let codec = HexapodCodec::new();
        assert_eq!(codec.stance_to_name(&[false; 6]), "FLY");
        assert_eq!(codec.stance_to_name(&[true; 6]), "STANCE");
        assert_eq!(
            codec.stance_to_name(&[true, true, false, false, true, false]),
            "LF_RF_LH"
        );
    }

    #[test]
    fn test_name_to_stance_composition() {
        let codec = HexapodCodec::new();
        assert_eq!(
            codec.name_to_stance("LF_RM_LH").unwrap(),
            [true, false, false, true, true, false]
        );
        // The fallback parse succeeds for "MODE_64" but unpacking then rejects it.
        assert!(matches!(
            codec.name_to_stance("MODE_64"),
            Err(ModeError::OutOfRange { mode: 64, .. })
        ));
    }

    #[test]
    fn test_small_vocabulary_endpoints() {
        use crate::legs::LegVocabulary;

        #[derive(Clone, Copy, Debug)]
        struct Biped;
        impl LegVocabulary<2> for Biped {
            const LABELS: [&'static str; 2] = ["L", "R"];
        }

        let codec: ModeCodec<Biped, 2> = ModeCodec::new();
        assert_eq!(codec.mode_count(), 4);
        assert_eq!(codec.mode_to_name(0), "FLY");
        assert_eq!(codec.mode_to_name(1), "R");
        assert_eq!(codec.mode_to_name(2), "L");
        assert_eq!(codec.mode_to_name(3), "STANCE");
        assert_eq!(codec.name_to_mode("L").unwrap(), 2);
        assert_eq!(
            codec.name_to_mode("L_R").unwrap_err(),
            ModeError::UnknownMode("L_R".to_string())
        );
    }

    #[test]
    fn test_default_matches_new() {
        let a = HexapodCodec::new();
        let b = HexapodCodec::default();
        for mode in 0..a.mode_count() {
            assert_eq!(a.mode_to_name(mode), b.mode_to_name(mode));
        }
    }
}
