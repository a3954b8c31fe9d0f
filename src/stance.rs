//! Stance vectors and the bit packing/unpacking arithmetic.
//!
//! This module is the formula-driven half of the codec: a stance vector and a
//! mode number are the same information in two shapes, related by a fixed
//! bit-order contract, and the two functions here are exact inverses of each
//! other. The name table in [`crate::codec`] is built *from* this arithmetic,
//! never alongside it — there is exactly one packing formula in the crate.
//!
//! # The bit-order contract
//!
//! For an `N`-leg ordering, entry `i` of the stance vector maps to bit
//! `N - 1 - i` of the mode number. The leg at ordering position 0 owns the
//! highest of the `N` bits. For the reference hexapod ordering
//! `{LF, RF, LM, RM, LH, RH}`:
//!
//! ```text
//! bit:   5    4    3    2    1    0
//! leg:  LF   RF   LM   RM   LH   RH
//! ```
//!
//! so "only LF in contact" is mode 32 and "only RH in contact" is mode 1.
//!
//! # Invariants
//!
//! - `mode_to_stance(stance_to_mode(s)) == s` for every stance vector `s`.
//! - `stance_to_mode(mode_to_stance(n)) == n` for every `n` in `[0, 2^N)`.
//! - Packing over all `2^N` stance vectors covers `[0, 2^N)` with no
//!   collisions and no gaps.

use crate::error::ModeError;

/// An ordered sequence of per-leg contact flags, one per ordering position.
///
/// `true` = leg in stance (foot loaded), `false` = leg in swing (airborne).
/// The length is the platform's leg count and never changes at runtime.
pub type StanceVector<const N: usize> = [bool; N];

/// Pack a stance vector into its mode number.
///
/// Total function: every length-`N` stance vector maps to exactly one mode
/// number in `[0, 2^N)`; there is no error case.
///
/// ```rust
/// use stance_codec::stance::stance_to_mode;
///
/// // Hexapod ordering {LF, RF, LM, RM, LH, RH}: only RH in contact.
/// assert_eq!(stance_to_mode(&[false, false, false, false, false, true]), 1);
/// ```
pub fn stance_to_mode<const N: usize>(stance: &StanceVector<N>) -> usize {
    let mut mode = 0;
    for (i, &in_contact) in stance.iter().enumerate() {
        if in_contact {
            mode |= 1 << (N - 1 - i);
        }
    }
    mode
}

/// Unpack a mode number into its stance vector.
///
/// Inverse of [`stance_to_mode`]. Mode numbers at or above `2^N` are a
/// contract violation by the caller — their high bits carry no meaning — and
/// are rejected with [`ModeError::OutOfRange`] rather than masked, so that an
/// upstream bit-order bug surfaces immediately instead of producing a
/// plausible-looking wrong stance.
///
/// ```rust
/// use stance_codec::stance::mode_to_stance;
///
/// let stance = mode_to_stance::<6>(32).unwrap();
/// assert_eq!(stance, [true, false, false, false, false, false]); // only LF
/// assert!(mode_to_stance::<6>(64).is_err());
/// ```
pub fn mode_to_stance<const N: usize>(mode: usize) -> Result<StanceVector<N>, ModeError> {
    let mode_count = 1usize << N;
    if mode >= mode_count {
        return Err(ModeError::OutOfRange {
            mode,
            leg_count: N,
            mode_count,
        });
    }
    let mut stance = [false; N];
    for (i, flag) in stance.iter_mut().enumerate() {
        *flag = mode & (1 << (N - 1 - i)) != 0;
    }
    Ok(stance)
}

/// Number of legs in stance (closed contacts) in a stance vector.
pub fn closed_contact_count<const N: usize>(stance: &StanceVector<N>) -> usize {
    stance.iter().filter(|&&in_contact| in_contact).count()
}

/// Number of closed contacts encoded in a mode number.
///
/// Range-checked like [`mode_to_stance`]: counting the set bits of an
/// out-of-range mode would silently include meaningless high bits.
pub fn mode_closed_contact_count<const N: usize>(mode: usize) -> Result<usize, ModeError> {
    let mode_count = 1usize << N;
    if mode >= mode_count {
        return Err(ModeError::OutOfRange {
            mode,
            leg_count: N,
            mode_count,
        });
    }
    Ok(mode.count_ones() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hexapod ordering {LF, RF, LM, RM, LH, RH} throughout.
    const LEGS: usize = 6;

    #[test]
    fn test_all_swing_packs_to_zero() {
        assert_eq!(stance_to_mode(&[false; LEGS]), 0);
    }

    #[test]
    fn test_all_stance_packs_to_max() {
        assert_eq!(stance_to_mode(&[true; LEGS]), 63);
    }

    #[test]
    fn test_single_leg_bit_positions() {
        // Each ordering position owns exactly one bit, highest first.
        let cases: &[(usize, usize)] = &[
            (0, 32), // LF
            (1, 16), // RF
            (2, 8),  // LM
            (3, 4),  // RM
            (4, 2),  // LH
            (5, 1),  // RH
        ];
        for &(leg, expected_mode) in cases {
            let mut stance = [false; LEGS];
            stance[leg] = true;
            assert_eq!(
                stance_to_mode(&stance),
                expected_mode,
                "leg at ordering index {} should own mode bit {}",
                leg,
                LEGS - 1 - leg
            );
        }
    }

    #[test]
    fn test_pack_unpack_round_trip_all_modes() {
        for mode in 0..64 {
            let stance = mode_to_stance::<LEGS>(mode).unwrap();
            assert_eq!(
                stance_to_mode(&stance),
                mode,
                "round trip broke at mode {mode}"
            );
        }
    }

    #[test]
    fn test_unpack_pack_round_trip_all_stances() {
        // Enumerate all 2^6 stance vectors by unpacking each mode once, then
        // confirm the pair of functions is a bijection in the other direction.
        for mode in 0..64 {
            let stance = mode_to_stance::<LEGS>(mode).unwrap();
            let back = mode_to_stance::<LEGS>(stance_to_mode(&stance)).unwrap();
            assert_eq!(back, stance);
        }
    }

    #[test]
    fn test_range_totality_no_collisions() {
        let mut seen = [false; 64];
        for mode in 0..64 {
            let stance = mode_to_stance::<LEGS>(mode).unwrap();
            let packed = stance_to_mode(&stance);
            assert!(!seen[packed], "mode {packed} produced twice");
            seen[packed] = true;
        }
        assert!(seen.iter().all(|&hit| hit), "packing left gaps in [0, 64)");
    }

    #[test]
    fn test_out_of_range_mode_is_rejected_not_masked() {
        for mode in [64, 65, 100, usize::MAX] {
            match mode_to_stance::<LEGS>(mode) {
                Err(ModeError::OutOfRange {
                    mode: m,
                    leg_count,
                    mode_count,
                }) => {
                    assert_eq!(m, mode);
                    assert_eq!(leg_count, 6);
                    assert_eq!(mode_count, 64);
                }
                other => panic!("mode {mode} should be OutOfRange, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_generic_over_leg_count() {
        // Quadruped ordering {LF, RF, LH, RH}: LF and RH in contact.
        let stance: StanceVector<4> = [true, false, false, true];
        assert_eq!(stance_to_mode(&stance), 0b1001);
        assert_eq!(mode_to_stance::<4>(0b1001).unwrap(), stance);
        // 16 is out of range for four legs even though it is fine for six.
        assert!(mode_to_stance::<4>(16).is_err());
    }

    #[test]
    fn test_closed_contact_count() {
        assert_eq!(closed_contact_count(&[false; LEGS]), 0);
        assert_eq!(closed_contact_count(&[true; LEGS]), 6);
        assert_eq!(
            closed_contact_count(&[true, false, true, false, true, false]),
            3
        );
    }

    #[test]
    fn test_mode_closed_contact_count_matches_stance() {
        for mode in 0..64 {
            let stance = mode_to_stance::<LEGS>(mode).unwrap();
            assert_eq!(
                mode_closed_contact_count::<LEGS>(mode).unwrap(),
                closed_contact_count(&stance)
            );
        }
        assert!(mode_closed_contact_count::<LEGS>(64).is_err());
    }
}
