//! The codec's error taxonomy.
//!
//! Only two things can go wrong in this crate, and both are recoverable
//! values returned to the caller:
//!
//! - [`ModeError::OutOfRange`] — a mode number at or above `2^N` handed to an
//!   unpacking operation. The high bits of such a value carry no meaning, so
//!   the codec rejects it outright instead of masking: a caller that produced
//!   it has a bit-order bug that should surface immediately, not a stance
//!   vector that merely looks plausible.
//! - [`ModeError::UnknownMode`] — a mode name that is neither in the table
//!   nor a well-formed `"MODE_<digits>"` fallback string. Carries the
//!   offending string for diagnostics.
//!
//! Everything else in the crate is total by construction (closed
//! integer/boolean domains) and has no error path.

use alloc::string::String;
use thiserror::Error;

/// Error type for codec operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModeError {
    /// Mode number outside `[0, 2^N)` for an `N`-leg vocabulary.
    #[error("mode number {mode} outside [0, {mode_count}) for {leg_count} legs")]
    OutOfRange {
        /// The rejected mode number.
        mode: usize,
        /// Number of legs in the vocabulary the mode was checked against.
        leg_count: usize,
        /// Number of valid modes (`2^leg_count`).
        mode_count: usize,
    },

    /// Mode name not in the table and not a parseable `"MODE_<digits>"` form.
    #[error("unknown mode name: {0:?}")]
    UnknownMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn test_out_of_range_display_names_the_bounds() {
        let err = ModeError::OutOfRange {
            mode: 64,
            leg_count: 6,
            mode_count: 64,
        };
        assert_eq!(
            format!("{err}"),
            "mode number 64 outside [0, 64) for 6 legs"
        );
    }

    #[test]
    fn test_unknown_mode_display_carries_the_offending_string() {
        let err = ModeError::UnknownMode("not_a_real_mode".to_string());
        let rendered = format!("{err}");
        assert!(
            rendered.contains("not_a_real_mode"),
            "diagnostic should quote the input, got {rendered:?}"
        );
    }
}
