//! Python FFI bindings via PyO3.
//!
//! Exposes the codec to Python for the fixed six-leg reference vocabulary
//! `{LF, RF, LM, RM, LH, RH}`. Gait-definition and visualization tooling is
//! commonly written in Python; these bindings let that tooling resolve mode
//! names through the same tables the planner uses instead of re-implementing
//! the packing formula. For custom leg counts, use the Rust API directly.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from stance_codec import ModeCodec
//!
//! codec = ModeCodec()
//!
//! # stance: 6 bools in ordering order {LF, RF, LM, RM, LH, RH}
//! mode = codec.stance_to_mode([True, False, False, True, True, False])
//! print(mode)                        # 38
//! print(codec.mode_to_name(mode))    # "LF_RM_LH"
//! print(codec.name_to_mode("STANCE"))  # 63
//! print(codec.mode_to_stance(63))    # [True, True, True, True, True, True]
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::ModeError;
use crate::hexapod::{HexapodCodec, HexapodLegs};
use crate::legs::LegVocabulary;

/// Leg count of the Python-facing surface.
/// Matches the reference hexapod vocabulary. Use the Rust API for other counts.
const PY_LEGS: usize = 6;

fn mode_error_to_py(err: ModeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn stance_from_py(flags: &[bool]) -> PyResult<[bool; PY_LEGS]> {
    <[bool; PY_LEGS]>::try_from(flags).map_err(|_| {
        PyValueError::new_err(format!(
            "stance must have exactly {PY_LEGS} entries, got {}",
            flags.len()
        ))
    })
}

// ── ModeCodec ────────────────────────────────────────────────────────────────

/// Contact-mode codec for the six-leg reference ordering {LF, RF, LM, RM, LH, RH}.
#[pyclass(name = "ModeCodec")]
pub struct PyModeCodec {
    inner: HexapodCodec,
}

#[pymethods]
impl PyModeCodec {
    /// Create a codec. The name tables are built once here.
    #[new]
    pub fn new() -> Self {
        Self {
            inner: HexapodCodec::new(),
        }
    }

    /// Pack a stance vector into its mode number.
    ///
    /// Args:
    ///     stance: 6 bools in ordering order, True = leg in contact
    ///
    /// Returns:
    ///     Mode number in [0, 64)
    pub fn stance_to_mode(&self, stance: Vec<bool>) -> PyResult<usize> {
        let stance = stance_from_py(&stance)?;
        Ok(self.inner.stance_to_mode(&stance))
    }

    /// Unpack a mode number into its stance vector.
    ///
    /// Raises ValueError for mode numbers outside [0, 64).
    pub fn mode_to_stance(&self, mode: usize) -> PyResult<Vec<bool>> {
        let stance = self.inner.mode_to_stance(mode).map_err(mode_error_to_py)?;
        Ok(stance.to_vec())
    }

    /// Canonical name of a mode number ("FLY", "LF_RM_LH", ..., "STANCE").
    ///
    /// Numbers outside the table render as "MODE_<n>"; this never raises.
    pub fn mode_to_name(&self, mode: usize) -> String {
        self.inner.mode_to_name(mode).into_owned()
    }

    /// Parse a mode name (canonical or "MODE_<n>" fallback) to its number.
    ///
    /// Raises ValueError for unknown names.
    pub fn name_to_mode(&self, name: &str) -> PyResult<usize> {
        self.inner.name_to_mode(name).map_err(mode_error_to_py)
    }

    /// Leg labels in ordering order.
    pub fn leg_labels(&self) -> Vec<String> {
        HexapodLegs::LABELS.iter().map(|label| label.to_string()).collect()
    }

    /// Number of distinct contact modes (64).
    pub fn mode_count(&self) -> usize {
        self.inner.mode_count()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> &'static str {
        "ModeCodec(legs=['LF', 'RF', 'LM', 'RM', 'LH', 'RH'])"
    }
}

impl Default for PyModeCodec {
    fn default() -> Self {
        Self::new()
    }
}

// ── Module entry point ────────────────────────────────────────────────────────

/// stance-codec Python bindings.
///
/// Bijective stance / mode number / mode name conversion for the six-leg
/// reference ordering. For custom leg counts use the Rust API directly.
#[pymodule]
pub fn stance_codec(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyModeCodec>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("LEG_COUNT", PY_LEGS)?;
    Ok(())
}
