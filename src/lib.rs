//! # stance-codec
//!
//! Contact-mode codec for legged robots.
//!
//! A legged robot's discrete contact state — which feet are on the ground at a
//! given instant — travels through a motion-planning stack in three different
//! shapes:
//!
//! - a per-leg boolean **stance vector** (`true` = foot loaded, `false` = leg
//!   in swing), produced by perception and gait planning;
//! - a compact integer **mode number** in `[0, 2^L)` for `L` legs, consumed by
//!   switched-dynamics trajectory optimization as the discrete label of a
//!   hybrid system;
//! - a symbolic **mode name** such as `"LF_RF_LH"`, used by logging,
//!   visualization, and gait-definition files.
//!
//! This crate is the single source of truth for converting between the three.
//! The conversions are bijective and order-preserving: bit `(L-1-i)` of the
//! mode number equals entry `i` of the stance vector, so the leg at ordering
//! position 0 always owns the highest-order bit. Any component that packs or
//! parses contact states by hand risks silently corrupting the contact
//! schedule consumed downstream; route every conversion through here instead.
//!
//! ## The pipeline
//!
//! ```text
//! StanceVector ──pack──▶ ModeNumber ──table──▶ ModeName
//!      ▲                  │      ▲               │
//!      └─────unpack───────┘      └────inverse────┘
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`legs`] | [`LegVocabulary`] | Define your leg ordering convention |
//! | [`stance`] | [`StanceVector`] | Bit packing/unpacking arithmetic |
//! | [`codec`] | [`ModeCodec`] | Name table with generated inverse lookup |
//! | [`error`] | [`ModeError`] | The two recoverable failure conditions |
//! | [`hexapod`] | [`hexapod::HexapodLegs`], [`hexapod::Leg`] | Reference 6-leg vocabulary and named mode constants |
//! | [`snapshot`] | [`snapshot::ModeTableSnapshot`] | Serializable table export (requires `serde` feature) |
//!
//! ## Quick start
//!
//! ```rust
//! use stance_codec::hexapod::{self, HexapodCodec};
//!
//! let codec = HexapodCodec::new();
//!
//! // Only the left-front leg in contact.
//! let stance = [true, false, false, false, false, false];
//! let mode = codec.stance_to_mode(&stance);
//! assert_eq!(mode, hexapod::modes::LF);
//! assert_eq!(codec.mode_to_name(mode), "LF");
//! assert_eq!(codec.name_to_mode("LF").unwrap(), 32);
//! ```
//!
//! ## Failure semantics
//!
//! Packing is total. Unpacking rejects mode numbers at or above `2^L` with
//! [`ModeError::OutOfRange`] rather than masking the low bits — an upstream
//! bit-order bug should surface immediately, not produce a plausible-looking
//! wrong stance. Name lookup never fails (unknown numbers render as
//! `"MODE_<n>"`); name *parsing* is the one fallible path and returns
//! [`ModeError::UnknownMode`] carrying the offending string. Every error is a
//! value returned to the caller; a malformed gait-definition entry degrades a
//! single phase, never the whole motion plan.
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default and requires only `alloc` (the name
//! table is heap-built once per codec). Enable the `std` feature for the
//! process-wide [`hexapod::codec()`] instance. Enable the `serde` feature for
//! [`snapshot`] support.
//!
//! [`hexapod::codec()`]: hexapod::codec

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// Pull in std when the feature is enabled (for the OnceLock-backed global codec).
#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

pub mod codec;
pub mod error;
pub mod hexapod;
pub mod legs;
pub mod stance;

#[cfg(feature = "serde")]
pub mod snapshot;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use codec::ModeCodec;
pub use error::ModeError;
pub use legs::LegVocabulary;
pub use stance::StanceVector;
