//! # Hexapod tripod gait — the codec end to end
//!
//! A hexapod's workhorse gait is the alternating tripod: three legs swing
//! while the other three — one front, the opposite middle, the same-side
//! hind — keep a stable support triangle on the ground. The planner describes
//! such a gait as a cyclic sequence of contact modes; the trajectory
//! optimizer consumes the same sequence as integer mode numbers; the log
//! viewer shows it as names.
//!
//! This example walks one gait cycle through all three representations:
//!
//! ```text
//! STANCE → LF_RM_LH → STANCE → RF_LM_RH → STANCE ...
//! ```
//!
//! No hardware required — the stance vectors are written out in code.
//!
//! ## Running this example
//!
//! ```
//! cargo run --example hexapod
//! ```

use stance_codec::hexapod::{modes, HexapodCodec, HexapodStance, Leg};
use stance_codec::stance::closed_contact_count;

fn main() {
    println!("stance-codec — hexapod tripod gait walkthrough");
    println!("==============================================\n");

    // The codec builds its name table and inverse lookup once, here.
    let codec = HexapodCodec::new();

    // ── One gait cycle as stance vectors ─────────────────────────────────────
    //
    // Ordering convention {LF, RF, LM, RM, LH, RH}. Tripod A is
    // {LF, RM, LH}; tripod B is {RF, LM, RH}. Full stance between swings.
    let tripod_a: HexapodStance = [true, false, false, true, true, false];
    let tripod_b: HexapodStance = [false, true, true, false, false, true];
    let full_stance: HexapodStance = [true; 6];

    let cycle: &[(&str, HexapodStance)] = &[
        ("touchdown", full_stance),
        ("swing B", tripod_a),
        ("touchdown", full_stance),
        ("swing A", tripod_b),
    ];

    println!("phase       mode  name        legs in contact");
    println!("----------  ----  ----------  ---------------");
    for (phase, stance) in cycle {
        let mode = codec.stance_to_mode(stance);
        println!(
            "{:<10}  {:>4}  {:<10}  {}",
            phase,
            mode,
            codec.mode_to_name(mode),
            closed_contact_count(stance),
        );
    }

    // The tripod modes carry well-known numbers.
    assert_eq!(codec.stance_to_mode(&tripod_a), modes::LF_RM_LH);
    assert_eq!(codec.stance_to_mode(&tripod_b), modes::RF_LM_RH);

    // ── Round trip through the optimizer's view ──────────────────────────────
    //
    // The optimizer hands back mode numbers; unpack them to see which legs
    // the whole-body controller must load.
    println!("\nmode 38 unpacked:");
    let stance = codec.mode_to_stance(modes::LF_RM_LH).unwrap();
    for leg in Leg::ALL {
        println!(
            "  {:<2}  {}",
            leg.label(),
            if stance[leg.index()] { "stance" } else { "swing" }
        );
    }

    // ── Names from a gait-definition file ────────────────────────────────────
    //
    // Gait files name their phases; unknown strings degrade that one phase,
    // never the plan.
    println!("\nparsing gait-definition phase names:");
    for name in ["STANCE", "LF_RM_LH", "MODE_38", "LF_HR"] {
        match codec.name_to_mode(name) {
            Ok(mode) => println!("  {name:<10} -> mode {mode}"),
            Err(err) => println!("  {name:<10} -> skipped ({err})"),
        }
    }
}
