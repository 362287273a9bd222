//! Simulate command

use crate::SimulateArgs;
use anyhow::{Context, Result};
use dichroma_color::Simulator;

use super::{format_hex, parse_color};

pub fn run(args: SimulateArgs, simulator: &Simulator, verbose: u8) -> Result<()> {
    for arg in &args.colors {
        let rgb = parse_color(arg)?;
        let sim = simulator
            .simulate_detailed(rgb)
            .with_context(|| format!("Cannot simulate '{arg}'"))?;

        let mut flags = String::new();
        if sim.reprojected {
            flags.push_str(" [reprojected]");
        }
        if sim.clamped {
            flags.push_str(" [clamped]");
        }
        println!(
            "{} {} -> {} {}{}",
            format_hex(sim.input),
            sim.input,
            format_hex(sim.output),
            sim.output,
            flags
        );

        if verbose > 0 {
            let xyy = |v: dichroma_core::Xyy| format!("({:.5}, {:.5}, {:.5})", v.x, v.y, v.luminance);
            println!("  input xyY:     {}", xyy(sim.input_xyy));
            println!("  solved xyY:    {}", xyy(sim.solved));
            println!("  corrected xyY: {}", xyy(sim.corrected));
        }
    }
    Ok(())
}
