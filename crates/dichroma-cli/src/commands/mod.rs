//! CLI command implementations

pub mod curve;
pub mod image;
pub mod simulate;
pub mod sweep;

use anyhow::{Context, Result, bail};
use dichroma_color::{Dichromacy, Simulator};
use dichroma_core::{Rgb, Rgba8};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Builds the simulator for `--profile`, or the shared protanopia one.
pub fn load_simulator(profile: Option<&Path>) -> Result<Simulator> {
    let Some(path) = profile else {
        return Ok(Simulator::protanopia().clone());
    };
    let dichromacy = Dichromacy::load(path)
        .with_context(|| format!("Failed to load profile: {}", path.display()))?;
    Simulator::new(dichromacy).with_context(|| format!("Unusable profile: {}", path.display()))
}

/// Parses `#rrggbb`, `rrggbb` or `r,g,b`.
pub fn parse_color(s: &str) -> Result<Rgb> {
    let s = s.trim();
    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            bail!("Expected r,g,b with three channels, got '{s}'");
        }
        let mut channels = [0.0; 3];
        for (dst, part) in channels.iter_mut().zip(&parts) {
            *dst = part
                .parse::<f64>()
                .with_context(|| format!("Invalid channel '{part}' in '{s}'"))?;
        }
        return Ok(Rgb::from_array(channels));
    }

    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        bail!("Expected #rrggbb, rrggbb or r,g,b, got '{s}'");
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("Invalid hex color '{s}'"))
    };
    Ok(Rgb::from_u8(channel(0)?, channel(2)?, channel(4)?))
}

/// `#rrggbb` of a color, rounded and clamped.
pub fn format_hex(rgb: Rgb) -> String {
    let px = Rgba8::from_rgb(rgb, 255);
    format!("#{:02x}{:02x}{:02x}", px.r, px.g, px.b)
}

/// `<dir>/<stem><suffix>` next to `input`.
pub fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{suffix}"))
}

/// Writes `<rmsd>,"<label>"` to `path` through a `.tmp` file and a rename,
/// so readers never see a partial score.
pub fn write_score(path: &Path, rmsd: f64, label: &str) -> Result<()> {
    if !rmsd.is_finite() || rmsd < 0.0 {
        bail!("Refusing to write invalid score {rmsd}");
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, format!("{rmsd},\"{label}\""))
        .with_context(|| format!("Failed to write: {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("Failed to rename {} to {}", tmp.display(), path.display()))?;
    debug!(path = %path.display(), rmsd, "score written");
    Ok(())
}

/// True if a score file already exists, meaning the work was done before.
pub fn already_scored(path: &Path) -> bool {
    path.is_file()
}
