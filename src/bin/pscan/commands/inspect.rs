use std::io::{self, Write};

use anyhow::{Context, Result};

use pinned_scan::io::read_file;
use pinned_scan::{ReferenceGeometry, ReferenceMetrics};

use crate::cli::InspectArgs;
use crate::display::{Context as DisplayContext, print_atoms, print_metrics};

pub fn run_inspect(args: InspectArgs, ctx: DisplayContext) -> Result<()> {
    let system = read_file(&args.input)
        .with_context(|| format!("Failed to read coordinate file: {}", args.input.display()))?;
    let reference = ReferenceGeometry::from_system(&system)
        .with_context(|| format!("Not a water geometry: {}", args.input.display()))?;
    let metrics = ReferenceMetrics::of(&reference);

    if ctx.interactive {
        print_atoms(&system);
        print_metrics(&metrics);
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "bond_length1 {:.6}", metrics.bond_length1)?;
    writeln!(stdout, "bond_length2 {:.6}", metrics.bond_length2)?;
    writeln!(stdout, "bond_angle {:.6}", metrics.bond_angle)?;

    Ok(())
}
