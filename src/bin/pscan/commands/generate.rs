use anyhow::{Context, Result};

use pinned_scan::io::write_grid;
use pinned_scan::{Scan, ScanConfig};

use crate::cli::GenerateArgs;
use crate::config::build_scan_config;
use crate::display::{Context as DisplayContext, Progress, print_grid_summary, print_reference};

const TOTAL_STEPS: u8 = 3;

pub fn run_generate(args: GenerateArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading scan definition");
    let config = build_scan_config(&args.scan)?;
    let load_substeps = build_load_substeps(&args);
    let load_substeps_ref: Vec<&str> = load_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Loading scan definition", &load_substeps_ref);

    progress.step("Preparing reference geometry");
    let scan = Scan::new(&config).context("Cannot set up the bond scan")?;
    progress.complete_step(
        "Preparing reference geometry",
        &[
            "Measure reference bonds and angle",
            "Derive rotation axis from H–O–H plane",
        ],
    );

    if ctx.interactive {
        print_reference(&scan);
        print_grid_summary(&config.grid, scan.len());
    }

    progress.step("Writing coordinate files");
    let total = scan.len();
    let mut done = 0;
    let written = write_grid(&args.output_dir, scan.points(), |_| {
        done += 1;
        progress.update(done, total);
    })
    .with_context(|| {
        format!(
            "Failed to write coordinate files to {}",
            args.output_dir.display()
        )
    })?;

    let write_substeps = build_write_substeps(&args, &config, written);
    let write_substeps_ref: Vec<&str> = write_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Writing coordinate files", &write_substeps_ref);

    progress.finish();

    Ok(())
}

fn build_load_substeps(args: &GenerateArgs) -> Vec<String> {
    let mut steps = Vec::new();

    match &args.scan.config {
        Some(path) => steps.push(format!("Read grid from {}", file_label(path))),
        None => steps.push("Use built-in 11 × 11 × 11 grid".to_string()),
    }

    match &args.scan.reference {
        Some(path) => steps.push(format!("Take reference O/H1/H2 from {}", file_label(path))),
        None if args.scan.config.is_some() => {
            steps.push("Take reference geometry from configuration".to_string())
        }
        None => steps.push("Use built-in reference geometry".to_string()),
    }

    steps
}

fn build_write_substeps(args: &GenerateArgs, config: &ScanConfig, written: usize) -> Vec<String> {
    let grid = &config.grid;
    vec![
        format!(
            "{} × {} × {} grid points",
            grid.bond_length1.len(),
            grid.bond_length2.len(),
            grid.bond_angle.len()
        ),
        format!("Write {} files → {}", written, args.output_dir.display()),
    ]
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
