use std::io::{self, Write};

use pinned_scan::{GridAxis, GridConfig, ReferenceMetrics, Scan, System};

use super::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_reference(scan: &Scan) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let reference = scan.reference();
    let metrics = scan.metrics();

    let rows = vec![
        ("O (Å)", fmt_vec(&reference.oxygen)),
        ("H1 (Å)", fmt_vec(&reference.h1)),
        ("H2 (Å)", fmt_vec(&reference.h2)),
        ("O–H1", format!("{:.4} Å", metrics.bond_length1)),
        ("O–H2", format!("{:.4} Å", metrics.bond_length2)),
        ("H1–O–H2", format!("{:.3}°", metrics.bond_angle)),
        ("Rotation axis", fmt_vec(&scan.rotation_axis())),
    ];

    print_kv_table(&mut out, "Reference Geometry", &rows);
}

pub fn print_metrics(metrics: &ReferenceMetrics) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("O–H1", format!("{:.4} Å", metrics.bond_length1)),
        ("O–H2", format!("{:.4} Å", metrics.bond_length2)),
        ("H1–O–H2", format!("{:.3}°", metrics.bond_angle)),
    ];

    print_kv_table(&mut out, "Geometry", &rows);
}

pub fn print_grid_summary(grid: &GridConfig, points: usize) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("O–H1 factor", fmt_axis(&grid.bond_length1, "")),
        ("O–H2 factor", fmt_axis(&grid.bond_length2, "")),
        ("Angle step", fmt_axis(&grid.bond_angle, "°")),
        ("Grid points", format!("{}", points)),
    ];

    print_kv_table(&mut out, "Scan Grid", &rows);
}

pub fn print_atoms(system: &System) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let _ = writeln!(out, "{}┌─ Atoms ─┐", INDENT);
    let _ = writeln!(out, "{}┌───────┬─────┬──────────┬──────────┬──────────┬──────┐", INDENT);
    let _ = writeln!(out, "{}│ Label │ Sp. │        x │        y │        z │ Move │", INDENT);
    let _ = writeln!(out, "{}├───────┼─────┼──────────┼──────────┼──────────┼──────┤", INDENT);

    for atom in &system.atoms {
        let [x, y, z] = atom.position;
        let _ = writeln!(
            out,
            "{}│ {:<5} │ {:>3} │ {:>8.3} │ {:>8.3} │ {:>8.3} │ {:<4} │",
            INDENT,
            truncate(&atom.label, 5),
            atom.species,
            x,
            y,
            z,
            if atom.movable { "yes" } else { "no" }
        );
    }

    let _ = writeln!(out, "{}└───────┴─────┴──────────┴──────────┴──────────┴──────┘", INDENT);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

fn fmt_vec(v: &[f64; 3]) -> String {
    format!("{:.4}  {:.4}  {:.4}", v[0], v[1], v[2])
}

fn fmt_axis(axis: &GridAxis, unit: &str) -> String {
    format!(
        "{}{unit} → {}{unit}  ({} pts)",
        axis.start,
        axis.stop,
        axis.len()
    )
}
