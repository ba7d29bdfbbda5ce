use std::io::{self, Write};

use anyhow::Error;

use super::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = hints_for(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn hints_for(err: &Error) -> Vec<String> {
    use pinned_scan::ScanError;
    use pinned_scan::io::Error as IoError;

    let mut hints = Vec::new();

    if let Some(io_err) = err.downcast_ref::<IoError>() {
        match io_err {
            IoError::Io { source } => std_io_hints(source, &mut hints),
            IoError::Parse { line, .. } => {
                hints.push(format!("Inspect line {} of the coordinate file", line));
                hints.push("Each atom line reads: LABEL SPECIES X Y Z [0|1]".to_string());
                hints.push("Labels must start with O or H (e.g. O1, H2)".to_string());
            }
        }
    } else if let Some(scan_err) = err.downcast_ref::<ScanError>() {
        match scan_err {
            ScanError::ConfigParse(_) => {
                hints.push("Allowed tables: [reference], [grid.bond_length1],".to_string());
                hints.push("[grid.bond_length2] and [grid.bond_angle]".to_string());
                hints.push("Each grid axis needs start, stop and num".to_string());
            }
            ScanError::DegenerateReference(_) => {
                hints.push("H1 and H2 must not lie on one line through O".to_string());
                hints.push("Check the reference coordinates for typos".to_string());
            }
            ScanError::MissingAtom(_) => {
                hints.push("The reference needs one O and at least two H atoms".to_string());
            }
        }
    } else if let Some(source) = err.downcast_ref::<io::Error>() {
        std_io_hints(source, &mut hints);
    }

    hints
}

fn std_io_hints(source: &io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File or directory not found".to_string());
            hints.push("Check the path spelling and ensure the file exists".to_string());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Permission denied accessing the path".to_string());
            hints.push("Check permissions on the output directory".to_string());
        }
        ErrorKind::AlreadyExists | ErrorKind::NotADirectory => {
            hints.push("A file is in the way of the output directory".to_string());
            hints.push("Choose another path with -o/--output-dir".to_string());
        }
        ErrorKind::StorageFull | ErrorKind::WriteZero => {
            hints.push("Failed to write data (disk full?)".to_string());
            hints.push("Check available disk space".to_string());
        }
        ErrorKind::InvalidData => {
            hints.push("File is not valid UTF-8 text".to_string());
        }
        _ => {}
    }
}
