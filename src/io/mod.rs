//! Reading and writing coordinate files.
//!
//! [`coords`] holds the line format itself. The helpers here handle the
//! file side: one file per system, and a whole scan written to a directory.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub mod coords;
pub mod error;
pub mod util;

pub use error::Error;

use crate::model::system::System;
use crate::scan::GridPoint;

/// Reads a coordinate file from disk.
pub fn read_file(path: &Path) -> Result<System, Error> {
    let file = File::open(path)?;
    coords::read(BufReader::new(file))
}

/// Writes `system` to `path`, replacing any existing file.
pub fn write_file(path: &Path, system: &System) -> Result<(), Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    coords::write(&mut writer, system)?;
    writer.flush()?;
    Ok(())
}

/// Writes every grid point to `<dir>/<point file name>`.
///
/// `dir` is created if missing. Files are written one at a time, and each
/// is closed before the next is opened. `on_written` is called after each
/// file with its path. Returns the number of files written.
pub fn write_grid<I, F>(dir: &Path, points: I, mut on_written: F) -> Result<usize, Error>
where
    I: IntoIterator<Item = GridPoint>,
    F: FnMut(&Path),
{
    fs::create_dir_all(dir)?;

    let mut written = 0;
    for point in points {
        let path: PathBuf = dir.join(point.file_name());
        write_file(&path, &point.system)?;
        on_written(&path);
        written += 1;
    }

    Ok(written)
}
