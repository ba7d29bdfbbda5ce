//! Grid scans of a pinned water molecule, written as coordinate input files.
//!
//! Starting from a reference O–H–H geometry, `pinned-scan` varies the two
//! O–H bond lengths and the H–O–H angle over a regular grid and writes one
//! ion-line coordinate file per grid point. The oxygen is pinned in place;
//! the hydrogens are free to move.
//!
//! # Quick Start
//!
//! ```
//! use pinned_scan::{Scan, ScanConfig};
//! use pinned_scan::geometry::{bond_angle, bond_length};
//!
//! // 11 × 11 × 11 points around the built-in reference geometry
//! let scan = Scan::new(&ScanConfig::default())?;
//! assert_eq!(scan.len(), 1331);
//!
//! // Reference O–H bonds of about 1.83 Å and an angle near 104.9°
//! let metrics = scan.metrics();
//! assert!((metrics.bond_length1 - 1.834).abs() < 1e-3);
//! assert!((metrics.bond_angle - 104.9).abs() < 1e-2);
//!
//! // Stretch O–H1 by 5% and open the angle by 3°
//! let point = scan.point(1.05, 1.00, 3.0);
//! assert_eq!(point.file_name(), "coords_1.05_1.00_3.0.in");
//!
//! let [o, h1, h2] = [0, 1, 2].map(|i| point.system.atoms[i].position);
//! assert!((bond_length(h1, o) - 1.05 * metrics.bond_length1).abs() < 1e-12);
//! assert!((bond_angle(h1, o, h2) - (metrics.bond_angle + 3.0)).abs() < 1e-9);
//!
//! // Render the point as a coordinate file
//! let mut out = Vec::new();
//! pinned_scan::io::coords::write(&mut out, &point.system)?;
//! assert!(String::from_utf8(out)?.starts_with("O1  1   0.00    0.00    0.00  0\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`geometry`] — Bond lengths, bond angles and Rodrigues rotations on
//!   fixed-size arrays
//! - [`scan`] — Grid definition, reference geometry and point generation
//! - [`io`] — Coordinate file format and writing a scan to disk
//!
//! # Data Types
//!
//! - [`Atom`] — One ion record (label, element, species, position, movable)
//! - [`System`] — Ordered atoms of one coordinate file
//! - [`Element`] — Oxygen or hydrogen
//! - [`ScanConfig`] — Reference geometry plus grid axes, loadable from TOML
//! - [`GridAxis`] — Evenly spaced samples between two end points
//! - [`GridPoint`] — One scanned geometry with its grid parameters
//! - [`ReferenceMetrics`] — Reference bond lengths and angle

mod model;

pub mod geometry;
pub mod io;
pub mod scan;

pub use model::atom::Atom;
pub use model::system::System;
pub use model::types::{Element, ParseElementError};

pub use scan::{
    GridAxis, GridConfig, GridPoint, ReferenceGeometry, ReferenceMetrics, Scan, ScanConfig,
};

pub use scan::Error as ScanError;
