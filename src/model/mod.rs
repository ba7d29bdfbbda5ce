//! Core data structures for coordinate files.
//!
//! - [`atom`] – One ion record: label, element, species code, position and
//!   movable flag.
//! - [`types`] – The elements a pinned water geometry is built from.
//! - [`system`] – An ordered list of atoms, as written to one file.

pub mod atom;
pub mod system;
pub mod types;
