//! Error types for grid scan setup.

use thiserror::Error;

/// Errors that can occur while preparing a [`Scan`](super::Scan).
#[derive(Debug, Error)]
pub enum Error {
    /// The TOML scan configuration could not be parsed.
    #[error("failed to parse scan configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The reference geometry has no well-defined H–O–H plane.
    ///
    /// Occurs when a reference coordinate is not finite, a hydrogen
    /// coincides with the oxygen, or both O–H bonds are collinear, leaving
    /// no rotation axis for the angle scan.
    #[error("degenerate reference geometry: {0}")]
    DegenerateReference(String),

    /// A reference structure lacks an atom the scan needs.
    #[error("reference structure has no {0} atom")]
    MissingAtom(&'static str),
}
