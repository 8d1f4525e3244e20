//! Error types for chakra

use thiserror::Error;

use crate::config::ConfigLoadError;

/// Descriptor construction and computation errors.
///
/// Incomparable descriptors are not an error; [`distance`] reports them
/// with [`MAX_DISTANCE`].
///
/// [`distance`]: crate::descriptors::Descriptor::distance
/// [`MAX_DISTANCE`]: crate::descriptors::MAX_DISTANCE
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DescriptorError {
    /// A descriptor needs at least one angular sector.
    #[error("Sector count must be positive")]
    ZeroSectors,

    /// The central point index does not address the neighbour set.
    #[error("Central point index {index} out of range for {len} neighbors")]
    CentralIndexOutOfRange {
        /// Requested central index
        index: usize,
        /// Size of the neighbour set
        len: usize,
    },

    /// Soft-binning weights must be finite, non-negative and not both zero.
    #[error("Invalid soft-binning weights: peak {peak}, spread {spread}")]
    InvalidSoftBinning {
        /// Weight for the matched sector
        peak: f64,
        /// Weight for each adjacent sector
        spread: f64,
    },

    /// Descriptor configuration rejected by validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigLoadError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DescriptorError>;
