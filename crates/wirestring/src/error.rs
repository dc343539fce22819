use thiserror::Error;

/// Why a capacity request could not be satisfied.
///
/// Both cases are recoverable: the caller decides whether to retry, shed the
/// operation, or carry on with the unchanged (or reset) value. There is no
/// panicking allocation path in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReserveError {
    /// The rounded-up block size would exceed [`CAPACITY_MAX`].
    ///
    /// [`CAPACITY_MAX`]: crate::CAPACITY_MAX
    #[error("requested capacity of {requested} bytes exceeds the storage ceiling")]
    CapacityExceeded {
        /// Content length the caller asked for.
        requested: usize,
    },
    /// The allocator could not provide the block.
    #[error("allocation failed")]
    AllocFailed,
}
