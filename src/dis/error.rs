//===========================================================================//

/// An error that prevents a disassembly run from completing.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DisError {
    /// The classification map for the bank window could not be allocated.
    #[error("unable to allocate {size} bytes of address classification")]
    ResourceExhausted {
        /// The number of offsets in the requested window.
        size: usize,
    },
    /// The requested bank size is not a power of two between 1 and 4096.
    #[error("invalid bank size: ${0:X}")]
    InvalidWindowSize(u32),
    /// An extra entry point does not resolve into the bank window.
    #[error("entry point ${0:04X} is outside the bank window")]
    EntryOutsideWindow(u32),
}

//===========================================================================//
