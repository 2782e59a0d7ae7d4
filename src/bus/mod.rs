//! Facilities for reading a cartridge image through a simulated memory bus.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Read};

mod cart;

pub use cart::CartBus;

//===========================================================================//

/// An error encountered while constructing a simulated memory bus.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BusError {
    /// The ROM image is neither 2kB nor a whole number of 4kB banks.
    #[error("invalid ROM size: {0} bytes")]
    InvalidRomSize(usize),
    /// The requested bank does not exist in the ROM image.
    #[error("no bank {bank} in a ROM with {banks} bank(s)")]
    NoSuchBank {
        /// The requested bank number.
        bank: usize,
        /// The number of banks in the ROM image.
        banks: usize,
    },
}

//===========================================================================//

/// A simulated memory bus that can be read without side effects.
///
/// This trait uses `u32` for addresses, but implementations may only
/// represent a narrower address bus.  Generally speaking, implementations
/// should ignore address bits higher than the width of their address bus, as
/// though those physical address lines weren't connected, effectively
/// mirroring memory across the larger range.  Implementations should *not*
/// panic when given an address that is out of range.
pub trait SimBus {
    /// Returns a human-readable description of this simulated memory bus.
    fn description(&self) -> String;

    /// Returns the value of a single byte in memory, if the processor were to
    /// read it, but without performing any side effects that would occur if
    /// the processor actually read the byte.
    fn peek_byte(&self, addr: u32) -> u8;
}

/// Returns the little-endian 16-bit word starting at `addr`, reading it the
/// same way [`SimBus::peek_byte`] would.
pub fn peek_word(bus: &dyn SimBus, addr: u32) -> u16 {
    let mut reader = BusPeeker::new(bus, addr);
    // Reads from a BusPeeker cannot fail.
    reader.read_u16::<LittleEndian>().unwrap_or_default()
}

//===========================================================================//

pub(crate) struct BusPeeker<'a> {
    bus: &'a dyn SimBus,
    addr: u32,
}

impl<'a> BusPeeker<'a> {
    pub fn new(bus: &'a dyn SimBus, start_addr: u32) -> BusPeeker<'a> {
        BusPeeker { bus, addr: start_addr }
    }
}

impl Read for BusPeeker<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        for byte in buf.iter_mut() {
            *byte = self.bus.peek_byte(self.addr);
            self.addr = self.addr.wrapping_add(1);
        }
        Ok(buf.len())
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{BusPeeker, SimBus, peek_word};
    use std::io::Read;

    struct CountingBus;

    impl SimBus for CountingBus {
        fn description(&self) -> String {
            "counting bus".to_string()
        }

        fn peek_byte(&self, addr: u32) -> u8 {
            addr as u8
        }
    }

    #[test]
    fn peek_word_is_little_endian() {
        assert_eq!(peek_word(&CountingBus, 0x12), 0x1312);
        assert_eq!(peek_word(&CountingBus, 0xff), 0x00ff);
    }

    #[test]
    fn peeker_wraps_address() {
        let mut reader = BusPeeker::new(&CountingBus, u32::MAX);
        let mut buf = [0u8; 3];
        reader.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [0xff, 0x00, 0x01]);
    }
}

//===========================================================================//
