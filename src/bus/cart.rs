use super::{BusError, SimBus};

//===========================================================================//

const BANK_SIZE: usize = 0x1000;
const ADDR_MASK: u32 = 0x1fff;
const CART_SELECT: u32 = 0x1000;

/// A simulated cartridge on a 13-bit address bus.  Only the low 13 address
/// lines are connected; when A12 is set, the selected ROM bank is read
/// (mirrored if smaller than 4kB), and otherwise the read lands on the
/// console's registers or RAM, which are never interpreted as cartridge data
/// and read as open bus.
pub struct CartBus {
    rom: Box<[u8]>,
    bank_start: usize,
    bank_len: usize,
}

impl CartBus {
    /// Returns a new simulated cartridge bus for the given ROM image, with
    /// the given 4kB bank selected.  The image must be 2kB, or a whole number
    /// of 4kB banks.
    pub fn new(rom: Box<[u8]>, bank: usize) -> Result<CartBus, BusError> {
        let size = rom.len();
        let (banks, bank_len) = if size == BANK_SIZE / 2 {
            (1, size)
        } else if size > 0 && size % BANK_SIZE == 0 {
            (size / BANK_SIZE, BANK_SIZE)
        } else {
            return Err(BusError::InvalidRomSize(size));
        };
        if bank >= banks {
            return Err(BusError::NoSuchBank { bank, banks });
        }
        Ok(CartBus { rom, bank_start: bank * bank_len, bank_len })
    }

    /// Returns the number of 4kB banks in the ROM image (a 2kB image counts
    /// as a single bank).
    pub fn num_banks(&self) -> usize {
        self.rom.len().div_ceil(BANK_SIZE)
    }

    /// Returns the number of distinct bytes visible through the selected
    /// bank.
    pub fn bank_size(&self) -> u32 {
        self.bank_len as u32
    }
}

impl SimBus for CartBus {
    fn description(&self) -> String {
        let size = self.rom.len();
        let bank = self.bank_start / self.bank_len;
        format!(
            "{}kB cartridge (bank {} of {})",
            size >> 10,
            bank,
            self.num_banks()
        )
    }

    fn peek_byte(&self, addr: u32) -> u8 {
        let addr = addr & ADDR_MASK;
        if addr & CART_SELECT == 0 {
            return 0;
        }
        let index = (addr as usize) & (self.bank_len - 1);
        self.rom[self.bank_start + index]
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::CartBus;
    use crate::bus::{BusError, SimBus};

    #[test]
    fn description() {
        let bus = CartBus::new(vec![0u8; 0x800].into_boxed_slice(), 0);
        assert_eq!(bus.unwrap().description(), "2kB cartridge (bank 0 of 1)");
        let bus = CartBus::new(vec![0u8; 0x2000].into_boxed_slice(), 1);
        assert_eq!(bus.unwrap().description(), "8kB cartridge (bank 1 of 2)");
    }

    #[test]
    fn bank_size() {
        let bus = CartBus::new(vec![0u8; 0x800].into_boxed_slice(), 0);
        assert_eq!(bus.unwrap().bank_size(), 0x800);
        let bus = CartBus::new(vec![0u8; 0x4000].into_boxed_slice(), 3);
        assert_eq!(bus.unwrap().bank_size(), 0x1000);
    }

    #[test]
    fn invalid_sizes() {
        let result = CartBus::new(vec![0u8; 0x1800].into_boxed_slice(), 0);
        assert_eq!(result.err(), Some(BusError::InvalidRomSize(0x1800)));
        let result = CartBus::new(Box::new([]), 0);
        assert_eq!(result.err(), Some(BusError::InvalidRomSize(0)));
        let result = CartBus::new(vec![0u8; 0x2000].into_boxed_slice(), 2);
        assert_eq!(
            result.err(),
            Some(BusError::NoSuchBank { bank: 2, banks: 2 })
        );
    }

    #[test]
    fn address_mirroring() {
        let mut rom = vec![0u8; 0x1000];
        rom[0x234] = 0xab;
        let bus = CartBus::new(rom.into_boxed_slice(), 0).unwrap();
        assert_eq!(bus.peek_byte(0x1234), 0xab);
        assert_eq!(bus.peek_byte(0x3234), 0xab);
        assert_eq!(bus.peek_byte(0xf234), 0xab);
        assert_eq!(bus.peek_byte(0x1f234), 0xab);
        assert_eq!(bus.peek_byte(0x0234), 0x00);
        assert_eq!(bus.peek_byte(0xe234), 0x00);
    }

    #[test]
    fn small_rom_mirrors_within_bank() {
        let mut rom = vec![0u8; 0x800];
        rom[0x7fc] = 0x34;
        let bus = CartBus::new(rom.into_boxed_slice(), 0).unwrap();
        assert_eq!(bus.peek_byte(0xfffc), 0x34);
        assert_eq!(bus.peek_byte(0xf7fc), 0x34);
    }

    #[test]
    fn bank_selection() {
        let mut rom = vec![0u8; 0x2000];
        rom[0x0ffc] = 0x11;
        rom[0x1ffc] = 0x22;
        let bus = CartBus::new(rom.clone().into_boxed_slice(), 0).unwrap();
        assert_eq!(bus.peek_byte(0xfffc), 0x11);
        let bus = CartBus::new(rom.into_boxed_slice(), 1).unwrap();
        assert_eq!(bus.peek_byte(0xfffc), 0x22);
    }
}

//===========================================================================//
