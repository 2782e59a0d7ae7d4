//===========================================================================//

/// The contiguous span of the address space that one disassembly run
/// analyses.  All classification happens in offsets relative to the window
/// base.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BankWindow {
    base: u32,
    size: u32,
}

impl BankWindow {
    /// The granularity to which window bases are aligned.
    pub const BASE_ALIGN: u32 = 0x1000;

    /// Returns the window of `size` bytes whose base is `entry` rounded down
    /// to the nearest multiple of [`BankWindow::BASE_ALIGN`].  Returns `None`
    /// unless `size` is a power of two no larger than the base alignment.
    ///
    /// For example, an entry address of `$D973` yields a window based at
    /// `$D000`.
    pub fn containing(entry: u32, size: u32) -> Option<BankWindow> {
        if !size.is_power_of_two() || size > BankWindow::BASE_ALIGN {
            return None;
        }
        let base = entry & !(BankWindow::BASE_ALIGN - 1);
        Some(BankWindow { base, size })
    }

    /// Returns the first address in the window.
    pub fn base(self) -> u32 {
        self.base
    }

    /// Returns the number of bytes in the window.
    pub fn size(self) -> usize {
        self.size as usize
    }

    /// Returns the last address in the window.
    pub fn end(self) -> u32 {
        self.base + self.size - 1
    }

    /// Returns true if `addr` lies within the window.
    pub fn contains(self, addr: u32) -> bool {
        (self.base..=self.end()).contains(&addr)
    }

    /// Returns the offset of `addr` within the window, if it lies within the
    /// window.
    pub fn offset_of(self, addr: u32) -> Option<usize> {
        if self.contains(addr) {
            Some((addr - self.base) as usize)
        } else {
            None
        }
    }

    /// Returns the offset that `addr` aliases when the upper address lines
    /// are ignored.  The result is always less than [`BankWindow::size`].
    pub fn mirror_offset(self, addr: u32) -> usize {
        (addr & (self.size - 1)) as usize
    }

    /// Returns the absolute address of the given offset.
    pub fn addr_at(self, offset: usize) -> u32 {
        debug_assert!(offset < self.size());
        self.base + offset as u32
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::BankWindow;

    #[test]
    fn window_base_is_rounded_down() {
        let window = BankWindow::containing(0xd973, 0x1000).unwrap();
        assert_eq!(window.base(), 0xd000);
        assert_eq!(window.end(), 0xdfff);
        assert_eq!(window.size(), 0x1000);

        let window = BankWindow::containing(0xf800, 0x800).unwrap();
        assert_eq!(window.base(), 0xf000);
        assert_eq!(window.end(), 0xf7ff);
    }

    #[test]
    fn window_size_must_be_power_of_two() {
        assert_eq!(BankWindow::containing(0xf000, 0), None);
        assert_eq!(BankWindow::containing(0xf000, 0xc00), None);
        assert_eq!(BankWindow::containing(0xf000, 0x2000), None);
        assert!(BankWindow::containing(0xf000, 0x10).is_some());
    }

    #[test]
    fn window_offsets() {
        let window = BankWindow::containing(0xf123, 0x1000).unwrap();
        assert_eq!(window.offset_of(0xefff), None);
        assert_eq!(window.offset_of(0xf000), Some(0));
        assert_eq!(window.offset_of(0xffff), Some(0xfff));
        assert_eq!(window.offset_of(0x10000), None);
        assert_eq!(window.addr_at(0x123), 0xf123);
    }

    #[test]
    fn window_mirrors() {
        let window = BankWindow::containing(0xf000, 0x1000).unwrap();
        assert_eq!(window.mirror_offset(0x1234), 0x234);
        assert_eq!(window.mirror_offset(0x3234), 0x234);
        assert_eq!(window.mirror_offset(0xd234), 0x234);
        let window = BankWindow::containing(0xf000, 0x800).unwrap();
        assert_eq!(window.mirror_offset(0xf934), 0x134);
    }
}

//===========================================================================//
