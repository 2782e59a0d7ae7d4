use std::ops;

//===========================================================================//

/// Represents a nonempty, inclusive range of bus addresses.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct AddrRange {
    first: u32,
    last: u32,
}

impl AddrRange {
    /// Returns an address range that contains `first`, `last`, and all
    /// addresses in between, or `None` if `last < first`.
    pub fn with_bounds(first: u32, last: u32) -> Option<AddrRange> {
        if first <= last { Some(AddrRange { first, last }) } else { None }
    }

    /// Returns a range containing only the single address `addr`.
    pub fn single(addr: u32) -> AddrRange {
        AddrRange { first: addr, last: addr }
    }

    /// Returns the first address in the range.
    pub fn start(self) -> u32 {
        self.first
    }

    /// Returns the last address in the range.
    pub fn end(self) -> u32 {
        self.last
    }

    /// Returns the number of distinct addresses in this range.
    pub fn size(self) -> u64 {
        u64::from(self.last - self.first) + 1
    }

    /// Returns true if this range contains `addr`.
    pub fn contains(self, addr: u32) -> bool {
        (self.first..=self.last).contains(&addr)
    }

    /// Returns an iterator over every address in the range, in order.
    pub fn addrs(self) -> ops::RangeInclusive<u32> {
        self.first..=self.last
    }
}

impl From<AddrRange> for ops::RangeInclusive<u32> {
    fn from(value: AddrRange) -> ops::RangeInclusive<u32> {
        value.first..=value.last
    }
}

//===========================================================================//


//===========================================================================//
