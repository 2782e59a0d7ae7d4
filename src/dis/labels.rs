use super::error::DisError;
use super::registers::{ext_register_name, low_register_name};
use crate::addr::BankWindow;

//===========================================================================//

/// The address above which an out-of-window address is treated as a mirror
/// of the bank window.
const MIRROR_THRESHOLD: u32 = 0x1000;

bitflags::bitflags! {
    /// Classification bits for a single offset within the bank window.  The
    /// bits are independent, and within one disassembly run they are only
    /// ever set, never cleared.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct Mark: u8 {
        /// Part of an instruction stream reached from an entry point.
        const REACHABLE = 1 << 0;
        /// Not proven to be code.
        const DATA = 1 << 1;
        /// Declared to be graphics (pixel row) data.
        const GFX = 1 << 2;
        /// The exact address of some instruction's operand.
        const REFERENCED = 1 << 3;
        /// An instruction decode starts here.
        const VALID_ENTRY = 1 << 4;
    }
}

//===========================================================================//

/// Where an address lands, as seen from the bank window.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Resolution {
    /// Inside the bank window, at the given offset.
    InWindow(usize),
    /// A low hardware register, with the given name.
    LowRegister(&'static str),
    /// An extended I/O or timer register, with the given name.
    ExtRegister(&'static str),
    /// A mirror of the given offset of the bank window.
    Mirrored(usize),
    /// None of the above.
    Invalid,
}

impl Resolution {
    /// Returns the window offset for `InWindow` and `Mirrored` resolutions.
    pub fn offset(self) -> Option<usize> {
        match self {
            Resolution::InWindow(offset) | Resolution::Mirrored(offset) => {
                Some(offset)
            }
            _ => None,
        }
    }

    /// Returns the register name for register resolutions.
    pub fn register_name(self) -> Option<&'static str> {
        match self {
            Resolution::LowRegister(name) | Resolution::ExtRegister(name) => {
                Some(name)
            }
            _ => None,
        }
    }
}

//===========================================================================//

/// The per-offset classification of one bank window.
pub struct LabelMap {
    window: BankWindow,
    marks: Vec<Mark>,
}

impl LabelMap {
    /// Allocates an empty classification map covering `window`.
    pub fn new(window: BankWindow) -> Result<LabelMap, DisError> {
        let size = window.size();
        let mut marks = Vec::new();
        marks
            .try_reserve_exact(size)
            .map_err(|_| DisError::ResourceExhausted { size })?;
        marks.resize(size, Mark::empty());
        Ok(LabelMap { window, marks })
    }

    /// Returns the window this map covers.
    pub fn window(&self) -> BankWindow {
        self.window
    }

    /// Returns the marks at `offset`.  Offsets beyond the window have no
    /// marks.
    pub fn get(&self, offset: usize) -> Mark {
        self.marks.get(offset).copied().unwrap_or_default()
    }

    /// Returns true if all of `mark` is set at `offset`.
    pub fn has(&self, offset: usize, mark: Mark) -> bool {
        self.get(offset).contains(mark)
    }

    /// Sets `mark` at `offset`.
    pub fn mark_offset(&mut self, offset: usize, mark: Mark) {
        if let Some(marks) = self.marks.get_mut(offset) {
            marks.insert(mark);
        }
    }

    /// Determines where `addr` lands, setting `mark` on the corresponding
    /// window offset if there is one.
    pub fn resolve(&mut self, addr: u32, mark: Mark) -> Resolution {
        if let Some(offset) = self.window.offset_of(addr) {
            self.mark_offset(offset, mark);
            Resolution::InWindow(offset)
        } else if let Some(name) = low_register_name(addr) {
            Resolution::LowRegister(name)
        } else if let Some(name) = ext_register_name(addr) {
            Resolution::ExtRegister(name)
        } else if addr > MIRROR_THRESHOLD {
            let offset = self.window.mirror_offset(addr);
            self.mark_offset(offset, mark);
            Resolution::Mirrored(offset)
        } else {
            Resolution::Invalid
        }
    }

    /// Marks every offset that is not `REACHABLE` as `DATA`, returning how
    /// many offsets were reclassified.
    pub fn mark_unreachable_as_data(&mut self) -> usize {
        let mut count = 0;
        for marks in self.marks.iter_mut() {
            if !marks.contains(Mark::REACHABLE) {
                marks.insert(Mark::DATA);
                count += 1;
            }
        }
        count
    }

    /// Returns the length of the run of data bytes that starts at `offset`.
    /// The run continues while bytes are `DATA` (and not `GFX`), and is
    /// interrupted by any `REFERENCED` byte other than the first.
    pub fn data_run_len(&self, offset: usize) -> usize {
        let mut end = offset + 1;
        while end < self.marks.len() {
            let marks = self.marks[end];
            if !marks.contains(Mark::DATA)
                || marks.intersects(Mark::REFERENCED | Mark::GFX)
            {
                break;
            }
            end += 1;
        }
        end - offset
    }

    /// Returns the label for the given window offset, if it is referenced.
    pub fn label_at(&self, offset: usize) -> Option<String> {
        if self.has(offset, Mark::REFERENCED) {
            Some(label_name(self.window.addr_at(offset)))
        } else {
            None
        }
    }

    /// Returns how many offsets have all of `mark` set.
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|marks| marks.contains(mark)).count()
    }
}

/// Returns the symbolic label used for the given absolute address.
pub fn label_name(addr: u32) -> String {
    format!("L{addr:04X}")
}

//===========================================================================//


//===========================================================================//
