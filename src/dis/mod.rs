//! Facilities for disassembling one bank window of cartridge code.
//!
//! A run makes three passes over the window: exploration follows control
//! flow from the entry points to separate code from data, validation marks
//! where listed instructions start, and formatting produces the listing.

mod decode;
mod error;
mod explore;
mod format;
mod labels;
mod line;
mod opcode;
mod registers;
mod validate;

pub use decode::{Decoded, Instruction, Operand, decode_at};
pub use error::DisError;
pub use labels::{LabelMap, Mark, Resolution, label_name};
pub use line::DisasmLine;
pub use opcode::{AddrMode, Mnemonic, OperandClass, Operation};
pub use registers::{
    EXT_REGISTERS_FIRST, EXT_REGISTERS_LAST, LOW_REGISTERS_FIRST,
    LOW_REGISTERS_LAST, ext_register_name, low_register_name,
};

use crate::addr::{AddrRange, BankWindow};
use crate::bus::SimBus;
use std::fmt;

//===========================================================================//

/// The inputs of one disassembly run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisasmOptions {
    /// The address at which execution starts.  The bank window is based at
    /// this address rounded down to a multiple of 4kB.
    pub entry: u16,
    /// If false, control flow is not explored and every byte not marked
    /// otherwise is listed as code.
    pub autocode: bool,
    /// The size of the bank window, in bytes.
    pub bank_size: u32,
    /// Additional addresses at which exploration starts.
    pub entries: Vec<u16>,
    /// Ranges of addresses known to hold graphics.
    pub gfx: Vec<AddrRange>,
    /// Ranges of addresses known to hold data.
    pub data: Vec<AddrRange>,
}

impl DisasmOptions {
    /// The default bank window size.
    pub const DEFAULT_BANK_SIZE: u32 = 0x1000;

    /// Returns options for a run starting at `entry`, with exploration
    /// enabled and a 4kB window.
    pub fn new(entry: u16) -> DisasmOptions {
        DisasmOptions {
            entry,
            autocode: true,
            bank_size: DisasmOptions::DEFAULT_BANK_SIZE,
            entries: Vec::new(),
            gfx: Vec::new(),
            data: Vec::new(),
        }
    }
}

//===========================================================================//

/// The result of a disassembly run: the listing and the classification of
/// every byte in the window.
pub struct Disassembly {
    map: LabelMap,
    lines: Vec<DisasmLine>,
}

impl Disassembly {
    /// Returns the listing records, in address order.
    pub fn lines(&self) -> &[DisasmLine] {
        &self.lines
    }

    /// Returns the window that was disassembled.
    pub fn window(&self) -> BankWindow {
        self.map.window()
    }

    /// Returns the classification of `addr`.  Addresses outside the window
    /// have no marks.
    pub fn marks_at(&self, addr: u32) -> Mark {
        match self.window().offset_of(addr) {
            Some(offset) => self.map.get(offset),
            None => Mark::empty(),
        }
    }

    /// Returns true if a listed instruction starts at `addr`.
    pub fn is_valid_entry(&self, addr: u32) -> bool {
        self.marks_at(addr).contains(Mark::VALID_ENTRY)
    }

    /// Returns the index of the listing record that starts at `addr`.
    pub fn line_index_of(&self, addr: u16) -> Option<usize> {
        self.lines.iter().position(|line| line.address == Some(addr))
    }

    /// Returns the number of labelled addresses in the window.
    pub fn label_count(&self) -> usize {
        self.map.count(Mark::REFERENCED)
    }
}

impl fmt::Display for Disassembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines.iter() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

//===========================================================================//

/// Disassembles the bank window containing `options.entry`.
pub fn disassemble(
    bus: &dyn SimBus,
    options: &DisasmOptions,
) -> Result<Disassembly, DisError> {
    let entry = u32::from(options.entry);
    let window = BankWindow::containing(entry, options.bank_size)
        .ok_or(DisError::InvalidWindowSize(options.bank_size))?;
    log::debug!(
        "disassembling ${:04X}-${:04X} from entry ${entry:04X}",
        window.base(),
        window.end()
    );
    let mut map = LabelMap::new(window)?;
    premark(&mut map, &options.gfx, Mark::GFX);
    premark(&mut map, &options.data, Mark::DATA);
    let mut seeds = Vec::with_capacity(1 + options.entries.len());
    for addr in std::iter::once(entry)
        .chain(options.entries.iter().copied().map(u32::from))
    {
        let offset = map
            .resolve(addr, Mark::empty())
            .offset()
            .ok_or(DisError::EntryOutsideWindow(addr))?;
        seeds.push(offset);
    }
    if options.autocode {
        log::debug!("exploring from {} entry point(s)", seeds.len());
        explore::explore(bus, &mut map, &seeds);
    }
    validate::validate(bus, &mut map);
    let lines = format::format_listing(bus, &mut map);
    Ok(Disassembly { map, lines })
}

/// Marks every window offset covered by `ranges`.  Addresses that do not
/// resolve into the window are ignored.
fn premark(map: &mut LabelMap, ranges: &[AddrRange], mark: Mark) {
    for &range in ranges {
        let mut ignored = 0u64;
        for addr in range.addrs() {
            if map.resolve(addr, mark).offset().is_none() {
                ignored += 1;
            }
        }
        if ignored > 0 {
            log::warn!(
                "ignoring {ignored} address(es) of ${:04X}-${:04X} outside \
                 the bank window",
                range.start(),
                range.end()
            );
        }
    }
}

//===========================================================================//


//===========================================================================//
