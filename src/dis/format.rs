//! Listing generation: turns the classified window into disassembly records.

use super::decode::{Decoded, Instruction, Operand, decode_at};
use super::labels::{LabelMap, Mark, Resolution};
use super::line::{DisasmLine, hex_bytes};
use crate::bus::SimBus;

//===========================================================================//

/// The maximum number of values on one line of a data run.
const DATA_VALUES_PER_LINE: usize = 16;

/// Walks the window from its base and produces the listing records.
pub(super) fn format_listing(
    bus: &dyn SimBus,
    map: &mut LabelMap,
) -> Vec<DisasmLine> {
    let window = map.window();
    let mut lines = Vec::new();
    let mut offset = 0;
    while offset < window.size() {
        let marks = map.get(offset);
        if marks.contains(Mark::GFX) {
            lines.push(gfx_line(bus, map, offset));
            offset += 1;
        } else if marks.contains(Mark::DATA) {
            offset += push_data_run(bus, map, offset, &mut lines);
        } else {
            match decode_at(bus, window, offset) {
                Decoded::Complete(instruction) => {
                    lines.push(instruction_line(map, offset, instruction));
                    if instruction.operation.ends_block() {
                        lines.push(DisasmLine::spacer());
                    }
                    offset += instruction.size();
                }
                Decoded::Truncated { opcode, available } => {
                    lines.push(byte_line(map, offset, opcode));
                    for index in (offset + 1)..=(offset + available) {
                        let byte = bus.peek_byte(window.addr_at(index));
                        lines.push(byte_line(map, index, byte));
                    }
                    break;
                }
            }
        }
    }
    log::debug!("emitted {} listing record(s)", lines.len());
    lines
}

fn gfx_line(bus: &dyn SimBus, map: &LabelMap, offset: usize) -> DisasmLine {
    let addr = map.window().addr_at(offset);
    let byte = bus.peek_byte(addr);
    DisasmLine {
        address: Some(addr as u16),
        label: map.label_at(offset),
        text: format!(".byte ${byte:02X} ; |{}|", gfx_bar(byte)),
        bytes: format!("{byte:02X}"),
        cycles: None,
    }
}

/// Renders a byte as a row of pixels, most significant bit first.
fn gfx_bar(byte: u8) -> String {
    (0..8)
        .rev()
        .map(|bit| if byte & (1 << bit) != 0 { 'X' } else { ' ' })
        .collect()
}

/// Appends the records for the data run starting at `offset`, followed by a
/// spacer, and returns the length of the run.
fn push_data_run(
    bus: &dyn SimBus,
    map: &LabelMap,
    offset: usize,
    lines: &mut Vec<DisasmLine>,
) -> usize {
    let window = map.window();
    let len = map.data_run_len(offset);
    let values: Vec<String> = (offset..(offset + len))
        .map(|index| format!("${:02X}", bus.peek_byte(window.addr_at(index))))
        .collect();
    for (chunk_index, chunk) in values.chunks(DATA_VALUES_PER_LINE).enumerate()
    {
        let text = format!(".byte {}", chunk.join(","));
        if chunk_index == 0 {
            lines.push(DisasmLine {
                address: Some(window.addr_at(offset) as u16),
                label: map.label_at(offset),
                text,
                ..DisasmLine::default()
            });
        } else {
            lines.push(DisasmLine { text, ..DisasmLine::default() });
        }
    }
    lines.push(DisasmLine::spacer());
    len
}

/// A standalone byte directive, used for bytes of a truncated instruction.
fn byte_line(map: &LabelMap, offset: usize, byte: u8) -> DisasmLine {
    DisasmLine {
        address: Some(map.window().addr_at(offset) as u16),
        label: map.label_at(offset),
        text: format!(".byte ${byte:02X}"),
        bytes: format!("{byte:02X}"),
        cycles: None,
    }
}

fn instruction_line(
    map: &mut LabelMap,
    offset: usize,
    instruction: Instruction,
) -> DisasmLine {
    let pc = map.window().addr_at(offset);
    let mnemonic = instruction.mnemonic();
    let text = if mnemonic.is_undocumented() {
        format!(".byte ${:02X} ; {mnemonic}", instruction.opcode)
    } else {
        let operand = format_operand(map, pc, instruction.operand);
        format!("{mnemonic}{operand}")
    };
    DisasmLine {
        address: Some(pc as u16),
        label: map.label_at(offset),
        text,
        bytes: hex_bytes(&instruction.bytes()),
        cycles: Some(instruction.operation.cycles),
    }
}

/// Formats an operand, including the separator that follows the mnemonic.
/// `pc` gives the address of the start of the instruction.
fn format_operand(map: &mut LabelMap, pc: u32, operand: Operand) -> String {
    let name = match operand.target(pc) {
        Some(target) => {
            let resolution = map.resolve(target, Mark::REFERENCED);
            symbolic_name(map, resolution)
        }
        None => None,
    };
    let zp = |zp: u8| name.clone().unwrap_or_else(|| format!("${zp:02X}"));
    let abs = |abs: u16| name.clone().unwrap_or_else(|| format!("${abs:04X}"));
    match operand {
        Operand::Implied => String::new(),
        Operand::Accumulator => "    A".to_string(),
        Operand::Immediate(byte) => format!("    #${byte:02X}"),
        Operand::Relative(_) => {
            let dest = operand.target(pc).unwrap_or(pc) as u16;
            format!("    {}", abs(dest))
        }
        Operand::Absolute(addr) => {
            format!("{}{}", wide_prefix(addr, ".w  "), abs(addr))
        }
        Operand::AbsoluteIndirect(addr) => {
            format!("{}({})", wide_prefix(addr, ".ind "), abs(addr))
        }
        Operand::XIndexedAbsolute(addr) => {
            format!("{}{},X", wide_prefix(addr, ".wx "), abs(addr))
        }
        Operand::YIndexedAbsolute(addr) => {
            format!("{}{},Y", wide_prefix(addr, ".wy "), abs(addr))
        }
        Operand::ZeroPage(byte) => format!("    {}", zp(byte)),
        Operand::XIndexedZeroPage(byte) => format!("    {},X", zp(byte)),
        Operand::YIndexedZeroPage(byte) => format!("    {},Y", zp(byte)),
        Operand::XIndexedZeroPageIndirect(byte) => {
            format!("    (${byte:02X},X)")
        }
        Operand::ZeroPageIndirectYIndexed(byte) => {
            format!("    (${byte:02X}),Y")
        }
    }
}

/// Absolute operands that fit in the zero page are marked so that a
/// reassembler keeps the wide encoding.
fn wide_prefix(addr: u16, marker: &'static str) -> &'static str {
    if addr < 0x100 { marker } else { "    " }
}

/// Returns the label or register name for a resolved operand target.
fn symbolic_name(map: &LabelMap, resolution: Resolution) -> Option<String> {
    match resolution {
        Resolution::InWindow(offset) | Resolution::Mirrored(offset) => {
            map.label_at(offset)
        }
        Resolution::LowRegister(name) | Resolution::ExtRegister(name) => {
            Some(name.to_string())
        }
        Resolution::Invalid => None,
    }
}

//===========================================================================//


//===========================================================================//
