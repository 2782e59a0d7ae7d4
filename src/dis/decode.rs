use super::opcode::{AddrMode, Mnemonic, Operation};
use crate::addr::BankWindow;
use crate::bus::{SimBus, peek_word};

//===========================================================================//

/// An addressing mode and argument value for a single instruction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operand {
    /// No additional arguments to the opcode.
    Implied,
    /// Operate on the A register.
    Accumulator,
    /// Operate on the given constant byte.
    Immediate(u8),
    /// Operate on an address that is offset (by the given signed byte) from
    /// the address of the next instruction.
    Relative(i8),
    /// Operate on the given absolute address.
    Absolute(u16),
    /// Operate on the address in memory that the given absolute address
    /// points to.
    AbsoluteIndirect(u16),
    /// Operate on the given absolute address, offset by index X.
    XIndexedAbsolute(u16),
    /// Operate on the given absolute address, offset by index Y.
    YIndexedAbsolute(u16),
    /// Operate on the given zero page address.
    ZeroPage(u8),
    /// Operate on the given zero page address, offset by index X.
    XIndexedZeroPage(u8),
    /// Operate on the given zero page address, offset by index Y.
    YIndexedZeroPage(u8),
    /// Operate on the address in memory that is offset from the given zero
    /// page address by index X.
    XIndexedZeroPageIndirect(u8),
    /// Operate on an address in memory equal to the address stored at the
    /// given zero page address, offset by index Y.
    ZeroPageIndirectYIndexed(u8),
}

impl Operand {
    /// Returns the size of this operand, in bytes.
    pub fn size(self) -> usize {
        match self {
            Operand::Implied | Operand::Accumulator => 0,
            Operand::Immediate(_)
            | Operand::Relative(_)
            | Operand::ZeroPage(_)
            | Operand::XIndexedZeroPage(_)
            | Operand::YIndexedZeroPage(_)
            | Operand::XIndexedZeroPageIndirect(_)
            | Operand::ZeroPageIndirectYIndexed(_) => 1,
            Operand::Absolute(_)
            | Operand::AbsoluteIndirect(_)
            | Operand::XIndexedAbsolute(_)
            | Operand::YIndexedAbsolute(_) => 2,
        }
    }

    /// Returns the address this operand names directly, if any.  `pc` gives
    /// the address of the start of the instruction.  Immediate values and
    /// the zero page pointers of the indirect indexed modes name no address.
    /// Branch targets wrap around the 16-bit address space.
    pub fn target(self, pc: u32) -> Option<u32> {
        match self {
            Operand::Relative(offset) => {
                let dest =
                    pc.wrapping_add(2).wrapping_add_signed(i32::from(offset));
                Some(dest & 0xffff)
            }
            Operand::Absolute(abs)
            | Operand::AbsoluteIndirect(abs)
            | Operand::XIndexedAbsolute(abs)
            | Operand::YIndexedAbsolute(abs) => Some(u32::from(abs)),
            Operand::ZeroPage(zp)
            | Operand::XIndexedZeroPage(zp)
            | Operand::YIndexedZeroPage(zp) => Some(u32::from(zp)),
            Operand::Implied
            | Operand::Accumulator
            | Operand::Immediate(_)
            | Operand::XIndexedZeroPageIndirect(_)
            | Operand::ZeroPageIndirectYIndexed(_) => None,
        }
    }

    /// Returns the encoded operand bytes, in memory order.
    pub fn bytes(self) -> Vec<u8> {
        match self {
            Operand::Implied | Operand::Accumulator => Vec::new(),
            Operand::Immediate(byte)
            | Operand::ZeroPage(byte)
            | Operand::XIndexedZeroPage(byte)
            | Operand::YIndexedZeroPage(byte)
            | Operand::XIndexedZeroPageIndirect(byte)
            | Operand::ZeroPageIndirectYIndexed(byte) => vec![byte],
            Operand::Relative(offset) => vec![offset as u8],
            Operand::Absolute(abs)
            | Operand::AbsoluteIndirect(abs)
            | Operand::XIndexedAbsolute(abs)
            | Operand::YIndexedAbsolute(abs) => abs.to_le_bytes().to_vec(),
        }
    }
}

//===========================================================================//

/// A complete instruction, including its operand value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Instruction {
    /// The raw opcode byte.
    pub opcode: u8,
    /// The static decode information for the opcode.
    pub operation: Operation,
    /// The addressing mode parameter value.
    pub operand: Operand,
}

impl Instruction {
    /// Returns the size of this instruction, in bytes.
    pub fn size(self) -> usize {
        1 + self.operand.size()
    }

    /// Returns the mnemonic for this instruction.
    pub fn mnemonic(self) -> Mnemonic {
        self.operation.mnemonic
    }

    /// Returns true if the explorer should follow this instruction's operand
    /// as a new code entry point.  Indirect jumps go through a pointer that
    /// is only known at run time, so they are not followed.
    pub fn follows_target(self) -> bool {
        self.operation.is_branch()
            && !matches!(self.operand, Operand::AbsoluteIndirect(_))
    }

    /// Returns the encoded bytes of this instruction, opcode first.
    pub fn bytes(self) -> Vec<u8> {
        let mut bytes = vec![self.opcode];
        bytes.extend(self.operand.bytes());
        bytes
    }
}

//===========================================================================//

/// The result of decoding at one offset of a bank window.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Decoded {
    /// The whole instruction lies within the window.
    Complete(Instruction),
    /// The instruction's operand would extend past the end of the window.
    Truncated {
        /// The raw opcode byte.
        opcode: u8,
        /// How many operand bytes remain in the window after the opcode.
        available: usize,
    },
}

/// Decodes the instruction starting at `offset` within `window`.  Operand
/// bytes are never read from outside the window.
pub fn decode_at(
    bus: &dyn SimBus,
    window: BankWindow,
    offset: usize,
) -> Decoded {
    let pc = window.addr_at(offset);
    let opcode = bus.peek_byte(pc);
    let operation = Operation::from_opcode(opcode);
    let mode = operation.effective_mode();
    let available = window.size() - offset - 1;
    if mode.operand_size() > available {
        return Decoded::Truncated { opcode, available };
    }
    let operand = match mode {
        AddrMode::Implied => Operand::Implied,
        AddrMode::Accumulator => Operand::Accumulator,
        AddrMode::Immediate => Operand::Immediate(next_byte(bus, pc)),
        AddrMode::Relative => Operand::Relative(next_byte(bus, pc) as i8),
        AddrMode::Absolute => Operand::Absolute(next_word(bus, pc)),
        AddrMode::AbsoluteIndirect => {
            Operand::AbsoluteIndirect(next_word(bus, pc))
        }
        AddrMode::XIndexedAbsolute => {
            Operand::XIndexedAbsolute(next_word(bus, pc))
        }
        AddrMode::YIndexedAbsolute => {
            Operand::YIndexedAbsolute(next_word(bus, pc))
        }
        AddrMode::ZeroPage => Operand::ZeroPage(next_byte(bus, pc)),
        AddrMode::XIndexedZeroPage => {
            Operand::XIndexedZeroPage(next_byte(bus, pc))
        }
        AddrMode::YIndexedZeroPage => {
            Operand::YIndexedZeroPage(next_byte(bus, pc))
        }
        AddrMode::XIndexedZeroPageIndirect => {
            Operand::XIndexedZeroPageIndirect(next_byte(bus, pc))
        }
        AddrMode::ZeroPageIndirectYIndexed => {
            Operand::ZeroPageIndirectYIndexed(next_byte(bus, pc))
        }
    };
    Decoded::Complete(Instruction { opcode, operation, operand })
}

fn next_byte(bus: &dyn SimBus, pc: u32) -> u8 {
    bus.peek_byte(pc.wrapping_add(1))
}

fn next_word(bus: &dyn SimBus, pc: u32) -> u16 {
    peek_word(bus, pc.wrapping_add(1))
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{Decoded, Instruction, Operand, decode_at};
    use crate::addr::BankWindow;
    use crate::bus::{CartBus, SimBus};
    use crate::dis::opcode::Mnemonic;

    fn make_test_bus(code: &[u8], at: usize) -> CartBus {
        let mut rom = vec![0xeau8; 0x1000];
        rom[at..(at + code.len())].copy_from_slice(code);
        CartBus::new(rom.into_boxed_slice(), 0).unwrap()
    }

    fn window() -> BankWindow {
        BankWindow::containing(0xf000, 0x1000).unwrap()
    }

    fn decode(bus: &dyn SimBus, offset: usize) -> Instruction {
        match decode_at(bus, window(), offset) {
            Decoded::Complete(instruction) => instruction,
            Decoded::Truncated { .. } => panic!("unexpected truncation"),
        }
    }

    #[test]
    fn decode_operands() {
        let bus = make_test_bus(&[0xa9, 0x12], 0);
        assert_eq!(decode(&bus, 0).operand, Operand::Immediate(0x12));
        let bus = make_test_bus(&[0x8d, 0x34, 0x12], 0);
        let instruction = decode(&bus, 0);
        assert_eq!(instruction.mnemonic(), Mnemonic::Sta);
        assert_eq!(instruction.operand, Operand::Absolute(0x1234));
        assert_eq!(instruction.size(), 3);
        assert_eq!(instruction.bytes(), vec![0x8d, 0x34, 0x12]);
        let bus = make_test_bus(&[0x0a], 0);
        assert_eq!(decode(&bus, 0).operand, Operand::Accumulator);
        let bus = make_test_bus(&[0xb1, 0x80], 0);
        assert_eq!(
            decode(&bus, 0).operand,
            Operand::ZeroPageIndirectYIndexed(0x80)
        );
    }

    #[test]
    fn undocumented_opcodes_take_no_operand() {
        let bus = make_test_bus(&[0x0f, 0x34, 0x12], 0);
        let instruction = decode(&bus, 0);
        assert_eq!(instruction.mnemonic(), Mnemonic::UndocSlo);
        assert_eq!(instruction.operand, Operand::Implied);
        assert_eq!(instruction.size(), 1);
    }

    #[test]
    fn operand_targets() {
        assert_eq!(Operand::Relative(-2).target(0xf010), Some(0xf010));
        assert_eq!(Operand::Relative(0x10).target(0xf010), Some(0xf022));
        assert_eq!(Operand::Relative(0x7e).target(0xfffe), Some(0x007e));
        assert_eq!(Operand::Relative(-0x80).target(0x0010), Some(0xff92));
        assert_eq!(Operand::Absolute(0xf123).target(0xf000), Some(0xf123));
        assert_eq!(Operand::ZeroPage(0x02).target(0xf000), Some(0x02));
        assert_eq!(Operand::Immediate(0x02).target(0xf000), None);
        assert_eq!(
            Operand::XIndexedZeroPageIndirect(0x80).target(0xf000),
            None
        );
        assert_eq!(
            Operand::AbsoluteIndirect(0xfffc).target(0xf000),
            Some(0xfffc)
        );
    }

    #[test]
    fn followed_targets() {
        let bus = make_test_bus(&[0x4c, 0x00, 0xf0], 0);
        assert!(decode(&bus, 0).follows_target());
        let bus = make_test_bus(&[0x6c, 0xfc, 0xff], 0);
        assert!(!decode(&bus, 0).follows_target());
        let bus = make_test_bus(&[0xd0, 0xfe], 0);
        assert!(decode(&bus, 0).follows_target());
        let bus = make_test_bus(&[0xad, 0x00, 0xf0], 0);
        assert!(!decode(&bus, 0).follows_target());
    }

    #[test]
    fn decode_truncates_at_window_end() {
        let bus = make_test_bus(&[0xad, 0x34], 0xffe);
        assert_eq!(
            decode_at(&bus, window(), 0xffe),
            Decoded::Truncated { opcode: 0xad, available: 1 }
        );
        let bus = make_test_bus(&[0xad], 0xfff);
        assert_eq!(
            decode_at(&bus, window(), 0xfff),
            Decoded::Truncated { opcode: 0xad, available: 0 }
        );
        let bus = make_test_bus(&[0xa1], 0xfff);
        assert_eq!(
            decode_at(&bus, window(), 0xfff),
            Decoded::Truncated { opcode: 0xa1, available: 0 }
        );
        let bus = make_test_bus(&[0xa9, 0x01], 0xffe);
        assert_eq!(decode(&bus, 0xffe).operand, Operand::Immediate(0x01));
        let bus = make_test_bus(&[0x60], 0xfff);
        assert_eq!(decode(&bus, 0xfff).mnemonic(), Mnemonic::Rts);
    }
}

//===========================================================================//
