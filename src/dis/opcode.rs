//! The instruction set of the 6507 processor, including undocumented
//! opcodes.

use std::fmt;

//===========================================================================//

/// The static decode information for one opcode byte: mnemonic, addressing
/// mode, the classes of operand it reads and writes, and its base cycle
/// count.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Operation {
    /// The kind of operation to be performed.
    pub mnemonic: Mnemonic,
    /// The addressing mode to use for this operation.
    pub addr_mode: AddrMode,
    /// What the operation reads from.
    pub source: OperandClass,
    /// What the operation writes to.
    pub destination: OperandClass,
    /// The base cycle count.  This is zero for opcodes that halt the
    /// processor.
    pub cycles: u8,
}

const fn op(
    mnemonic: Mnemonic,
    addr_mode: AddrMode,
    source: OperandClass,
    destination: OperandClass,
    cycles: u8,
) -> Operation {
    Operation { mnemonic, addr_mode, source, destination, cycles }
}

impl Operation {
    /// Decodes an opcode byte.  Every byte value decodes to something;
    /// unassigned slots decode to undocumented operations.
    #[rustfmt::skip]
    pub fn from_opcode(opcode: u8) -> Operation {
        use AddrMode as M;
        use Mnemonic as N;
        use OperandClass as C;
        match opcode {
            0x00 => op(N::Brk, M::Implied, C::None, C::ProgramCounter, 7),
            0x01 => op(N::Ora, M::XIndexedZeroPageIndirect, C::XIndexedIndirect, C::Accumulator, 6),
            0x02 => op(N::UndocJam, M::Implied, C::None, C::None, 0),
            0x03 => op(N::UndocSlo, M::XIndexedZeroPageIndirect, C::XIndexedIndirect, C::XIndexedIndirect, 8),
            0x04 => op(N::UndocNoop, M::ZeroPage, C::None, C::None, 3),
            0x05 => op(N::Ora, M::ZeroPage, C::ZeroPage, C::Accumulator, 3),
            0x06 => op(N::Asl, M::ZeroPage, C::ZeroPage, C::ZeroPage, 5),
            0x07 => op(N::UndocSlo, M::ZeroPage, C::ZeroPage, C::ZeroPage, 5),
            0x08 => op(N::Php, M::Implied, C::StatusRegister, C::None, 3),
            0x09 => op(N::Ora, M::Immediate, C::Immediate, C::Accumulator, 2),
            0x0a => op(N::Asl, M::Accumulator, C::Accumulator, C::Accumulator, 2),
            0x0b => op(N::UndocAnc, M::Immediate, C::AccumulatorAndImmediate, C::AccumulatorWithCarry, 2),
            0x0c => op(N::UndocNoop, M::Absolute, C::None, C::None, 4),
            0x0d => op(N::Ora, M::Absolute, C::Absolute, C::Accumulator, 4),
            0x0e => op(N::Asl, M::Absolute, C::Absolute, C::Absolute, 6),
            0x0f => op(N::UndocSlo, M::Absolute, C::Absolute, C::Absolute, 6),
            0x10 => op(N::Bpl, M::Relative, C::Relative, C::None, 2),
            0x11 => op(N::Ora, M::ZeroPageIndirectYIndexed, C::IndirectYIndexed, C::Accumulator, 5),
            0x12 => op(N::UndocJam, M::Implied, C::None, C::None, 0),
            0x13 => op(N::UndocSlo, M::ZeroPageIndirectYIndexed, C::IndirectYIndexed, C::IndirectYIndexed, 8),
            0x14 => op(N::UndocNoop, M::XIndexedZeroPage, C::None, C::None, 4),
            0x15 => op(N::Ora, M::XIndexedZeroPage, C::XIndexedZeroPage, C::Accumulator, 4),
            0x16 => op(N::Asl, M::XIndexedZeroPage, C::XIndexedZeroPage, C::XIndexedZeroPage, 6),
            0x17 => op(N::UndocSlo, M::XIndexedZeroPage, C::XIndexedZeroPage, C::XIndexedZeroPage, 6),
            0x18 => op(N::Clc, M::Implied, C::None, C::CarryFlag, 2),
            0x19 => op(N::Ora, M::YIndexedAbsolute, C::YIndexedAbsolute, C::Accumulator, 4),
            0x1a => op(N::UndocNoop, M::Implied, C::None, C::None, 2),
            0x1b => op(N::UndocSlo, M::YIndexedAbsolute, C::YIndexedAbsolute, C::YIndexedAbsolute, 7),
            0x1c => op(N::UndocNoop, M::XIndexedAbsolute, C::None, C::None, 4),
            0x1d => op(N::Ora, M::XIndexedAbsolute, C::XIndexedAbsolute, C::Accumulator, 4),
            0x1e => op(N::Asl, M::XIndexedAbsolute, C::XIndexedAbsolute, C::XIndexedAbsolute, 7),
            0x1f => op(N::UndocSlo, M::XIndexedAbsolute, C::XIndexedAbsolute, C::XIndexedAbsolute, 7),
            0x20 => op(N::Jsr, M::Absolute, C::JumpTarget, C::ProgramCounter, 6),
            0x21 => op(N::And, M::XIndexedZeroPageIndirect, C::XIndexedIndirect, C::Accumulator, 6),
            0x22 => op(N::UndocJam, M::Implied, C::None, C::None, 0),
            0x23 => op(N::UndocRla, M::XIndexedZeroPageIndirect, C::XIndexedIndirect, C::XIndexedIndirect, 8),
            0x24 => op(N::Bit, M::ZeroPage, C::ZeroPage, C::None, 3),
            0x25 => op(N::And, M::ZeroPage, C::ZeroPage, C::Accumulator, 3),
            0x26 => op(N::Rol, M::ZeroPage, C::ZeroPage, C::ZeroPage, 5),
            0x27 => op(N::UndocRla, M::ZeroPage, C::ZeroPage, C::ZeroPage, 5),
            0x28 => op(N::Plp, M::Implied, C::None, C::StatusRegister, 4),
            0x29 => op(N::And, M::Immediate, C::Immediate, C::Accumulator, 2),
            0x2a => op(N::Rol, M::Accumulator, C::Accumulator, C::Accumulator, 2),
            0x2b => op(N::UndocAnc, M::Immediate, C::AccumulatorAndImmediate, C::AccumulatorWithCarry, 2),
            0x2c => op(N::Bit, M::Absolute, C::Absolute, C::None, 4),
            0x2d => op(N::And, M::Absolute, C::Absolute, C::Accumulator, 4),
            0x2e => op(N::Rol, M::Absolute, C::Absolute, C::Absolute, 6),
            0x2f => op(N::UndocRla, M::Absolute, C::Absolute, C::Absolute, 6),
            0x30 => op(N::Bmi, M::Relative, C::Relative, C::None, 2),
            0x31 => op(N::And, M::ZeroPageIndirectYIndexed, C::IndirectYIndexed, C::Accumulator, 5),
            0x32 => op(N::UndocJam, M::Implied, C::None, C::None, 0),
            0x33 => op(N::UndocRla, M::ZeroPageIndirectYIndexed, C::IndirectYIndexed, C::IndirectYIndexed, 8),
            0x34 => op(N::UndocNoop, M::XIndexedZeroPage, C::None, C::None, 4),
            0x35 => op(N::And, M::XIndexedZeroPage, C::XIndexedZeroPage, C::Accumulator, 4),
            0x36 => op(N::Rol, M::XIndexedZeroPage, C::XIndexedZeroPage, C::XIndexedZeroPage, 6),
            0x37 => op(N::UndocRla, M::XIndexedZeroPage, C::XIndexedZeroPage, C::XIndexedZeroPage, 6),
            0x38 => op(N::Sec, M::Implied, C::None, C::CarryFlag, 2),
            0x39 => op(N::And, M::YIndexedAbsolute, C::YIndexedAbsolute, C::Accumulator, 4),
            0x3a => op(N::UndocNoop, M::Implied, C::None, C::None, 2),
            0x3b => op(N::UndocRla, M::YIndexedAbsolute, C::YIndexedAbsolute, C::YIndexedAbsolute, 7),
            0x3c => op(N::UndocNoop, M::XIndexedAbsolute, C::None, C::None, 4),
            0x3d => op(N::And, M::XIndexedAbsolute, C::XIndexedAbsolute, C::Accumulator, 4),
            0x3e => op(N::Rol, M::XIndexedAbsolute, C::XIndexedAbsolute, C::XIndexedAbsolute, 7),
            0x3f => op(N::UndocRla, M::XIndexedAbsolute, C::XIndexedAbsolute, C::XIndexedAbsolute, 7),
            0x40 => op(N::Rti, M::Implied, C::None, C::ProgramCounter, 6),
            0x41 => op(N::Eor, M::XIndexedZeroPageIndirect, C::XIndexedIndirect, C::Accumulator, 6),
            0x42 => op(N::UndocJam, M::Implied, C::None, C::None, 0),
            0x43 => op(N::UndocSre, M::XIndexedZeroPageIndirect, C::XIndexedIndirect, C::XIndexedIndirect, 8),
            0x44 => op(N::UndocNoop, M::ZeroPage, C::None, C::None, 3),
            0x45 => op(N::Eor, M::ZeroPage, C::ZeroPage, C::Accumulator, 3),
            0x46 => op(N::Lsr, M::ZeroPage, C::ZeroPage, C::ZeroPage, 5),
            0x47 => op(N::UndocSre, M::ZeroPage, C::ZeroPage, C::ZeroPage, 5),
            0x48 => op(N::Pha, M::Implied, C::Accumulator, C::None, 3),
            0x49 => op(N::Eor, M::Immediate, C::Immediate, C::Accumulator, 2),
            0x4a => op(N::Lsr, M::Accumulator, C::Accumulator, C::Accumulator, 2),
            0x4b => op(N::UndocAsr, M::Immediate, C::AccumulatorAndImmediate, C::Accumulator, 2),
            0x4c => op(N::Jmp, M::Absolute, C::JumpTarget, C::ProgramCounter, 3),
            0x4d => op(N::Eor, M::Absolute, C::Absolute, C::Accumulator, 4),
            0x4e => op(N::Lsr, M::Absolute, C::Absolute, C::Absolute, 6),
            0x4f => op(N::UndocSre, M::Absolute, C::Absolute, C::Absolute, 6),
            0x50 => op(N::Bvc, M::Relative, C::Relative, C::None, 2),
            0x51 => op(N::Eor, M::ZeroPageIndirectYIndexed, C::IndirectYIndexed, C::Accumulator, 5),
            0x52 => op(N::UndocJam, M::Implied, C::None, C::None, 0),
            0x53 => op(N::UndocSre, M::ZeroPageIndirectYIndexed, C::IndirectYIndexed, C::IndirectYIndexed, 8),
            0x54 => op(N::UndocNoop, M::XIndexedZeroPage, C::None, C::None, 4),
            0x55 => op(N::Eor, M::XIndexedZeroPage, C::XIndexedZeroPage, C::Accumulator, 4),
            0x56 => op(N::Lsr, M::XIndexedZeroPage, C::XIndexedZeroPage, C::XIndexedZeroPage, 6),
            0x57 => op(N::UndocSre, M::XIndexedZeroPage, C::XIndexedZeroPage, C::XIndexedZeroPage, 6),
            0x58 => op(N::Cli, M::Implied, C::None, C::InterruptFlag, 2),
            0x59 => op(N::Eor, M::YIndexedAbsolute, C::YIndexedAbsolute, C::Accumulator, 4),
            0x5a => op(N::UndocNoop, M::Implied, C::None, C::None, 2),
            0x5b => op(N::UndocSre, M::YIndexedAbsolute, C::YIndexedAbsolute, C::YIndexedAbsolute, 7),
            0x5c => op(N::UndocNoop, M::XIndexedAbsolute, C::None, C::None, 4),
            0x5d => op(N::Eor, M::XIndexedAbsolute, C::XIndexedAbsolute, C::Accumulator, 4),
            0x5e => op(N::Lsr, M::XIndexedAbsolute, C::XIndexedAbsolute, C::XIndexedAbsolute, 7),
            0x5f => op(N::UndocSre, M::XIndexedAbsolute, C::XIndexedAbsolute, C::XIndexedAbsolute, 7),
            0x60 => op(N::Rts, M::Implied, C::None, C::ProgramCounter, 6),
            0x61 => op(N::Adc, M::XIndexedZeroPageIndirect, C::XIndexedIndirect, C::Accumulator, 6),
            0x62 => op(N::UndocJam, M::Implied, C::None, C::None, 0),
            0x63 => op(N::UndocRra, M::XIndexedZeroPageIndirect, C::XIndexedIndirect, C::XIndexedIndirect, 8),
            0x64 => op(N::UndocNoop, M::ZeroPage, C::None, C::None, 3),
            0x65 => op(N::Adc, M::ZeroPage, C::ZeroPage, C::Accumulator, 3),
            0x66 => op(N::Ror, M::ZeroPage, C::ZeroPage, C::ZeroPage, 5),
            0x67 => op(N::UndocRra, M::ZeroPage, C::ZeroPage, C::ZeroPage, 5),
            0x68 => op(N::Pla, M::Implied, C::None, C::Accumulator, 4),
            0x69 => op(N::Adc, M::Immediate, C::Immediate, C::Accumulator, 2),
            0x6a => op(N::Ror, M::Accumulator, C::Accumulator, C::Accumulator, 2),
            0x6b => op(N::UndocArr, M::Immediate, C::AccumulatorAndImmediate, C::Accumulator, 2),
            0x6c => op(N::Jmp, M::AbsoluteIndirect, C::AbsoluteIndirect, C::ProgramCounter, 5),
            0x6d => op(N::Adc, M::Absolute, C::Absolute, C::Accumulator, 4),
            0x6e => op(N::Ror, M::Absolute, C::Absolute, C::Absolute, 6),
            0x6f => op(N::UndocRra, M::Absolute, C::Absolute, C::Absolute, 6),
            0x70 => op(N::Bvs, M::Relative, C::Relative, C::None, 2),
            0x71 => op(N::Adc, M::ZeroPageIndirectYIndexed, C::IndirectYIndexed, C::Accumulator, 5),
            0x72 => op(N::UndocJam, M::Implied, C::None, C::None, 0),
            0x73 => op(N::UndocRra, M::ZeroPageIndirectYIndexed, C::IndirectYIndexed, C::IndirectYIndexed, 8),
            0x74 => op(N::UndocNoop, M::XIndexedZeroPage, C::None, C::None, 4),
            0x75 => op(N::Adc, M::XIndexedZeroPage, C::XIndexedZeroPage, C::Accumulator, 4),
            0x76 => op(N::Ror, M::XIndexedZeroPage, C::XIndexedZeroPage, C::XIndexedZeroPage, 6),
            0x77 => op(N::UndocRra, M::XIndexedZeroPage, C::XIndexedZeroPage, C::XIndexedZeroPage, 6),
            0x78 => op(N::Sei, M::Implied, C::None, C::InterruptFlag, 2),
            0x79 => op(N::Adc, M::YIndexedAbsolute, C::YIndexedAbsolute, C::Accumulator, 4),
            0x7a => op(N::UndocNoop, M::Implied, C::None, C::None, 2),
            0x7b => op(N::UndocRra, M::YIndexedAbsolute, C::YIndexedAbsolute, C::YIndexedAbsolute, 7),
            0x7c => op(N::UndocNoop, M::XIndexedAbsolute, C::None, C::None, 4),
            0x7d => op(N::Adc, M::XIndexedAbsolute, C::XIndexedAbsolute, C::Accumulator, 4),
            0x7e => op(N::Ror, M::XIndexedAbsolute, C::XIndexedAbsolute, C::XIndexedAbsolute, 7),
            0x7f => op(N::UndocRra, M::XIndexedAbsolute, C::XIndexedAbsolute, C::XIndexedAbsolute, 7),
            0x80 => op(N::UndocNoop, M::Immediate, C::None, C::None, 2),
            0x81 => op(N::Sta, M::XIndexedZeroPageIndirect, C::Accumulator, C::XIndexedIndirect, 6),
            0x82 => op(N::UndocNoop, M::Immediate, C::None, C::None, 2),
            0x83 => op(N::UndocSax, M::XIndexedZeroPageIndirect, C::AccumulatorAndX, C::XIndexedIndirect, 6),
            0x84 => op(N::Sty, M::ZeroPage, C::YRegister, C::ZeroPage, 3),
            0x85 => op(N::Sta, M::ZeroPage, C::Accumulator, C::ZeroPage, 3),
            0x86 => op(N::Stx, M::ZeroPage, C::XRegister, C::ZeroPage, 3),
            0x87 => op(N::UndocSax, M::ZeroPage, C::AccumulatorAndX, C::ZeroPage, 3),
            0x88 => op(N::Dey, M::Implied, C::YRegister, C::YRegister, 2),
            0x89 => op(N::UndocNoop, M::Immediate, C::None, C::None, 2),
            0x8a => op(N::Txa, M::Implied, C::XRegister, C::Accumulator, 2),
            0x8b => op(N::UndocAne, M::Immediate, C::AccumulatorXAndImmediate, C::Accumulator, 2),
            0x8c => op(N::Sty, M::Absolute, C::YRegister, C::Absolute, 4),
            0x8d => op(N::Sta, M::Absolute, C::Accumulator, C::Absolute, 4),
            0x8e => op(N::Stx, M::Absolute, C::XRegister, C::Absolute, 4),
            0x8f => op(N::UndocSax, M::Absolute, C::AccumulatorAndX, C::Absolute, 4),
            0x90 => op(N::Bcc, M::Relative, C::Relative, C::None, 2),
            0x91 => op(N::Sta, M::ZeroPageIndirectYIndexed, C::Accumulator, C::IndirectYIndexed, 6),
            0x92 => op(N::UndocJam, M::Implied, C::None, C::None, 0),
            0x93 => op(N::UndocSha, M::ZeroPageIndirectYIndexed, C::AccumulatorAndX, C::StoreHigh0, 6),
            0x94 => op(N::Sty, M::XIndexedZeroPage, C::YRegister, C::XIndexedZeroPage, 4),
            0x95 => op(N::Sta, M::XIndexedZeroPage, C::Accumulator, C::XIndexedZeroPage, 4),
            0x96 => op(N::Stx, M::YIndexedZeroPage, C::XRegister, C::YIndexedZeroPage, 4),
            0x97 => op(N::UndocSax, M::YIndexedZeroPage, C::AccumulatorAndX, C::YIndexedZeroPage, 4),
            0x98 => op(N::Tya, M::Implied, C::YRegister, C::Accumulator, 2),
            0x99 => op(N::Sta, M::YIndexedAbsolute, C::Accumulator, C::YIndexedAbsolute, 5),
            0x9a => op(N::Txs, M::Implied, C::XRegister, C::StackPointer, 2),
            0x9b => op(N::UndocShs, M::YIndexedAbsolute, C::AccumulatorAndX, C::StoreHigh3, 5),
            0x9c => op(N::UndocShy, M::XIndexedAbsolute, C::YRegister, C::StoreHigh2, 5),
            0x9d => op(N::Sta, M::XIndexedAbsolute, C::Accumulator, C::XIndexedAbsolute, 5),
            0x9e => op(N::UndocShx, M::YIndexedAbsolute, C::XRegister, C::StoreHigh1, 5),
            0x9f => op(N::UndocSha, M::YIndexedAbsolute, C::AccumulatorAndX, C::StoreHigh1, 5),
            0xa0 => op(N::Ldy, M::Immediate, C::Immediate, C::YRegister, 2),
            0xa1 => op(N::Lda, M::XIndexedZeroPageIndirect, C::XIndexedIndirect, C::Accumulator, 6),
            0xa2 => op(N::Ldx, M::Immediate, C::Immediate, C::XRegister, 2),
            0xa3 => op(N::UndocLax, M::XIndexedZeroPageIndirect, C::XIndexedIndirect, C::AccumulatorAndXLoaded, 6),
            0xa4 => op(N::Ldy, M::ZeroPage, C::ZeroPage, C::YRegister, 3),
            0xa5 => op(N::Lda, M::ZeroPage, C::ZeroPage, C::Accumulator, 3),
            0xa6 => op(N::Ldx, M::ZeroPage, C::ZeroPage, C::XRegister, 3),
            0xa7 => op(N::UndocLax, M::ZeroPage, C::ZeroPage, C::AccumulatorAndXLoaded, 3),
            0xa8 => op(N::Tay, M::Implied, C::Accumulator, C::YRegister, 2),
            0xa9 => op(N::Lda, M::Immediate, C::Immediate, C::Accumulator, 2),
            0xaa => op(N::Tax, M::Implied, C::Accumulator, C::XRegister, 2),
            0xab => op(N::UndocLxa, M::Immediate, C::AccumulatorAndImmediate, C::AccumulatorAndXLoaded, 2),
            0xac => op(N::Ldy, M::Absolute, C::Absolute, C::YRegister, 4),
            0xad => op(N::Lda, M::Absolute, C::Absolute, C::Accumulator, 4),
            0xae => op(N::Ldx, M::Absolute, C::Absolute, C::XRegister, 4),
            0xaf => op(N::UndocLax, M::Absolute, C::Absolute, C::AccumulatorAndXLoaded, 4),
            0xb0 => op(N::Bcs, M::Relative, C::Relative, C::None, 2),
            0xb1 => op(N::Lda, M::ZeroPageIndirectYIndexed, C::IndirectYIndexed, C::Accumulator, 5),
            0xb2 => op(N::UndocJam, M::Implied, C::None, C::None, 0),
            0xb3 => op(N::UndocLax, M::ZeroPageIndirectYIndexed, C::IndirectYIndexed, C::AccumulatorAndXLoaded, 5),
            0xb4 => op(N::Ldy, M::XIndexedZeroPage, C::XIndexedZeroPage, C::YRegister, 4),
            0xb5 => op(N::Lda, M::XIndexedZeroPage, C::XIndexedZeroPage, C::Accumulator, 4),
            0xb6 => op(N::Ldx, M::YIndexedZeroPage, C::YIndexedZeroPage, C::XRegister, 4),
            0xb7 => op(N::UndocLax, M::YIndexedZeroPage, C::YIndexedZeroPage, C::AccumulatorAndXLoaded, 4),
            0xb8 => op(N::Clv, M::Implied, C::None, C::OverflowFlag, 2),
            0xb9 => op(N::Lda, M::YIndexedAbsolute, C::YIndexedAbsolute, C::Accumulator, 4),
            0xba => op(N::Tsx, M::Implied, C::StackPointer, C::XRegister, 2),
            0xbb => op(N::UndocLas, M::YIndexedAbsolute, C::StackAndYIndexedAbsolute, C::AccumulatorXAndStack, 4),
            0xbc => op(N::Ldy, M::XIndexedAbsolute, C::XIndexedAbsolute, C::YRegister, 4),
            0xbd => op(N::Lda, M::XIndexedAbsolute, C::XIndexedAbsolute, C::Accumulator, 4),
            0xbe => op(N::Ldx, M::YIndexedAbsolute, C::YIndexedAbsolute, C::XRegister, 4),
            0xbf => op(N::UndocLax, M::YIndexedAbsolute, C::YIndexedAbsolute, C::AccumulatorAndXLoaded, 4),
            0xc0 => op(N::Cpy, M::Immediate, C::Immediate, C::None, 2),
            0xc1 => op(N::Cmp, M::XIndexedZeroPageIndirect, C::XIndexedIndirect, C::None, 6),
            0xc2 => op(N::UndocNoop, M::Immediate, C::None, C::None, 2),
            0xc3 => op(N::UndocDcp, M::XIndexedZeroPageIndirect, C::XIndexedIndirect, C::XIndexedIndirect, 8),
            0xc4 => op(N::Cpy, M::ZeroPage, C::ZeroPage, C::None, 3),
            0xc5 => op(N::Cmp, M::ZeroPage, C::ZeroPage, C::None, 3),
            0xc6 => op(N::Dec, M::ZeroPage, C::ZeroPage, C::ZeroPage, 5),
            0xc7 => op(N::UndocDcp, M::ZeroPage, C::ZeroPage, C::ZeroPage, 5),
            0xc8 => op(N::Iny, M::Implied, C::YRegister, C::YRegister, 2),
            0xc9 => op(N::Cmp, M::Immediate, C::Immediate, C::None, 2),
            0xca => op(N::Dex, M::Implied, C::XRegister, C::XRegister, 2),
            0xcb => op(N::UndocSbx, M::Immediate, C::Immediate, C::XRegister, 2),
            0xcc => op(N::Cpy, M::Absolute, C::Absolute, C::None, 4),
            0xcd => op(N::Cmp, M::Absolute, C::Absolute, C::None, 4),
            0xce => op(N::Dec, M::Absolute, C::Absolute, C::Absolute, 6),
            0xcf => op(N::UndocDcp, M::Absolute, C::Absolute, C::Absolute, 6),
            0xd0 => op(N::Bne, M::Relative, C::Relative, C::None, 2),
            0xd1 => op(N::Cmp, M::ZeroPageIndirectYIndexed, C::IndirectYIndexed, C::None, 5),
            0xd2 => op(N::UndocJam, M::Implied, C::None, C::None, 0),
            0xd3 => op(N::UndocDcp, M::ZeroPageIndirectYIndexed, C::IndirectYIndexed, C::IndirectYIndexed, 8),
            0xd4 => op(N::UndocNoop, M::XIndexedZeroPage, C::None, C::None, 4),
            0xd5 => op(N::Cmp, M::XIndexedZeroPage, C::XIndexedZeroPage, C::None, 4),
            0xd6 => op(N::Dec, M::XIndexedZeroPage, C::XIndexedZeroPage, C::XIndexedZeroPage, 6),
            0xd7 => op(N::UndocDcp, M::XIndexedZeroPage, C::XIndexedZeroPage, C::XIndexedZeroPage, 6),
            0xd8 => op(N::Cld, M::Implied, C::None, C::DecimalFlag, 2),
            0xd9 => op(N::Cmp, M::YIndexedAbsolute, C::YIndexedAbsolute, C::None, 4),
            0xda => op(N::UndocNoop, M::Implied, C::None, C::None, 2),
            0xdb => op(N::UndocDcp, M::YIndexedAbsolute, C::YIndexedAbsolute, C::YIndexedAbsolute, 7),
            0xdc => op(N::UndocNoop, M::XIndexedAbsolute, C::None, C::None, 4),
            0xdd => op(N::Cmp, M::XIndexedAbsolute, C::XIndexedAbsolute, C::None, 4),
            0xde => op(N::Dec, M::XIndexedAbsolute, C::XIndexedAbsolute, C::XIndexedAbsolute, 7),
            0xdf => op(N::UndocDcp, M::XIndexedAbsolute, C::XIndexedAbsolute, C::XIndexedAbsolute, 7),
            0xe0 => op(N::Cpx, M::Immediate, C::Immediate, C::None, 2),
            0xe1 => op(N::Sbc, M::XIndexedZeroPageIndirect, C::XIndexedIndirect, C::Accumulator, 6),
            0xe2 => op(N::UndocNoop, M::Immediate, C::None, C::None, 2),
            0xe3 => op(N::UndocIsb, M::XIndexedZeroPageIndirect, C::XIndexedIndirect, C::XIndexedIndirect, 8),
            0xe4 => op(N::Cpx, M::ZeroPage, C::ZeroPage, C::None, 3),
            0xe5 => op(N::Sbc, M::ZeroPage, C::ZeroPage, C::Accumulator, 3),
            0xe6 => op(N::Inc, M::ZeroPage, C::ZeroPage, C::ZeroPage, 5),
            0xe7 => op(N::UndocIsb, M::ZeroPage, C::ZeroPage, C::ZeroPage, 5),
            0xe8 => op(N::Inx, M::Implied, C::XRegister, C::XRegister, 2),
            0xe9 => op(N::Sbc, M::Immediate, C::Immediate, C::Accumulator, 2),
            0xea => op(N::Nop, M::Implied, C::None, C::None, 2),
            0xeb => op(N::UndocUsbc, M::Immediate, C::Immediate, C::Accumulator, 2),
            0xec => op(N::Cpx, M::Absolute, C::Absolute, C::None, 4),
            0xed => op(N::Sbc, M::Absolute, C::Absolute, C::Accumulator, 4),
            0xee => op(N::Inc, M::Absolute, C::Absolute, C::Absolute, 6),
            0xef => op(N::UndocIsb, M::Absolute, C::Absolute, C::Absolute, 6),
            0xf0 => op(N::Beq, M::Relative, C::Relative, C::None, 2),
            0xf1 => op(N::Sbc, M::ZeroPageIndirectYIndexed, C::IndirectYIndexed, C::Accumulator, 5),
            0xf2 => op(N::UndocJam, M::Implied, C::None, C::None, 0),
            0xf3 => op(N::UndocIsb, M::ZeroPageIndirectYIndexed, C::IndirectYIndexed, C::IndirectYIndexed, 8),
            0xf4 => op(N::UndocNoop, M::XIndexedZeroPage, C::None, C::None, 4),
            0xf5 => op(N::Sbc, M::XIndexedZeroPage, C::XIndexedZeroPage, C::Accumulator, 4),
            0xf6 => op(N::Inc, M::XIndexedZeroPage, C::XIndexedZeroPage, C::XIndexedZeroPage, 6),
            0xf7 => op(N::UndocIsb, M::XIndexedZeroPage, C::XIndexedZeroPage, C::XIndexedZeroPage, 6),
            0xf8 => op(N::Sed, M::Implied, C::None, C::DecimalFlag, 2),
            0xf9 => op(N::Sbc, M::YIndexedAbsolute, C::YIndexedAbsolute, C::Accumulator, 4),
            0xfa => op(N::UndocNoop, M::Implied, C::None, C::None, 2),
            0xfb => op(N::UndocIsb, M::YIndexedAbsolute, C::YIndexedAbsolute, C::YIndexedAbsolute, 7),
            0xfc => op(N::UndocNoop, M::XIndexedAbsolute, C::None, C::None, 4),
            0xfd => op(N::Sbc, M::XIndexedAbsolute, C::XIndexedAbsolute, C::Accumulator, 4),
            0xfe => op(N::Inc, M::XIndexedAbsolute, C::XIndexedAbsolute, C::XIndexedAbsolute, 7),
            0xff => op(N::UndocIsb, M::XIndexedAbsolute, C::XIndexedAbsolute, C::XIndexedAbsolute, 7),
        }
    }

    /// Returns true if this operation changes control flow to an address
    /// encoded in its operand (branches, `JMP` and `JSR`).
    pub fn is_branch(self) -> bool {
        matches!(
            self.source,
            OperandClass::Relative
                | OperandClass::JumpTarget
                | OperandClass::AbsoluteIndirect
        )
    }

    /// Returns true if execution never falls through to the next
    /// instruction (`RTS`, `RTI`, and both forms of `JMP`).
    pub fn is_terminator(self) -> bool {
        matches!(self.mnemonic, Mnemonic::Rts | Mnemonic::Rti | Mnemonic::Jmp)
    }

    /// Returns true if the listing should put a blank line after this
    /// operation.
    pub fn ends_block(self) -> bool {
        matches!(self.mnemonic, Mnemonic::Rts | Mnemonic::Rti)
    }

    /// Returns the addressing mode that decoding actually uses.
    /// Undocumented opcodes are listed as single bytes, so their operand (if
    /// any) is never consumed.
    pub fn effective_mode(self) -> AddrMode {
        if self.mnemonic.is_undocumented() {
            AddrMode::Implied
        } else {
            self.addr_mode
        }
    }
}

//===========================================================================//

/// An operation mnemonic (ignoring the addressing mode).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mnemonic {
    /// Add memory to the accumulator with carry.
    Adc,
    /// Bitwise AND memory with the accumulator.
    And,
    /// Shift left one bit.
    Asl,
    /// Branch on carry clear.
    Bcc,
    /// Branch on carry set.
    Bcs,
    /// Branch on result zero.
    Beq,
    /// Test memory bits against the accumulator.
    Bit,
    /// Branch on result minus.
    Bmi,
    /// Branch on result not zero.
    Bne,
    /// Branch on result plus.
    Bpl,
    /// Force a software interrupt.
    Brk,
    /// Branch on overflow clear.
    Bvc,
    /// Branch on overflow set.
    Bvs,
    /// Clear the carry flag.
    Clc,
    /// Clear decimal mode.
    Cld,
    /// Clear the interrupt-disable flag.
    Cli,
    /// Clear the overflow flag.
    Clv,
    /// Compare memory with the accumulator.
    Cmp,
    /// Compare memory with index X.
    Cpx,
    /// Compare memory with index Y.
    Cpy,
    /// Decrement memory.
    Dec,
    /// Decrement index X.
    Dex,
    /// Decrement index Y.
    Dey,
    /// Exclusive-OR memory with the accumulator.
    Eor,
    /// Increment memory.
    Inc,
    /// Increment index X.
    Inx,
    /// Increment index Y.
    Iny,
    /// Jump to a new location.
    Jmp,
    /// Jump to a subroutine, saving the return address.
    Jsr,
    /// Load the accumulator.
    Lda,
    /// Load index X.
    Ldx,
    /// Load index Y.
    Ldy,
    /// Shift right one bit.
    Lsr,
    /// No operation.
    Nop,
    /// Bitwise OR memory with the accumulator.
    Ora,
    /// Push the accumulator.
    Pha,
    /// Push the processor status.
    Php,
    /// Pull the accumulator.
    Pla,
    /// Pull the processor status.
    Plp,
    /// Rotate left one bit.
    Rol,
    /// Rotate right one bit.
    Ror,
    /// Return from interrupt.
    Rti,
    /// Return from subroutine.
    Rts,
    /// Subtract memory from the accumulator with borrow.
    Sbc,
    /// Set the carry flag.
    Sec,
    /// Set decimal mode.
    Sed,
    /// Set the interrupt-disable flag.
    Sei,
    /// Store the accumulator.
    Sta,
    /// Store index X.
    Stx,
    /// Store index Y.
    Sty,
    /// Transfer the accumulator to index X.
    Tax,
    /// Transfer the accumulator to index Y.
    Tay,
    /// Transfer the stack pointer to index X.
    Tsx,
    /// Transfer index X to the accumulator.
    Txa,
    /// Transfer index X to the stack pointer.
    Txs,
    /// Transfer index Y to the accumulator.
    Tya,
    /// Undocumented: AND immediate, then copy bit 7 into carry.
    UndocAnc,
    /// Undocumented, unstable: AND X and immediate into A.
    UndocAne,
    /// Undocumented: AND immediate, then rotate right.
    UndocArr,
    /// Undocumented: AND immediate, then shift right.
    UndocAsr,
    /// Undocumented: decrement memory, then compare.
    UndocDcp,
    /// Undocumented: increment memory, then subtract.
    UndocIsb,
    /// Undocumented: halts the processor.
    UndocJam,
    /// Undocumented: AND memory with S into A, X and S.
    UndocLas,
    /// Undocumented: load A and X together.
    UndocLax,
    /// Undocumented, unstable: load A and X from an immediate.
    UndocLxa,
    /// Undocumented multi-byte no-op.
    UndocNoop,
    /// Undocumented: rotate memory left, then AND.
    UndocRla,
    /// Undocumented: rotate memory right, then add.
    UndocRra,
    /// Undocumented: store A AND X.
    UndocSax,
    /// Undocumented: X = (A AND X) minus immediate.
    UndocSbx,
    /// Undocumented, unstable: store A AND X AND (high byte + 1).
    UndocSha,
    /// Undocumented, unstable: S = A AND X, then store S AND (high byte + 1).
    UndocShs,
    /// Undocumented, unstable: store X AND (high byte + 1).
    UndocShx,
    /// Undocumented, unstable: store Y AND (high byte + 1).
    UndocShy,
    /// Undocumented: shift memory left, then OR.
    UndocSlo,
    /// Undocumented: shift memory right, then EOR.
    UndocSre,
    /// Undocumented duplicate of immediate SBC.
    UndocUsbc,
}

impl Mnemonic {
    /// Returns the assembly string for this mnemonic.  Undocumented
    /// mnemonics begin with a `.`.
    pub fn string(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
            Mnemonic::UndocAnc => ".ANC",
            Mnemonic::UndocAne => ".ANE",
            Mnemonic::UndocArr => ".ARR",
            Mnemonic::UndocAsr => ".ASR",
            Mnemonic::UndocDcp => ".DCP",
            Mnemonic::UndocIsb => ".ISB",
            Mnemonic::UndocJam => ".JAM",
            Mnemonic::UndocLas => ".LAS",
            Mnemonic::UndocLax => ".LAX",
            Mnemonic::UndocLxa => ".LXA",
            Mnemonic::UndocNoop => ".NOOP",
            Mnemonic::UndocRla => ".RLA",
            Mnemonic::UndocRra => ".RRA",
            Mnemonic::UndocSax => ".SAX",
            Mnemonic::UndocSbx => ".SBX",
            Mnemonic::UndocSha => ".SHA",
            Mnemonic::UndocShs => ".SHS",
            Mnemonic::UndocShx => ".SHX",
            Mnemonic::UndocShy => ".SHY",
            Mnemonic::UndocSlo => ".SLO",
            Mnemonic::UndocSre => ".SRE",
            Mnemonic::UndocUsbc => ".USBC",
        }
    }

    /// Returns true if this is an undocumented (illegal) operation.
    pub fn is_undocumented(self) -> bool {
        matches!(
            self,
            Mnemonic::UndocAnc
                | Mnemonic::UndocAne
                | Mnemonic::UndocArr
                | Mnemonic::UndocAsr
                | Mnemonic::UndocDcp
                | Mnemonic::UndocIsb
                | Mnemonic::UndocJam
                | Mnemonic::UndocLas
                | Mnemonic::UndocLax
                | Mnemonic::UndocLxa
                | Mnemonic::UndocNoop
                | Mnemonic::UndocRla
                | Mnemonic::UndocRra
                | Mnemonic::UndocSax
                | Mnemonic::UndocSbx
                | Mnemonic::UndocSha
                | Mnemonic::UndocShs
                | Mnemonic::UndocShx
                | Mnemonic::UndocShy
                | Mnemonic::UndocSlo
                | Mnemonic::UndocSre
                | Mnemonic::UndocUsbc
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.string())
    }
}

//===========================================================================//

/// An addressing mode for an instruction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AddrMode {
    /// No additional arguments to the opcode.
    Implied,
    /// Operate on the A register.
    Accumulator,
    /// Operate on a constant byte immediately following the opcode.
    Immediate,
    /// Operate on the 8-bit zero page address following the opcode.
    ZeroPage,
    /// Zero page address, offset by index X.
    XIndexedZeroPage,
    /// Zero page address, offset by index Y.
    YIndexedZeroPage,
    /// Operate on the absolute 16-bit address following the opcode.
    Absolute,
    /// Absolute address, offset by index X.
    XIndexedAbsolute,
    /// Absolute address, offset by index Y.
    YIndexedAbsolute,
    /// Operate on the 16-bit address that is stored in memory, at the 8-bit
    /// zero page address following the opcode offset by index X.
    XIndexedZeroPageIndirect,
    /// Operate on a address equal to the 16-bit address stored at the 8-bit
    /// zero page address following the opcode, offset by index Y.
    ZeroPageIndirectYIndexed,
    /// Treat the 16-bit address following the opcode as a pointer to the
    /// address to operate on.
    AbsoluteIndirect,
    /// Operate on an address that is offset (by the signed byte following the
    /// opcode) from the address of the next instruction.
    Relative,
}

impl AddrMode {
    /// Returns the number of operand bytes that follow the opcode.
    pub fn operand_size(self) -> usize {
        match self {
            AddrMode::Implied | AddrMode::Accumulator => 0,
            AddrMode::Immediate
            | AddrMode::ZeroPage
            | AddrMode::XIndexedZeroPage
            | AddrMode::YIndexedZeroPage
            | AddrMode::XIndexedZeroPageIndirect
            | AddrMode::ZeroPageIndirectYIndexed
            | AddrMode::Relative => 1,
            AddrMode::Absolute
            | AddrMode::XIndexedAbsolute
            | AddrMode::YIndexedAbsolute
            | AddrMode::AbsoluteIndirect => 2,
        }
    }
}

//===========================================================================//

/// What an operation reads from or writes to.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperandClass {
    None,
    Accumulator,
    XRegister,
    YRegister,
    StackPointer,
    StatusRegister,
    ProgramCounter,
    Immediate,
    ZeroPage,
    XIndexedZeroPage,
    YIndexedZeroPage,
    Absolute,
    XIndexedAbsolute,
    YIndexedAbsolute,
    AbsoluteIndirect,
    XIndexedIndirect,
    IndirectYIndexed,
    Relative,
    CarryFlag,
    DecimalFlag,
    InterruptFlag,
    OverflowFlag,
    /// The destination of `JMP`/`JSR`.
    JumpTarget,
    /// Accumulator combined with an immediate.
    AccumulatorAndImmediate,
    /// Accumulator AND index X.
    AccumulatorAndX,
    /// Accumulator, index X and an immediate.
    AccumulatorXAndImmediate,
    /// Accumulator, with carry taken from the result.
    AccumulatorWithCarry,
    /// Accumulator and index X both loaded.
    AccumulatorAndXLoaded,
    /// Accumulator, index X and the stack pointer.
    AccumulatorXAndStack,
    /// Stack pointer AND a Y-indexed absolute address.
    StackAndYIndexedAbsolute,
    /// The unstable "AND high byte + 1" stores.
    StoreHigh0,
    StoreHigh1,
    StoreHigh2,
    StoreHigh3,
}

//===========================================================================//


//===========================================================================//
