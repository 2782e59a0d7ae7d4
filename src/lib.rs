//! Control-flow driven disassembler for 6502 code on a 13-bit cartridge bus.

#![warn(missing_docs)]

pub mod addr;
pub mod bus;
pub mod dis;
pub mod parse;
