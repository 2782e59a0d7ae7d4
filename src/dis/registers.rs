//! Symbolic names for the console's hardware registers.

//===========================================================================//

/// The first address of the low (video/audio/input) register window.
pub const LOW_REGISTERS_FIRST: u32 = 0x00;
/// The last address of the low register window.
pub const LOW_REGISTERS_LAST: u32 = 0x3d;
/// The first address of the extended I/O and timer register window.
pub const EXT_REGISTERS_FIRST: u32 = 0x280;
/// The last address of the extended register window.
pub const EXT_REGISTERS_LAST: u32 = 0x297;

// Unassigned slots hold their own address as a hex literal.
const LOW_REGISTER_NAMES: [&str; 62] = [
    "VSYNC", "VBLANK", "WSYNC", "RSYNC", "NUSIZ0", "NUSIZ1", "COLUP0",
    "COLUP1", "COLUPF", "COLUBK", "CTRLPF", "REFP0", "REFP1", "PF0", "PF1",
    "PF2", "RESP0", "RESP1", "RESM0", "RESM1", "RESBL", "AUDC0", "AUDC1",
    "AUDF0", "AUDF1", "AUDV0", "AUDV1", "GRP0", "GRP1", "ENAM0", "ENAM1",
    "ENABL", "HMP0", "HMP1", "HMM0", "HMM1", "HMBL", "VDELP0", "VDELP1",
    "VDELBL", "RESMP0", "RESMP1", "HMOVE", "HMCLR", "CXCLR", "$2D", "$2E",
    "$2F", "CXM0P", "CXM1P", "CXP0FB", "CXP1FB", "CXM0FB", "CXM1FB",
    "CXBLPF", "CXPPMM", "INPT0", "INPT1", "INPT2", "INPT3", "INPT4", "INPT5",
];

const EXT_REGISTER_NAMES: [&str; 24] = [
    "SWCHA", "SWACNT", "SWCHB", "SWBCNT", "INTIM", "$0285", "$0286", "$0287",
    "$0288", "$0289", "$028A", "$028B", "$028C", "$028D", "$028E", "$028F",
    "$0290", "$0291", "$0292", "$0293", "TIM1T", "TIM8T", "TIM64T", "T1024T",
];

/// Returns the name of the low register at `addr`, if `addr` lies in the low
/// register window.
pub fn low_register_name(addr: u32) -> Option<&'static str> {
    if addr > LOW_REGISTERS_LAST {
        return None;
    }
    LOW_REGISTER_NAMES.get((addr - LOW_REGISTERS_FIRST) as usize).copied()
}

/// Returns the name of the extended register at `addr`, if `addr` lies in
/// the extended register window.
pub fn ext_register_name(addr: u32) -> Option<&'static str> {
    if !(EXT_REGISTERS_FIRST..=EXT_REGISTERS_LAST).contains(&addr) {
        return None;
    }
    EXT_REGISTER_NAMES.get((addr - EXT_REGISTERS_FIRST) as usize).copied()
}

//===========================================================================//


//===========================================================================//
