//! Types for representing bus addresses and the analysed bank window.

mod range;
mod window;

pub use range::AddrRange;
pub use window::BankWindow;

//===========================================================================//
