//! # Status Register Bits
//!
//! Bit masks for the packed processor status register (P), laid out NV-BDIZC.
//! Masks can be OR-ed together and passed to the CPU flag helpers
//! (`set_flags`, `clear_flags`, `is_flag_set`).
//!
//! ```
//! use cpu6502::status::{CARRY, ZERO};
//!
//! assert_eq!(CARRY | ZERO, 0b0000_0011);
//! ```

/// Carry flag (bit 0): unsigned carry out of bit 7, or "no borrow" after subtraction.
pub const CARRY: u8 = 0b0000_0001;

/// Zero flag (bit 1): result was zero.
pub const ZERO: u8 = 0b0000_0010;

/// Interrupt disable flag (bit 2).
pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;

/// Decimal mode flag (bit 3).
pub const DECIMAL: u8 = 0b0000_1000;

/// Break flag (bit 4). Only meaningful in status bytes pushed by BRK/PHP.
pub const BREAK: u8 = 0b0001_0000;

/// Unused bit (bit 5). Set on reset and whenever status is pulled from the stack.
pub const UNUSED: u8 = 0b0010_0000;

/// Overflow flag (bit 6): signed overflow.
pub const OVERFLOW: u8 = 0b0100_0000;

/// Negative flag (bit 7): bit 7 of the result.
pub const NEGATIVE: u8 = 0b1000_0000;
