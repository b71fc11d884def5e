//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page; it wraps within the page in both directions.

use crate::status::{BREAK, UNUSED};
use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction. No flags affected.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push(cpu.a);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has B and the unused bit set.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push(cpu.p | BREAK | UNUSED);
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.pull();
    cpu.update_zero_and_negative(cpu.a);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// The unused bit is forced on.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.p = cpu.pull() | UNUSED;
}
