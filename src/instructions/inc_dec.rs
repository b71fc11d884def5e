//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC/DEC: read-modify-write on memory
//! - INX/INY/DEX/DEY: register forms
//!
//! All wrap at 8 bits and update only Z and N; the carry flag is never involved.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let addr = operand.address();
    let result = cpu.memory.read(addr).wrapping_add(1);
    cpu.update_zero_and_negative(result);
    cpu.memory.write(addr, result);
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// Subtracts one from the value held at a specified memory location,
/// setting the zero and negative flags as appropriate.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let addr = operand.address();
    let result = cpu.memory.read(addr).wrapping_sub(1);
    cpu.update_zero_and_negative(result);
    cpu.memory.write(addr, result);
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative(cpu.x);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative(cpu.y);
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative(cpu.x);
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative(cpu.y);
}
