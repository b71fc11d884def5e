//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads update Z and N; stores touch no flags. Neither family has any other
//! side effect on memory.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Reads the operand byte and updates Z/N from it.
fn load<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    let value = cpu.memory.read(operand.address());
    cpu.update_zero_and_negative(value);
    value
}

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a = load(cpu, operand);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.x = load(cpu, operand);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.y = load(cpu, operand);
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Store instructions never pay the indexed page-crossing penalty; the opcode
/// table encodes that.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.memory.write(operand.address(), cpu.a);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.memory.write(operand.address(), cpu.x);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.memory.write(operand.address(), cpu.y);
}
