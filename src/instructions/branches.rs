//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! The relative resolver has already moved PC past the operand and computed the
//! target. Cycle timing:
//! - 2 cycles if branch not taken (base, charged by the engine)
//! - +1 cycle if branch taken to same page
//! - +2 cycles if branch taken to a different page

use crate::addressing::Resolved;
use crate::opcodes::Instruction;
use crate::status::{CARRY, NEGATIVE, OVERFLOW, ZERO};
use crate::{MemoryBus, CPU};

/// Evaluates the branch condition of a branch instruction.
fn condition<M: MemoryBus>(cpu: &CPU<M>, instruction: Instruction) -> bool {
    match instruction {
        Instruction::Bcc => !cpu.is_flag_set(CARRY),
        Instruction::Bcs => cpu.is_flag_set(CARRY),
        Instruction::Bne => !cpu.is_flag_set(ZERO),
        Instruction::Beq => cpu.is_flag_set(ZERO),
        Instruction::Bpl => !cpu.is_flag_set(NEGATIVE),
        Instruction::Bmi => cpu.is_flag_set(NEGATIVE),
        Instruction::Bvc => !cpu.is_flag_set(OVERFLOW),
        Instruction::Bvs => cpu.is_flag_set(OVERFLOW),
        _ => false,
    }
}

/// Executes a conditional branch. No flags are affected.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: Instruction,
    resolved: Resolved,
) {
    if !condition(cpu, instruction) {
        return;
    }

    cpu.cycles += 1;
    if resolved.page_crossed {
        cpu.cycles += 1;
    }
    cpu.pc = resolved.operand.address();
}
