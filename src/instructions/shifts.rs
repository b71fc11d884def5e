//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works either on the accumulator or as a read-modify-write on memory.
//! C receives the bit shifted out; Z and N come from the result.

use crate::addressing::Operand;
use crate::status::CARRY;
use crate::{MemoryBus, CPU};

/// Applies `op` to the accumulator or the memory byte at the operand address.
///
/// `op` maps (value, carry_in) to (result, carry_out).
fn modify<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, op: impl Fn(u8, bool) -> (u8, bool)) {
    let carry_in = cpu.is_flag_set(CARRY);

    let result = match operand {
        Operand::Accumulator => {
            let (result, carry_out) = op(cpu.a, carry_in);
            cpu.a = result;
            cpu.set_flag(CARRY, carry_out);
            result
        }
        _ => {
            let addr = operand.address();
            let (result, carry_out) = op(cpu.memory.read(addr), carry_in);
            cpu.memory.write(addr, result);
            cpu.set_flag(CARRY, carry_out);
            result
        }
    };

    cpu.update_zero_and_negative(result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |value, _| (value << 1, value & 0x80 != 0));
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |value, _| (value >> 1, value & 0x01 != 0));
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; bit 7 leaves into the carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    });
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; bit 0 leaves into the carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    });
}
