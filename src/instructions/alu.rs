//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry (borrow = !C)
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Register/memory comparison
//! - BIT: Bit test
//!
//! ADC and SBC are binary unless the CPU was configured with
//! `DecimalMode::Nmos` and the D flag is set.

use crate::addressing::Operand;
use crate::cpu::DecimalMode;
use crate::status::{CARRY, DECIMAL, NEGATIVE, OVERFLOW, ZERO};
use crate::{MemoryBus, CPU};

fn decimal_active<M: MemoryBus>(cpu: &CPU<M>) -> bool {
    cpu.config.decimal_mode == DecimalMode::Nmos && cpu.is_flag_set(DECIMAL)
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the unsigned sum exceeds 0xFF
/// - Zero (Z): Set if the low byte of the sum is 0
/// - Overflow (V): Set if A and the operand share a sign and the result's sign differs
/// - Negative (N): Bit 7 of the result
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.memory.read(operand.address());

    if decimal_active(cpu) {
        adc_decimal(cpu, value);
    } else {
        adc_binary(cpu, value);
    }
}

fn adc_binary<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.is_flag_set(CARRY) as u16;

    // Widened so the carry out of bit 7 survives
    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.set_flag(CARRY, sum > 0xFF);
    cpu.set_flag(ZERO, result == 0);
    // Like signs in, different sign out
    cpu.set_flag(OVERFLOW, (a ^ value) & 0x80 == 0 && (a ^ result) & 0x80 != 0);
    cpu.set_flag(NEGATIVE, result & 0x80 != 0);

    cpu.a = result;
}

/// NMOS BCD addition: Z comes from the binary sum, N and V from the high
/// nibble before the final decimal adjust.
fn adc_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.is_flag_set(CARRY) as u8;

    let mut lo = (a & 0x0F) + (value & 0x0F) + carry_in;
    if lo > 0x09 {
        lo += 0x06;
    }
    let mut hi = (a >> 4) + (value >> 4) + (lo > 0x0F) as u8;

    let binary = a.wrapping_add(value).wrapping_add(carry_in);
    cpu.set_flag(ZERO, binary == 0);
    cpu.set_flag(NEGATIVE, hi & 0x08 != 0);
    cpu.set_flag(
        OVERFLOW,
        (a ^ value) & 0x80 == 0 && (a ^ (hi << 4)) & 0x80 != 0,
    );

    if hi > 0x09 {
        hi += 0x06;
    }
    cpu.set_flag(CARRY, hi > 0x0F);

    cpu.a = (hi << 4) | (lo & 0x0F);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - M - (1 - C)`.
///
/// # Flag Behavior
///
/// - Carry (C): Set if no borrow occurred (result >= 0)
/// - Zero (Z): Set if the low byte of the difference is 0
/// - Overflow (V): Set if A and the operand differ in sign and the result's sign differs from A
/// - Negative (N): Bit 7 of the result
///
/// In NMOS decimal mode the flags are still those of the binary subtraction;
/// only the accumulator receives the BCD-adjusted value.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.memory.read(operand.address());
    let a = cpu.a;
    let borrow = 1 - cpu.is_flag_set(CARRY) as i16;

    let diff = a as i16 - value as i16 - borrow;
    let result = diff as u8;

    cpu.set_flag(CARRY, diff >= 0);
    cpu.set_flag(ZERO, result == 0);
    cpu.set_flag(OVERFLOW, (a ^ value) & 0x80 != 0 && (a ^ result) & 0x80 != 0);
    cpu.set_flag(NEGATIVE, result & 0x80 != 0);

    if decimal_active(cpu) {
        let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
        let mut hi = (a >> 4) as i16 - (value >> 4) as i16;
        if lo < 0 {
            lo -= 0x06;
            hi -= 1;
        }
        if hi < 0 {
            hi -= 0x06;
        }
        cpu.a = ((hi << 4) as u8) | ((lo & 0x0F) as u8);
    } else {
        cpu.a = result;
    }
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a &= cpu.memory.read(operand.address());
    cpu.update_zero_and_negative(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a |= cpu.memory.read(operand.address());
    cpu.update_zero_and_negative(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a ^= cpu.memory.read(operand.address());
    cpu.update_zero_and_negative(cpu.a);
}

/// Executes the BIT (Bit Test) instruction.
///
/// - Zero (Z): Set if `A & M` is 0
/// - Overflow (V): Bit 6 of M
/// - Negative (N): Bit 7 of M
///
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.memory.read(operand.address());

    cpu.set_flag(ZERO, cpu.a & value == 0);
    cpu.set_flag(OVERFLOW, value & 0x40 != 0);
    cpu.set_flag(NEGATIVE, value & 0x80 != 0);
}

/// Shared body of CMP/CPX/CPY: `register - M` without storing the result.
///
/// - Carry (C): Set if register >= M
/// - Zero/Negative: From the 8-bit difference
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, register: u8) {
    let value = cpu.memory.read(operand.address());
    let result = register.wrapping_sub(value);

    cpu.set_flag(CARRY, register >= value);
    cpu.update_zero_and_negative(result);
}

pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.a;
    compare(cpu, operand, register);
}

pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.x;
    compare(cpu, operand, register);
}

pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.y;
    compare(cpu, operand, register);
}
