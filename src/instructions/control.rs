//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt
//! - BRK: Force Interrupt
//!
//! By the time a handler runs, PC already points past the instruction's operand.

use crate::addressing::Operand;
use crate::cpu::IRQ_VECTOR;
use crate::status::{BREAK, INTERRUPT_DISABLE, UNUSED};
use crate::{MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// The indirect form's page-wrap bug is handled by the addressing resolver.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.pc = operand.address();
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last operand byte (return address - 1), high
/// byte first, then jumps.
///
/// The target's high byte is fetched after both pushes, as on NMOS silicon,
/// so a push that lands on the operand changes where JSR goes.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);

    let lo = operand.address() & 0x00FF;
    let hi = cpu.read(return_address) as u16;
    cpu.pc = (hi << 8) | lo;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address (low byte first) and resumes at address + 1.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (unused bit forced on), then PC. Unlike RTS, the
/// pulled PC is used as-is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull();
    cpu.p = status | UNUSED;
    cpu.pc = cpu.pull_word();
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK forces a software interrupt by:
/// 1. Pushing the address of BRK + 2 (the byte after BRK is a padding byte)
/// 2. Pushing the processor status with B and the unused bit set
/// 3. Setting the I (interrupt disable) flag
/// 4. Loading the PC from the IRQ vector at $FFFE/$FFFF
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    let return_address = cpu.pc.wrapping_add(1);
    cpu.push_word(return_address);

    // B only exists in the pushed copy
    let status = cpu.p | BREAK | UNUSED;
    cpu.push(status);

    cpu.set_flags(INTERRUPT_DISABLE);
    cpu.pc = cpu.read_word(IRQ_VECTOR);
}
