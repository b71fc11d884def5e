//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC/SEC: Carry
//! - CLI/SEI: Interrupt Disable
//! - CLD/SED: Decimal Mode
//! - CLV: Overflow (there is no SEV)
//!
//! These instructions use implied addressing mode and execute in 2 cycles.

use crate::{MemoryBus, CPU};

/// Executes CLC, CLI, CLD or CLV depending on `mask`.
pub(crate) fn execute_clear<M: MemoryBus>(cpu: &mut CPU<M>, mask: u8) {
    cpu.clear_flags(mask);
}

/// Executes SEC, SEI or SED depending on `mask`.
pub(crate) fn execute_set<M: MemoryBus>(cpu: &mut CPU<M>, mask: u8) {
    cpu.set_flags(mask);
}
