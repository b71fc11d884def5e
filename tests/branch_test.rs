//! Tests for the conditional branch instructions.
//!
//! Tests cover:
//! - Each condition taken and not taken
//! - Forward and backward offsets
//! - Cycle timing: 2 not taken, 3 taken, 4 taken across a page

use cpu6502::status::{CARRY, NEGATIVE, OVERFLOW, ZERO};
use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Places a branch at `pc`, runs it with status `p`, and returns (pc, cycles).
fn branch(opcode: u8, offset: u8, pc: u16, p: u8) -> (u16, u64) {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(pc, &[opcode, offset]);
    cpu.set_pc(pc);
    cpu.set_status(p);

    cpu.tick();

    (cpu.pc(), cpu.cycles())
}

#[test]
fn test_branch_not_taken() {
    assert_eq!(branch(0xF0, 0x10, 0x8000, 0), (0x8002, 2)); // BEQ
    assert_eq!(branch(0xD0, 0x10, 0x8000, ZERO), (0x8002, 2)); // BNE
    assert_eq!(branch(0xB0, 0x10, 0x8000, 0), (0x8002, 2)); // BCS
    assert_eq!(branch(0x90, 0x10, 0x8000, CARRY), (0x8002, 2)); // BCC
    assert_eq!(branch(0x30, 0x10, 0x8000, 0), (0x8002, 2)); // BMI
    assert_eq!(branch(0x10, 0x10, 0x8000, NEGATIVE), (0x8002, 2)); // BPL
    assert_eq!(branch(0x70, 0x10, 0x8000, 0), (0x8002, 2)); // BVS
    assert_eq!(branch(0x50, 0x10, 0x8000, OVERFLOW), (0x8002, 2)); // BVC
}

#[test]
fn test_branch_taken_same_page() {
    assert_eq!(branch(0xF0, 0x10, 0x8000, ZERO), (0x8012, 3));
    assert_eq!(branch(0xD0, 0x10, 0x8000, 0), (0x8012, 3));
    assert_eq!(branch(0xB0, 0x10, 0x8000, CARRY), (0x8012, 3));
    assert_eq!(branch(0x90, 0x10, 0x8000, 0), (0x8012, 3));
    assert_eq!(branch(0x30, 0x10, 0x8000, NEGATIVE), (0x8012, 3));
    assert_eq!(branch(0x10, 0x10, 0x8000, 0), (0x8012, 3));
    assert_eq!(branch(0x70, 0x10, 0x8000, OVERFLOW), (0x8012, 3));
    assert_eq!(branch(0x50, 0x10, 0x8000, 0), (0x8012, 3));
}

#[test]
fn test_branch_backward() {
    // BNE -4 from $8010: next PC $8012, target $800E
    assert_eq!(branch(0xD0, 0xFC, 0x8010, 0), (0x800E, 3));
}

#[test]
fn test_branch_zero_offset() {
    assert_eq!(branch(0xD0, 0x00, 0x8000, 0), (0x8002, 3));
}

#[test]
fn test_branch_forward_page_cross() {
    // Next PC $80F2 + $10 = $8102
    assert_eq!(branch(0xD0, 0x10, 0x80F0, 0), (0x8102, 4));
}

#[test]
fn test_branch_backward_page_cross() {
    // Next PC $8002 - $10 = $7FF2
    assert_eq!(branch(0xD0, 0xF0, 0x8000, 0), (0x7FF2, 4));
}

#[test]
fn test_branch_page_measured_from_next_instruction() {
    // Opcode at $80FE, next PC $8100: a +1 target stays on page $81
    assert_eq!(branch(0xD0, 0x01, 0x80FE, 0), (0x8101, 3));
}

#[test]
fn test_branch_leaves_flags_alone() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xF0, 0x05]);
    cpu.set_status(ZERO | CARRY);

    cpu.tick();

    assert_eq!(cpu.status(), ZERO | CARRY);
}
