//! Tests for the register transfers and the flag set/clear instructions.

use cpu6502::status::{
    CARRY, DECIMAL, INTERRUPT_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn run_implied(opcode: u8, setup: impl FnOnce(&mut CPU<FlatMemory>)) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, opcode);
    setup(&mut cpu);
    cpu.tick();
    assert_eq!(cpu.cycles(), 2);
    assert_eq!(cpu.pc(), 0x8001);
    cpu
}

// ========== Transfers ==========

#[test]
fn test_tax() {
    let cpu = run_implied(0xAA, |cpu| cpu.set_a(0x80));
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_tay_zero() {
    let cpu = run_implied(0xA8, |cpu| cpu.set_y(0x12));
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_txa() {
    let cpu = run_implied(0x8A, |cpu| cpu.set_x(0x01));
    assert_eq!(cpu.a(), 0x01);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_tya() {
    let cpu = run_implied(0x98, |cpu| cpu.set_y(0xFF));
    assert_eq!(cpu.a(), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_tsx_updates_flags() {
    let cpu = run_implied(0xBA, |_| {});
    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flag_n());
}

#[test]
fn test_txs_leaves_flags() {
    let cpu = run_implied(0x9A, |cpu| cpu.set_x(0x00));
    assert_eq!(cpu.sp(), 0x00);
    assert!(!cpu.flag_z());
    assert_eq!(cpu.status(), UNUSED);
}

// ========== Flag instructions ==========

#[test]
fn test_sec_clc() {
    let cpu = run_implied(0x38, |_| {});
    assert!(cpu.flag_c());

    let cpu = run_implied(0x18, |cpu| cpu.set_flags(CARRY));
    assert!(!cpu.flag_c());
}

#[test]
fn test_sei_cli() {
    let cpu = run_implied(0x78, |_| {});
    assert!(cpu.flag_i());

    let cpu = run_implied(0x58, |cpu| cpu.set_flags(INTERRUPT_DISABLE));
    assert!(!cpu.flag_i());
}

#[test]
fn test_sed_cld() {
    let cpu = run_implied(0xF8, |_| {});
    assert!(cpu.flag_d());

    let cpu = run_implied(0xD8, |cpu| cpu.set_flags(DECIMAL));
    assert!(!cpu.flag_d());
}

#[test]
fn test_clv() {
    let cpu = run_implied(0xB8, |cpu| cpu.set_flags(OVERFLOW | NEGATIVE));
    assert!(!cpu.flag_v());
    assert!(cpu.flag_n());
}

#[test]
fn test_flag_instructions_touch_only_their_bit() {
    let cpu = run_implied(0x38, |cpu| cpu.set_status(ZERO | NEGATIVE));
    assert_eq!(cpu.status(), ZERO | NEGATIVE | CARRY);
}
