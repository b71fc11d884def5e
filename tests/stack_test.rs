//! Tests for PHA, PHP, PLA and PLP.

use cpu6502::status::{BREAK, CARRY, DECIMAL, NEGATIVE, UNUSED, ZERO};
use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_pha() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x48);
    cpu.set_a(0x42);
    let status = cpu.status();

    cpu.tick();

    assert_eq!(cpu.read(0x01FD), 0x42);
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.status(), status);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_pha_wraps_stack_pointer() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x48);
    cpu.set_a(0x99);
    cpu.set_sp(0x00);

    cpu.tick();

    assert_eq!(cpu.read(0x0100), 0x99);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_php_sets_break_and_unused() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x08);
    cpu.set_status(CARRY | DECIMAL);

    cpu.tick();

    assert_eq!(cpu.read(0x01FD), CARRY | DECIMAL | BREAK | UNUSED);
    assert_eq!(cpu.status(), CARRY | DECIMAL);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_pla_updates_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x68);
    cpu.memory_mut().write(0x01FE, 0x80);

    cpu.tick();

    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.sp(), 0xFE);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_pla_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x68);
    cpu.set_a(0x55);

    cpu.tick();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_plp_forces_unused_bit() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x28);
    cpu.memory_mut().write(0x01FE, CARRY | ZERO | NEGATIVE);

    cpu.tick();

    assert_eq!(cpu.status(), CARRY | ZERO | NEGATIVE | UNUSED);
    assert_eq!(cpu.sp(), 0xFE);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x48, 0xA9, 0x00, 0x68]); // PHA; LDA #0; PLA
    cpu.set_a(0x37);

    cpu.tick();
    cpu.tick();
    cpu.tick();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.cycles(), 3 + 2 + 4);
}
