//! Tests for CPU construction, reset, and the flag helper API.

use cpu6502::status::{CARRY, INTERRUPT_DISABLE, NEGATIVE, UNUSED, ZERO};
use cpu6502::{Config, DecimalMode, FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_power_on_state() {
    let cpu = setup_cpu();

    assert_eq!(cpu.a(), 0);
    assert_eq!(cpu.x(), 0);
    assert_eq!(cpu.y(), 0);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.status(), UNUSED);
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.config().decimal_mode, DecimalMode::Ignored);
}

#[test]
fn test_reset_vector_is_little_endian() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x34);
    memory.write(0xFFFD, 0x12);

    let cpu = CPU::new(memory);
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_reset_rereads_vector() {
    let mut cpu = setup_cpu();
    cpu.write(0xFFFC, 0x00);
    cpu.write(0xFFFD, 0xC0);

    cpu.reset();

    assert_eq!(cpu.pc(), 0xC000);
}

#[test]
fn test_reset_after_execution() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0xFF, 0xAA, 0x38]); // LDA #$FF; TAX; SEC

    cpu.tick();
    cpu.tick();
    cpu.tick();
    assert_ne!(cpu.cycles(), 0);

    cpu.reset();

    assert_eq!(cpu.a(), 0);
    assert_eq!(cpu.x(), 0);
    assert_eq!(cpu.status(), UNUSED);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.pc(), 0x8000);
    // Memory survives reset
    assert_eq!(cpu.read(0x8001), 0xFF);
}

#[test]
fn test_with_config_resets() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFD, 0x40);
    let cpu = CPU::with_config(
        memory,
        Config {
            decimal_mode: DecimalMode::Nmos,
        },
    );

    assert_eq!(cpu.pc(), 0x4000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.config().decimal_mode, DecimalMode::Nmos);
}

#[test]
fn test_flag_helpers() {
    let mut cpu = setup_cpu();

    cpu.set_flags(CARRY | NEGATIVE);
    assert!(cpu.is_flag_set(CARRY));
    assert!(cpu.is_flag_set(CARRY | NEGATIVE));
    assert!(!cpu.is_flag_set(CARRY | ZERO));

    cpu.clear_flags(CARRY);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());

    cpu.set_flag(INTERRUPT_DISABLE, true);
    assert!(cpu.flag_i());
    cpu.set_flag(INTERRUPT_DISABLE, false);
    assert!(!cpu.flag_i());
}

#[test]
fn test_into_memory_returns_bus() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x42, 0x85, 0x10]); // LDA #$42; STA $10

    cpu.tick();
    cpu.tick();

    let memory = cpu.into_memory();
    assert_eq!(memory.read(0x0010), 0x42);
}
