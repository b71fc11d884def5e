//! Fuzz target for single-instruction execution.
//!
//! Builds an arbitrary register file and memory around PC, ticks exactly one
//! instruction and checks the invariants that hold for every opcode.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::opcodes::lookup;
use cpu6502::status::UNUSED;
use cpu6502::{Config, DecimalMode, FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed NV-BDIZC status
    p: u8,
    pc: u16,
    nmos_decimal: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Reset and IRQ vectors
    vectors: [u8; 4],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0xFFFC, &input.memory.vectors);
    memory.load(input.cpu_state.pc, &input.memory.instruction_bytes);

    let config = Config {
        decimal_mode: if input.cpu_state.nmos_decimal {
            DecimalMode::Nmos
        } else {
            DecimalMode::Ignored
        },
    };
    let mut cpu = CPU::with_config(memory, config);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.p);
    cpu.set_pc(input.cpu_state.pc);

    let opcode = cpu.read(input.cpu_state.pc);
    let before = cpu.status();

    // Must never panic, whatever the opcode
    cpu.tick();

    match lookup(opcode) {
        None => {
            assert_eq!(cpu.pc(), input.cpu_state.pc.wrapping_add(1));
            assert_eq!(cpu.cycles(), 0);
            assert_eq!(cpu.status(), before);
        }
        Some(metadata) => {
            // Base cost, plus at most a page-cross penalty or a taken branch
            let base = metadata.base_cycles as u64;
            assert!(cpu.cycles() >= base);
            assert!(cpu.cycles() <= base + 2);

            // Pulled status always carries the unused bit
            if matches!(opcode, 0x28 | 0x40) {
                assert_ne!(cpu.status() & UNUSED, 0);
            }
        }
    }
});
