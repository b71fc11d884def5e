//! # 6502 CPU Core
//!
//! An instruction-level NMOS 6502 emulator core: register file, status flag
//! semantics, the 13 documented addressing modes, the 151 documented opcodes, and
//! per-instruction cycle accounting (including page-crossing penalties and the
//! `JMP ($xxFF)` page-wrap bug).
//!
//! The core talks to the outside world only through the [`MemoryBus`] trait, so
//! it can sit on top of flat RAM, a bank-switched cartridge, or a test fixture.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$42
//! memory.load(0x8000, &[0xA9, 0x42]);
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//!
//! cpu.tick();
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.pc(), 0x8002);
//! assert_eq!(cpu.cycles(), 2);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state, flag helpers and the fetch-decode-execute step
//! - `addressing` - Addressing modes and effective-address resolution
//! - `opcodes` - The 256-slot opcode dispatch table
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `status` - Status register bit masks
//! - `conformance` - Loader and runner for single-step JSON conformance tests

pub mod addressing;
pub mod conformance;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use cpu::{Config, DecimalMode, CPU};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Instruction, OpcodeMetadata, OPCODE_TABLE};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The opcode slot has no table entry.
    ///
    /// Contains the opcode byte value for debugging purposes.
    UnimplementedOpcode(u8),
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnimplementedOpcode(opcode) => {
                write!(f, "Opcode 0x{:02X} is not implemented", opcode)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
