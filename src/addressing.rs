//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolvers that turn the operand bytes following an opcode into an
//! effective address.
//!
//! Every resolver consumes its operand bytes starting at PC, advances PC past
//! them, and reports whether indexing moved the address onto a different page.
//! Whether that page crossing costs a cycle is decided by the opcode table entry,
//! not by the resolver.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// The effective address is the address of the operand byte itself.
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X register (wraps within zero page).
    ZeroPageX,

    /// Zero page address indexed by Y register (wraps within zero page).
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the PC after the operand.
    Relative,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// A pointer at $xxFF fetches its high byte from $xx00, not the next page.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// What an instruction operates on once its addressing mode has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (register-only and stack instructions).
    Implied,

    /// The accumulator itself (shift/rotate `A` forms).
    Accumulator,

    /// A byte in memory. For immediate mode this is the operand byte's address.
    Address(u16),
}

impl Operand {
    /// Returns the effective address, or 0 for operands that have none.
    pub fn address(self) -> u16 {
        match self {
            Operand::Address(addr) => addr,
            Operand::Implied | Operand::Accumulator => 0,
        }
    }
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Resolved {
    pub(crate) operand: Operand,

    /// Indexing (or a branch target) landed on a different page than the base.
    pub(crate) page_crossed: bool,
}

impl Resolved {
    fn at(addr: u16) -> Self {
        Self {
            operand: Operand::Address(addr),
            page_crossed: false,
        }
    }

    fn indexed(base: u16, addr: u16) -> Self {
        Self {
            operand: Operand::Address(addr),
            page_crossed: (base & 0xFF00) != (addr & 0xFF00),
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch() as u16;
        let hi = self.fetch() as u16;
        (hi << 8) | lo
    }

    /// Reads a pointer word from zero page; the high byte wraps within zero page.
    fn read_zero_page_word(&self, zp: u8) -> u16 {
        let lo = self.memory.read(zp as u16) as u16;
        let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Computes the effective operand for `mode`, consuming operand bytes at PC.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Resolved {
        match mode {
            AddressingMode::Implicit => Resolved {
                operand: Operand::Implied,
                page_crossed: false,
            },
            AddressingMode::Accumulator => Resolved {
                operand: Operand::Accumulator,
                page_crossed: false,
            },
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Resolved::at(addr)
            }
            AddressingMode::ZeroPage => {
                let zp = self.fetch();
                Resolved::at(zp as u16)
            }
            AddressingMode::ZeroPageX => {
                let zp = self.fetch().wrapping_add(self.x);
                Resolved::at(zp as u16)
            }
            AddressingMode::ZeroPageY => {
                let zp = self.fetch().wrapping_add(self.y);
                Resolved::at(zp as u16)
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_word();
                Resolved::at(addr)
            }
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                Resolved::indexed(base, base.wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                Resolved::indexed(base, base.wrapping_add(self.y as u16))
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                let lo = self.memory.read(ptr) as u16;
                // NMOS bug: the high byte never carries into the next page
                let hi_addr = if ptr & 0x00FF == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let hi = self.memory.read(hi_addr) as u16;
                Resolved::at((hi << 8) | lo)
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch().wrapping_add(self.x);
                Resolved::at(self.read_zero_page_word(zp))
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch();
                let base = self.read_zero_page_word(zp);
                Resolved::indexed(base, base.wrapping_add(self.y as u16))
            }
            AddressingMode::Relative => {
                let offset = self.fetch() as i8;
                let target = self.pc.wrapping_add_signed(offset as i16);
                Resolved::indexed(self.pc, target)
            }
        }
    }
}
