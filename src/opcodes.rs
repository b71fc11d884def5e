//! # Opcode Dispatch Table
//!
//! This module contains the 256-slot opcode table that drives instruction
//! dispatch. Each populated slot pairs an [`Instruction`] with the
//! [`AddressingMode`] used to resolve its operand, plus the cycle metadata the
//! engine charges after execution.
//!
//! The table covers the **151 documented** NMOS 6502 opcodes. The remaining 105
//! slots are `None`; the engine reports them as unimplemented.
//!
//! An entry always carries both an instruction and an addressing mode, so a
//! half-populated slot cannot be expressed.

use crate::addressing::AddressingMode;

/// The 56 documented 6502 instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Instruction {
    /// Three-letter assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Adc => "ADC",
            Instruction::And => "AND",
            Instruction::Asl => "ASL",
            Instruction::Bcc => "BCC",
            Instruction::Bcs => "BCS",
            Instruction::Beq => "BEQ",
            Instruction::Bit => "BIT",
            Instruction::Bmi => "BMI",
            Instruction::Bne => "BNE",
            Instruction::Bpl => "BPL",
            Instruction::Brk => "BRK",
            Instruction::Bvc => "BVC",
            Instruction::Bvs => "BVS",
            Instruction::Clc => "CLC",
            Instruction::Cld => "CLD",
            Instruction::Cli => "CLI",
            Instruction::Clv => "CLV",
            Instruction::Cmp => "CMP",
            Instruction::Cpx => "CPX",
            Instruction::Cpy => "CPY",
            Instruction::Dec => "DEC",
            Instruction::Dex => "DEX",
            Instruction::Dey => "DEY",
            Instruction::Eor => "EOR",
            Instruction::Inc => "INC",
            Instruction::Inx => "INX",
            Instruction::Iny => "INY",
            Instruction::Jmp => "JMP",
            Instruction::Jsr => "JSR",
            Instruction::Lda => "LDA",
            Instruction::Ldx => "LDX",
            Instruction::Ldy => "LDY",
            Instruction::Lsr => "LSR",
            Instruction::Nop => "NOP",
            Instruction::Ora => "ORA",
            Instruction::Pha => "PHA",
            Instruction::Php => "PHP",
            Instruction::Pla => "PLA",
            Instruction::Plp => "PLP",
            Instruction::Rol => "ROL",
            Instruction::Ror => "ROR",
            Instruction::Rti => "RTI",
            Instruction::Rts => "RTS",
            Instruction::Sbc => "SBC",
            Instruction::Sec => "SEC",
            Instruction::Sed => "SED",
            Instruction::Sei => "SEI",
            Instruction::Sta => "STA",
            Instruction::Stx => "STX",
            Instruction::Sty => "STY",
            Instruction::Tax => "TAX",
            Instruction::Tay => "TAY",
            Instruction::Tsx => "TSX",
            Instruction::Txa => "TXA",
            Instruction::Txs => "TXS",
            Instruction::Tya => "TYA",
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Metadata for a single populated opcode slot.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Instruction, OPCODE_TABLE};
///
/// // Look up LDA absolute,X (opcode 0xBD)
/// let lda = OPCODE_TABLE[0xBD].unwrap();
/// assert_eq!(lda.instruction, Instruction::Lda);
/// assert_eq!(lda.addressing_mode, AddressingMode::AbsoluteX);
/// assert_eq!(lda.base_cycles, 4);
/// assert!(lda.page_cross_penalty);
///
/// // STA absolute,X never pays the penalty
/// assert!(!OPCODE_TABLE[0x9D].unwrap().page_cross_penalty);
///
/// // Illegal opcodes have no entry
/// assert!(OPCODE_TABLE[0xFF].is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction executed for this opcode.
    pub instruction: Instruction,

    /// Addressing mode used to resolve the operand.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    pub base_cycles: u8,

    /// Whether an indexed address that crosses a page costs one extra cycle.
    pub page_cross_penalty: bool,
}

impl OpcodeMetadata {
    /// Instruction mnemonic (e.g. "LDA").
    pub const fn mnemonic(&self) -> &'static str {
        self.instruction.mnemonic()
    }

    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode.operand_bytes()
    }
}

/// Looks up the table entry for `opcode`.
pub fn lookup(opcode: u8) -> Option<&'static OpcodeMetadata> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

const fn entry(
    instruction: Instruction,
    mode: AddressingMode,
    cycles: u8,
) -> Option<OpcodeMetadata> {
    Some(OpcodeMetadata {
        instruction,
        addressing_mode: mode,
        base_cycles: cycles,
        page_cross_penalty: false,
    })
}

/// Entry whose indexed forms take one extra cycle on a page crossing ("4+" timings).
const fn entry_px(
    instruction: Instruction,
    mode: AddressingMode,
    cycles: u8,
) -> Option<OpcodeMetadata> {
    Some(OpcodeMetadata {
        instruction,
        addressing_mode: mode,
        base_cycles: cycles,
        page_cross_penalty: true,
    })
}

/// The 256-slot opcode table indexed by opcode byte.
///
/// Built once at compile time and never mutated, so it can be shared freely
/// between CPU instances.
pub static OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    use AddressingMode::*;
    use Instruction::*;

    let mut t: [Option<OpcodeMetadata>; 256] = [None; 256];

    // Load
    t[0xA9] = entry(Lda, Immediate, 2);
    t[0xA5] = entry(Lda, ZeroPage, 3);
    t[0xB5] = entry(Lda, ZeroPageX, 4);
    t[0xAD] = entry(Lda, Absolute, 4);
    t[0xBD] = entry_px(Lda, AbsoluteX, 4);
    t[0xB9] = entry_px(Lda, AbsoluteY, 4);
    t[0xA1] = entry(Lda, IndirectX, 6);
    t[0xB1] = entry_px(Lda, IndirectY, 5);

    t[0xA2] = entry(Ldx, Immediate, 2);
    t[0xA6] = entry(Ldx, ZeroPage, 3);
    t[0xB6] = entry(Ldx, ZeroPageY, 4);
    t[0xAE] = entry(Ldx, Absolute, 4);
    t[0xBE] = entry_px(Ldx, AbsoluteY, 4);

    t[0xA0] = entry(Ldy, Immediate, 2);
    t[0xA4] = entry(Ldy, ZeroPage, 3);
    t[0xB4] = entry(Ldy, ZeroPageX, 4);
    t[0xAC] = entry(Ldy, Absolute, 4);
    t[0xBC] = entry_px(Ldy, AbsoluteX, 4);

    // Store
    t[0x85] = entry(Sta, ZeroPage, 3);
    t[0x95] = entry(Sta, ZeroPageX, 4);
    t[0x8D] = entry(Sta, Absolute, 4);
    t[0x9D] = entry(Sta, AbsoluteX, 5);
    t[0x99] = entry(Sta, AbsoluteY, 5);
    t[0x81] = entry(Sta, IndirectX, 6);
    t[0x91] = entry(Sta, IndirectY, 6);

    t[0x86] = entry(Stx, ZeroPage, 3);
    t[0x96] = entry(Stx, ZeroPageY, 4);
    t[0x8E] = entry(Stx, Absolute, 4);

    t[0x84] = entry(Sty, ZeroPage, 3);
    t[0x94] = entry(Sty, ZeroPageX, 4);
    t[0x8C] = entry(Sty, Absolute, 4);

    // Arithmetic
    t[0x69] = entry(Adc, Immediate, 2);
    t[0x65] = entry(Adc, ZeroPage, 3);
    t[0x75] = entry(Adc, ZeroPageX, 4);
    t[0x6D] = entry(Adc, Absolute, 4);
    t[0x7D] = entry_px(Adc, AbsoluteX, 4);
    t[0x79] = entry_px(Adc, AbsoluteY, 4);
    t[0x61] = entry(Adc, IndirectX, 6);
    t[0x71] = entry_px(Adc, IndirectY, 5);

    t[0xE9] = entry(Sbc, Immediate, 2);
    t[0xE5] = entry(Sbc, ZeroPage, 3);
    t[0xF5] = entry(Sbc, ZeroPageX, 4);
    t[0xED] = entry(Sbc, Absolute, 4);
    t[0xFD] = entry_px(Sbc, AbsoluteX, 4);
    t[0xF9] = entry_px(Sbc, AbsoluteY, 4);
    t[0xE1] = entry(Sbc, IndirectX, 6);
    t[0xF1] = entry_px(Sbc, IndirectY, 5);

    // Logical
    t[0x29] = entry(And, Immediate, 2);
    t[0x25] = entry(And, ZeroPage, 3);
    t[0x35] = entry(And, ZeroPageX, 4);
    t[0x2D] = entry(And, Absolute, 4);
    t[0x3D] = entry_px(And, AbsoluteX, 4);
    t[0x39] = entry_px(And, AbsoluteY, 4);
    t[0x21] = entry(And, IndirectX, 6);
    t[0x31] = entry_px(And, IndirectY, 5);

    t[0x09] = entry(Ora, Immediate, 2);
    t[0x05] = entry(Ora, ZeroPage, 3);
    t[0x15] = entry(Ora, ZeroPageX, 4);
    t[0x0D] = entry(Ora, Absolute, 4);
    t[0x1D] = entry_px(Ora, AbsoluteX, 4);
    t[0x19] = entry_px(Ora, AbsoluteY, 4);
    t[0x01] = entry(Ora, IndirectX, 6);
    t[0x11] = entry_px(Ora, IndirectY, 5);

    t[0x49] = entry(Eor, Immediate, 2);
    t[0x45] = entry(Eor, ZeroPage, 3);
    t[0x55] = entry(Eor, ZeroPageX, 4);
    t[0x4D] = entry(Eor, Absolute, 4);
    t[0x5D] = entry_px(Eor, AbsoluteX, 4);
    t[0x59] = entry_px(Eor, AbsoluteY, 4);
    t[0x41] = entry(Eor, IndirectX, 6);
    t[0x51] = entry_px(Eor, IndirectY, 5);

    t[0x24] = entry(Bit, ZeroPage, 3);
    t[0x2C] = entry(Bit, Absolute, 4);

    // Compare
    t[0xC9] = entry(Cmp, Immediate, 2);
    t[0xC5] = entry(Cmp, ZeroPage, 3);
    t[0xD5] = entry(Cmp, ZeroPageX, 4);
    t[0xCD] = entry(Cmp, Absolute, 4);
    t[0xDD] = entry_px(Cmp, AbsoluteX, 4);
    t[0xD9] = entry_px(Cmp, AbsoluteY, 4);
    t[0xC1] = entry(Cmp, IndirectX, 6);
    t[0xD1] = entry_px(Cmp, IndirectY, 5);

    t[0xE0] = entry(Cpx, Immediate, 2);
    t[0xE4] = entry(Cpx, ZeroPage, 3);
    t[0xEC] = entry(Cpx, Absolute, 4);

    t[0xC0] = entry(Cpy, Immediate, 2);
    t[0xC4] = entry(Cpy, ZeroPage, 3);
    t[0xCC] = entry(Cpy, Absolute, 4);

    // Increment / decrement
    t[0xE6] = entry(Inc, ZeroPage, 5);
    t[0xF6] = entry(Inc, ZeroPageX, 6);
    t[0xEE] = entry(Inc, Absolute, 6);
    t[0xFE] = entry(Inc, AbsoluteX, 7);

    t[0xC6] = entry(Dec, ZeroPage, 5);
    t[0xD6] = entry(Dec, ZeroPageX, 6);
    t[0xCE] = entry(Dec, Absolute, 6);
    t[0xDE] = entry(Dec, AbsoluteX, 7);

    t[0xE8] = entry(Inx, Implicit, 2);
    t[0xC8] = entry(Iny, Implicit, 2);
    t[0xCA] = entry(Dex, Implicit, 2);
    t[0x88] = entry(Dey, Implicit, 2);

    // Shifts and rotates
    t[0x0A] = entry(Asl, Accumulator, 2);
    t[0x06] = entry(Asl, ZeroPage, 5);
    t[0x16] = entry(Asl, ZeroPageX, 6);
    t[0x0E] = entry(Asl, Absolute, 6);
    t[0x1E] = entry(Asl, AbsoluteX, 7);

    t[0x4A] = entry(Lsr, Accumulator, 2);
    t[0x46] = entry(Lsr, ZeroPage, 5);
    t[0x56] = entry(Lsr, ZeroPageX, 6);
    t[0x4E] = entry(Lsr, Absolute, 6);
    t[0x5E] = entry(Lsr, AbsoluteX, 7);

    t[0x2A] = entry(Rol, Accumulator, 2);
    t[0x26] = entry(Rol, ZeroPage, 5);
    t[0x36] = entry(Rol, ZeroPageX, 6);
    t[0x2E] = entry(Rol, Absolute, 6);
    t[0x3E] = entry(Rol, AbsoluteX, 7);

    t[0x6A] = entry(Ror, Accumulator, 2);
    t[0x66] = entry(Ror, ZeroPage, 5);
    t[0x76] = entry(Ror, ZeroPageX, 6);
    t[0x6E] = entry(Ror, Absolute, 6);
    t[0x7E] = entry(Ror, AbsoluteX, 7);

    // Branches (taken/page penalties are charged by the branch itself)
    t[0x90] = entry(Bcc, Relative, 2);
    t[0xB0] = entry(Bcs, Relative, 2);
    t[0xF0] = entry(Beq, Relative, 2);
    t[0xD0] = entry(Bne, Relative, 2);
    t[0x30] = entry(Bmi, Relative, 2);
    t[0x10] = entry(Bpl, Relative, 2);
    t[0x50] = entry(Bvc, Relative, 2);
    t[0x70] = entry(Bvs, Relative, 2);

    // Control flow
    t[0x4C] = entry(Jmp, Absolute, 3);
    t[0x6C] = entry(Jmp, Indirect, 5);
    t[0x20] = entry(Jsr, Absolute, 6);
    t[0x60] = entry(Rts, Implicit, 6);
    t[0x40] = entry(Rti, Implicit, 6);
    t[0x00] = entry(Brk, Implicit, 7);
    t[0xEA] = entry(Nop, Implicit, 2);

    // Stack
    t[0x48] = entry(Pha, Implicit, 3);
    t[0x08] = entry(Php, Implicit, 3);
    t[0x68] = entry(Pla, Implicit, 4);
    t[0x28] = entry(Plp, Implicit, 4);

    // Flags
    t[0x18] = entry(Clc, Implicit, 2);
    t[0x38] = entry(Sec, Implicit, 2);
    t[0x58] = entry(Cli, Implicit, 2);
    t[0x78] = entry(Sei, Implicit, 2);
    t[0xD8] = entry(Cld, Implicit, 2);
    t[0xF8] = entry(Sed, Implicit, 2);
    t[0xB8] = entry(Clv, Implicit, 2);

    // Transfers
    t[0xAA] = entry(Tax, Implicit, 2);
    t[0xA8] = entry(Tay, Implicit, 2);
    t[0x8A] = entry(Txa, Implicit, 2);
    t[0x98] = entry(Tya, Implicit, 2);
    t[0xBA] = entry(Tsx, Implicit, 2);
    t[0x9A] = entry(Txs, Implicit, 2);

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let populated = OPCODE_TABLE.iter().filter(|e| e.is_some()).count();
        assert_eq!(populated, 151);
    }

    #[test]
    fn test_lookup_matches_table() {
        let lda = lookup(0xA9).unwrap();
        assert_eq!(lda.mnemonic(), "LDA");
        assert_eq!(lda.size_bytes(), 2);
        assert!(lookup(0x02).is_none());
    }

    #[test]
    fn test_stores_and_rmw_never_pay_page_penalty() {
        for entry in OPCODE_TABLE.iter().flatten() {
            if matches!(
                entry.instruction,
                Instruction::Sta
                    | Instruction::Inc
                    | Instruction::Dec
                    | Instruction::Asl
                    | Instruction::Lsr
                    | Instruction::Rol
                    | Instruction::Ror
            ) {
                assert!(!entry.page_cross_penalty, "{} pays page penalty", entry.mnemonic());
            }
        }
    }
}
