//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function that takes a mutable reference to the CPU
//! and the operand produced by the addressing-mode resolver. Handlers never fail and
//! never charge base cycles; the engine does that after dispatch.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::addressing::Resolved;
use crate::opcodes::Instruction;
use crate::status::{CARRY, DECIMAL, INTERRUPT_DISABLE, OVERFLOW};
use crate::{MemoryBus, CPU};

/// Runs `instruction` against an already-resolved operand.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: Instruction,
    resolved: Resolved,
) {
    let operand = resolved.operand;

    match instruction {
        Instruction::Lda => load_store::execute_lda(cpu, operand),
        Instruction::Ldx => load_store::execute_ldx(cpu, operand),
        Instruction::Ldy => load_store::execute_ldy(cpu, operand),
        Instruction::Sta => load_store::execute_sta(cpu, operand),
        Instruction::Stx => load_store::execute_stx(cpu, operand),
        Instruction::Sty => load_store::execute_sty(cpu, operand),

        Instruction::Adc => alu::execute_adc(cpu, operand),
        Instruction::Sbc => alu::execute_sbc(cpu, operand),
        Instruction::And => alu::execute_and(cpu, operand),
        Instruction::Ora => alu::execute_ora(cpu, operand),
        Instruction::Eor => alu::execute_eor(cpu, operand),
        Instruction::Bit => alu::execute_bit(cpu, operand),
        Instruction::Cmp => alu::execute_cmp(cpu, operand),
        Instruction::Cpx => alu::execute_cpx(cpu, operand),
        Instruction::Cpy => alu::execute_cpy(cpu, operand),

        Instruction::Inc => inc_dec::execute_inc(cpu, operand),
        Instruction::Dec => inc_dec::execute_dec(cpu, operand),
        Instruction::Inx => inc_dec::execute_inx(cpu),
        Instruction::Iny => inc_dec::execute_iny(cpu),
        Instruction::Dex => inc_dec::execute_dex(cpu),
        Instruction::Dey => inc_dec::execute_dey(cpu),

        Instruction::Asl => shifts::execute_asl(cpu, operand),
        Instruction::Lsr => shifts::execute_lsr(cpu, operand),
        Instruction::Rol => shifts::execute_rol(cpu, operand),
        Instruction::Ror => shifts::execute_ror(cpu, operand),

        Instruction::Bcc
        | Instruction::Bcs
        | Instruction::Bne
        | Instruction::Beq
        | Instruction::Bpl
        | Instruction::Bmi
        | Instruction::Bvc
        | Instruction::Bvs => branches::execute_branch(cpu, instruction, resolved),

        Instruction::Jmp => control::execute_jmp(cpu, operand),
        Instruction::Jsr => control::execute_jsr(cpu, operand),
        Instruction::Rts => control::execute_rts(cpu),
        Instruction::Rti => control::execute_rti(cpu),
        Instruction::Brk => control::execute_brk(cpu),
        Instruction::Nop => {}

        Instruction::Pha => stack::execute_pha(cpu),
        Instruction::Php => stack::execute_php(cpu),
        Instruction::Pla => stack::execute_pla(cpu),
        Instruction::Plp => stack::execute_plp(cpu),

        Instruction::Clc => flags::execute_clear(cpu, CARRY),
        Instruction::Sec => flags::execute_set(cpu, CARRY),
        Instruction::Cli => flags::execute_clear(cpu, INTERRUPT_DISABLE),
        Instruction::Sei => flags::execute_set(cpu, INTERRUPT_DISABLE),
        Instruction::Cld => flags::execute_clear(cpu, DECIMAL),
        Instruction::Sed => flags::execute_set(cpu, DECIMAL),
        Instruction::Clv => flags::execute_clear(cpu, OVERFLOW),

        Instruction::Tax => transfer::execute_tax(cpu),
        Instruction::Tay => transfer::execute_tay(cpu),
        Instruction::Txa => transfer::execute_txa(cpu),
        Instruction::Tya => transfer::execute_tya(cpu),
        Instruction::Tsx => transfer::execute_tsx(cpu),
        Instruction::Txs => transfer::execute_txs(cpu),
    }
}
