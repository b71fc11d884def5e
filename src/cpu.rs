//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute step.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction byte
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register** (P): packed NV-BDIZC flags, see [`crate::status`]
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! - `tick()`: Execute one instruction; unimplemented opcodes are logged and skipped
//! - `step()`: Same as `tick()` but reports unimplemented opcodes to the caller
//! - `run_for_cycles()`: Execute until a cycle budget is exhausted

use crate::instructions;
use crate::opcodes::OPCODE_TABLE;
use crate::status::{NEGATIVE, UNUSED, ZERO};
use crate::{ExecutionError, MemoryBus};

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the little-endian IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// How ADC and SBC treat the Decimal flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimalMode {
    /// Binary arithmetic regardless of the Decimal flag.
    #[default]
    Ignored,

    /// NMOS 6502 BCD arithmetic when the Decimal flag is set.
    Nmos,
}

/// Construction-time CPU configuration.
///
/// # Examples
///
/// ```
/// use cpu6502::{Config, DecimalMode, FlatMemory, CPU};
///
/// let config = Config {
///     decimal_mode: DecimalMode::Nmos,
/// };
/// let cpu = CPU::with_config(FlatMemory::new(), config);
/// assert_eq!(cpu.config().decimal_mode, DecimalMode::Nmos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// BCD handling for ADC/SBC.
    pub decimal_mode: DecimalMode,
}

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags, program counter,
/// stack pointer, and cycle counter. It is generic over the memory implementation via the
/// `MemoryBus` trait and owns its bus exclusively.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// // Create memory and set reset vector
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = CPU::new(memory);
///
/// // Inspect initial state
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.status(), 0b0010_0000); // only the unused bit
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction byte)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Packed status register (NV-BDIZC)
    pub(crate) p: u8,

    /// Total CPU cycles executed since the last reset
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,

    pub(crate) config: Config,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and the default configuration.
    ///
    /// The CPU is reset immediately, so the program counter is loaded from the
    /// reset vector at 0xFFFC/0xFFFD.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, Config::default())
    }

    /// Creates a new CPU with an explicit configuration and resets it.
    pub fn with_config(memory: M, config: Config) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            p: 0,
            cycles: 0,
            memory,
            config,
        };
        cpu.reset();
        cpu
    }

    /// Puts the CPU into its reset state.
    ///
    /// - A, X and Y are zeroed
    /// - Stack pointer is set to 0xFD
    /// - Status register holds only the unused bit
    /// - Cycle counter is zeroed
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    ///
    /// Memory is left untouched, so resetting twice yields the same state.
    pub fn reset(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFD;
        self.p = UNUSED;
        self.cycles = 0;
        self.pc = self.read_word(RESET_VECTOR);
    }

    /// Executes exactly one instruction.
    ///
    /// An opcode with no table entry is reported through the `log` facade and
    /// otherwise ignored: PC has already moved past the opcode byte, no cycles
    /// are charged and no other state changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x8000, 0xFF); // no such opcode
    /// mem.write(0xFFFD, 0x80);
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.tick();
    /// assert_eq!(cpu.pc(), 0x8001);
    /// assert_eq!(cpu.cycles(), 0);
    /// ```
    pub fn tick(&mut self) {
        if let Err(err) = self.step() {
            log::error!("{} at PC ${:04X}", err, self.pc.wrapping_sub(1));
        }
    }

    /// Executes one instruction and reports unimplemented opcodes.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at PC and advance PC
    /// 2. Look up the opcode table entry
    /// 3. Resolve the addressing mode (consuming operand bytes)
    /// 4. Execute the instruction
    /// 5. Charge base cycles, plus one if the operand crossed a page and the
    ///    entry allows the penalty
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::UnimplementedOpcode` for an empty table slot. The
    /// CPU state is the same as after `tick()` in that case.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let opcode = self.fetch();

        let Some(metadata) = OPCODE_TABLE[opcode as usize] else {
            return Err(ExecutionError::UnimplementedOpcode(opcode));
        };

        log::trace!(
            "${:04X}: {:02X} {}",
            self.pc.wrapping_sub(1),
            opcode,
            metadata.mnemonic()
        );

        let resolved = self.resolve(metadata.addressing_mode);
        if metadata.page_cross_penalty && resolved.page_crossed {
            self.cycles += 1;
        }

        instructions::execute(self, metadata.instruction, resolved);

        self.cycles += metadata.base_cycles as u64;

        Ok(())
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or an unimplemented
    /// opcode is hit. Returns the actual number of cycles consumed (may be slightly
    /// more than budget due to instruction granularity).
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFD, 0x80);
    /// for addr in 0x8000..0x8010 {
    ///     mem.write(addr, 0xEA); // NOP, 2 cycles
    /// }
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.run_for_cycles(10), Ok(10));
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    // ========== Memory Pass-through ==========

    /// Reads a byte through the memory bus.
    pub fn read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Writes a byte through the memory bus.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Reads a little-endian word. The high byte address wraps at 0xFFFF.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    /// Returns the configuration the CPU was built with.
    pub fn config(&self) -> Config {
        self.config
    }

    // ========== Stack ==========

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_PAGE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_PAGE | self.sp as u16)
    }

    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Flag Helpers ==========

    /// Sets every flag bit in `mask`.
    pub fn set_flags(&mut self, mask: u8) {
        self.p |= mask;
    }

    /// Clears every flag bit in `mask`.
    pub fn clear_flags(&mut self, mask: u8) {
        self.p &= !mask;
    }

    /// Returns true only if all bits in `mask` are set.
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    /// use cpu6502::status::{CARRY, ZERO};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_flags(CARRY);
    /// assert!(cpu.is_flag_set(CARRY));
    /// assert!(!cpu.is_flag_set(CARRY | ZERO));
    /// ```
    pub fn is_flag_set(&self, mask: u8) -> bool {
        self.p & mask == mask
    }

    /// Sets or clears the bits in `mask` according to `on`.
    pub fn set_flag(&mut self, mask: u8, on: bool) {
        if on {
            self.set_flags(mask);
        } else {
            self.clear_flags(mask);
        }
    }

    /// Sets Zero iff `value` is 0 and Negative iff bit 7 of `value` is set.
    ///
    /// No other flag is touched.
    pub fn update_zero_and_negative(&mut self, value: u8) {
        self.clear_flags(ZERO | NEGATIVE);
        if value == 0 {
            self.set_flags(ZERO);
        }
        if value & 0x80 != 0 {
            self.set_flags(NEGATIVE);
        }
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        self.p
    }

    /// Returns the total number of CPU cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Register Setters ==========
    //
    // No validation: the harness injects arbitrary state through these.

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_status(&mut self, value: u8) {
        self.p = value;
    }

    pub fn set_cycles(&mut self, value: u64) {
        self.cycles = value;
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.is_flag_set(NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.is_flag_set(crate::status::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.is_flag_set(crate::status::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.is_flag_set(crate::status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.is_flag_set(crate::status::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.is_flag_set(ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.is_flag_set(crate::status::CARRY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);
        CPU::new(mem)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.status(), UNUSED);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut cpu = setup_cpu();
        cpu.set_a(0x12);
        cpu.set_x(0x34);
        cpu.set_y(0x56);
        cpu.set_sp(0x00);
        cpu.set_status(0xFF);
        cpu.set_cycles(99);
        cpu.set_pc(0x1234);

        cpu.reset();

        assert_eq!(cpu.a(), 0);
        assert_eq!(cpu.x(), 0);
        assert_eq!(cpu.y(), 0);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.status(), UNUSED);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.pc(), 0x8000);
    }

    #[test]
    fn test_reset_with_empty_vector_starts_at_zero() {
        let cpu = CPU::new(FlatMemory::new());
        assert_eq!(cpu.pc(), 0x0000);
    }

    #[test]
    fn test_status_flag_helpers() {
        let mut cpu = setup_cpu();

        assert_eq!(cpu.status(), UNUSED);
        cpu.set_flags(CARRY);
        assert_eq!(cpu.status(), CARRY | UNUSED);
        cpu.set_flags(ZERO | INTERRUPT_DISABLE);
        assert_eq!(cpu.status(), CARRY | ZERO | INTERRUPT_DISABLE | UNUSED);

        cpu.clear_flags(CARRY | ZERO | INTERRUPT_DISABLE | UNUSED);
        assert_eq!(cpu.status(), 0x00);

        cpu.set_flags(OVERFLOW);
        cpu.set_flags(NEGATIVE);
        assert_eq!(cpu.status(), OVERFLOW | NEGATIVE);
    }

    #[test]
    fn test_is_flag_set_requires_all_bits() {
        let mut cpu = setup_cpu();
        cpu.set_status(0);

        assert!(!cpu.is_flag_set(CARRY));
        cpu.set_flags(CARRY);
        assert!(cpu.is_flag_set(CARRY));
        assert!(!cpu.is_flag_set(CARRY | ZERO));
        cpu.set_flags(ZERO);
        assert!(cpu.is_flag_set(CARRY | ZERO));
    }

    #[test]
    fn test_update_zero_and_negative() {
        let mut cpu = setup_cpu();

        cpu.update_zero_and_negative(0x00);
        assert!(cpu.flag_z());
        assert!(!cpu.flag_n());

        cpu.update_zero_and_negative(0x80);
        assert!(!cpu.flag_z());
        assert!(cpu.flag_n());

        cpu.update_zero_and_negative(0x01);
        assert!(!cpu.flag_z());
        assert!(!cpu.flag_n());
        assert_eq!(cpu.status(), UNUSED);
    }

    #[test]
    fn test_step_unimplemented() {
        let mut cpu = setup_cpu();
        cpu.write(0x8000, 0x02);

        assert_eq!(cpu.step(), Err(ExecutionError::UnimplementedOpcode(0x02)));
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.cycles(), 0);
    }

    #[test]
    fn test_stack_push_pull_wraps() {
        let mut cpu = setup_cpu();
        cpu.set_sp(0x00);

        cpu.push(0xAB);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.read(0x0100), 0xAB);

        assert_eq!(cpu.pull(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_push_word_order() {
        let mut cpu = setup_cpu();
        cpu.push_word(0x1234);

        assert_eq!(cpu.read(0x01FD), 0x12);
        assert_eq!(cpu.read(0x01FC), 0x34);
        assert_eq!(cpu.pull_word(), 0x1234);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn test_run_for_cycles_stops_at_unimplemented() {
        let mut cpu = setup_cpu();
        cpu.write(0x8000, 0xEA);
        cpu.write(0x8001, 0xFF);

        assert_eq!(
            cpu.run_for_cycles(100),
            Err(ExecutionError::UnimplementedOpcode(0xFF))
        );
        assert_eq!(cpu.cycles(), 2);
    }
}
