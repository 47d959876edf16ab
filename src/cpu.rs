//! The `cpu` module contains the 6502/65C02 CPU emulator itself: the
//! dispatch table, the fetch/decode/execute loop, interrupt delivery,
//! stack handling and cycle accounting.

use crate::addressing_modes::Mode;
use crate::bus::{Bus, MemoryError};
use crate::instructions::{implementations, InstructionFn, Mnemonic};
use crate::registers::Registers;
use log::{debug, trace};
use std::collections::HashMap;
use thiserror::Error;

/// Address of the non-maskable interrupt vector.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Address of the reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// Address of the IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// The chip variant a [`CPU`] emulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    /// The original NMOS 6502, quirks included.
    Nmos,
    /// The WDC 65C02: fixed indirect JMP, extra instructions, different
    /// decimal-mode flag behavior.
    Cmos,
}

/// Errors surfaced by [`CPU::step`].
///
/// Each variant records where in the instruction the underlying memory
/// fault happened. `pc` is the address of the faulting instruction, not
/// the address that failed; that one lives in the source error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// The opcode byte itself could not be read.
    #[error("instruction fetch at {pc:#06X} failed: {source}")]
    Fetch {
        /// Address of the attempted fetch.
        pc: u16,
        /// The underlying memory fault.
        source: MemoryError,
    },

    /// An operand byte could not be read.
    #[error("operand read for opcode {opcode:#04X} at {pc:#06X} failed: {source}")]
    Operand {
        /// Address of the faulting instruction.
        pc: u16,
        /// The opcode that was being decoded.
        opcode: u8,
        /// The underlying memory fault.
        source: MemoryError,
    },

    /// The instruction faulted while resolving an address or touching
    /// memory.
    #[error("execution of opcode {opcode:#04X} at {pc:#06X} failed: {source}")]
    Execute {
        /// Address of the faulting instruction.
        pc: u16,
        /// The opcode that was executing.
        opcode: u8,
        /// The underlying memory fault.
        source: MemoryError,
    },
}

/// Hooks a debugger front-end can attach to a [`CPU`].
///
/// Both callbacks run synchronously inside [`CPU::step`]; a handler must
/// not call back into `step`.
pub trait Debugger {
    /// Called before each instruction fetch with the current PC.
    fn on_instruction(&mut self, _pc: u16) {}

    /// Called after every store the CPU performs, stack pushes included.
    fn on_store(&mut self, _addr: u16, _value: u8) {}
}

/// A static instruction descriptor: one legal (mnemonic, mode) pair and
/// its costs, with the NMOS and CMOS handlers side by side.
pub struct Instruction<B: Bus> {
    /// Instruction mnemonic
    pub mnemonic: Mnemonic,
    /// Addressing mode
    pub mode: Mode,
    /// Encoding
    pub opcode: u8,
    /// Total encoded length in bytes (1 to 3)
    pub length: u8,
    /// Base cycle count
    pub cycles: u8,
    /// Cycles added when the addressing crosses a page (0 or 1)
    pub page_cycles: u8,
    /// NMOS handler; `None` when the encoding exists on the 65C02 only
    pub fn_nmos: Option<InstructionFn<B>>,
    /// CMOS handler
    pub fn_cmos: Option<InstructionFn<B>>,
}

impl<B: Bus> Clone for Instruction<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Bus> Copy for Instruction<B> {}

/// One table row: (mnemonic, mode, opcode, base cycles, page-cross cycles).
type OpcodeRow = (Mnemonic, Mode, u8, u8, u8);

/// The `CPU` struct represents the 6502/65C02 CPU emulator.
///
/// It owns its register file and cycle counter and borrows a bus for
/// memory. One call to [`step`](CPU::step) retires exactly one
/// instruction; there is no hidden continuation state between calls.
pub struct CPU<B: Bus> {
    /// The current state of the CPU registers.
    pub registers: Registers,

    /// The bus used by the CPU to access memory and I/O.
    pub bus: B,

    arch: Arch,

    /// Total cycles elapsed; monotonically non-decreasing.
    cycles: u64,

    /// Set by address resolution when an indexed access crossed a page.
    pub(crate) page_crossed: bool,

    /// Cycle adjustment accumulated by the executing instruction.
    pub(crate) extra_cycles: i8,

    instruction_table: Box<[Option<Instruction<B>>; 256]>,
    mnemonic_index: HashMap<Mnemonic, Vec<u8>>,
    debugger: Option<Box<dyn Debugger>>,
}

impl<B: Bus> CPU<B> {
    /// Creates a CPU of the given chip variant on the given bus.
    ///
    /// Registers come up in the power-on state (A = X = Y = 0, SP = `$FF`,
    /// PC = 0) and the cycle counter at zero. The instruction table is
    /// built here, once.
    pub fn new(arch: Arch, bus: B) -> Self {
        let mut cpu = Self {
            registers: Registers::new(),
            bus,
            arch,
            cycles: 0,
            page_crossed: false,
            extra_cycles: 0,
            instruction_table: Box::new([None; 256]),
            mnemonic_index: HashMap::new(),
            debugger: None,
        };
        cpu.init_instruction_table();
        cpu
    }

    /// Returns the chip variant this CPU emulates.
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Returns the current cycle count.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, addr: u16) {
        self.registers.pc = addr;
    }

    /// Attaches a debugger whose hooks fire on instruction boundaries and
    /// stores. Replaces any previously attached debugger.
    pub fn attach_debugger(&mut self, debugger: Box<dyn Debugger>) {
        self.debugger = Some(debugger);
    }

    /// Detaches and returns the current debugger, if any.
    pub fn detach_debugger(&mut self) -> Option<Box<dyn Debugger>> {
        self.debugger.take()
    }

    /// Returns the descriptor for an opcode byte, if the byte is a legal
    /// encoding on either chip.
    pub fn instruction(&self, opcode: u8) -> Option<&Instruction<B>> {
        self.instruction_table[opcode as usize].as_ref()
    }

    /// Returns every descriptor encoding `mnemonic`, in table order.
    ///
    /// This is the surface an external assembler selects encodings from.
    /// Descriptors whose NMOS handler is `None` assemble for the 65C02
    /// only.
    pub fn variants(&self, mnemonic: Mnemonic) -> Vec<&Instruction<B>> {
        self.mnemonic_index
            .get(&mnemonic)
            .map(|opcodes| {
                opcodes
                    .iter()
                    .filter_map(|&op| self.instruction_table[op as usize].as_ref())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Executes one instruction cycle.
    ///
    /// Fetches the opcode at PC, decodes it, reads its operand bytes,
    /// advances PC past the instruction, dispatches to the handler for
    /// this chip variant and charges the cycle cost, including page-cross
    /// and branch penalties.
    ///
    /// On a memory fault the registers keep the state of the last
    /// successful micro-operation, the instruction's base cycles are
    /// charged, and the fault is returned with its PC and opcode.
    pub fn step(&mut self) -> Result<(), StepError> {
        if let Some(debugger) = self.debugger.as_mut() {
            debugger.on_instruction(self.registers.pc);
        }

        let pc = self.registers.pc;
        let opcode = self
            .bus
            .read(pc)
            .map_err(|source| StepError::Fetch { pc, source })?;

        let inst = self.instruction_table[opcode as usize];
        let handler = inst.and_then(|inst| match self.arch {
            Arch::Nmos => inst.fn_nmos,
            Arch::Cmos => inst.fn_cmos,
        });
        let (inst, handler) = match (inst, handler) {
            (Some(inst), Some(handler)) => (inst, handler),
            _ => return self.undefined_opcode(pc, opcode),
        };

        let mut operand = 0u16;
        for i in 0..inst.length - 1 {
            let byte = self
                .bus
                .read(pc.wrapping_add(1 + i as u16))
                .map_err(|source| StepError::Operand { pc, opcode, source })?;
            operand |= (byte as u16) << (8 * i);
        }

        self.registers.pc = pc.wrapping_add(inst.length as u16);
        self.page_crossed = false;
        self.extra_cycles = 0;

        trace!("{:04X}  {} {}", pc, inst.mnemonic, inst.mode);

        if let Err(source) = handler(self, inst.mode, operand) {
            self.cycles += inst.cycles as u64;
            return Err(StepError::Execute { pc, opcode, source });
        }

        let mut total = inst.cycles as i16 + self.extra_cycles as i16;
        if self.page_crossed {
            total += inst.page_cycles as i16;
        }
        self.cycles += total as u64;
        Ok(())
    }

    /// Executes an undefined opcode as a NOP.
    ///
    /// On NMOS every undefined opcode is one byte and two cycles. The
    /// 65C02 documents its unused encodings as NOPs whose length and cost
    /// depend on the opcode column.
    fn undefined_opcode(&mut self, pc: u16, opcode: u8) -> Result<(), StepError> {
        let (length, cycles) = match self.arch {
            Arch::Nmos => (1, 2),
            Arch::Cmos => cmos_nop_shape(opcode),
        };
        debug!(
            "undefined opcode {:#04X} at {:#06X}, treated as {}-byte NOP",
            opcode, pc, length
        );
        self.registers.pc = pc.wrapping_add(length as u16);
        self.cycles += cycles as u64;
        Ok(())
    }

    /// Handles an interrupt request (IRQ).
    ///
    /// Masked: does nothing while the interrupt disable flag is set.
    pub fn irq(&mut self) -> Result<(), MemoryError> {
        if self.registers.status.interrupt_disable {
            return Ok(());
        }
        debug!("IRQ: vectoring through {:#06X}", IRQ_VECTOR);
        self.interrupt(IRQ_VECTOR, false)?;
        self.cycles += 7;
        Ok(())
    }

    /// Handles a non-maskable interrupt (NMI). Never masked.
    pub fn nmi(&mut self) -> Result<(), MemoryError> {
        debug!("NMI: vectoring through {:#06X}", NMI_VECTOR);
        self.interrupt(NMI_VECTOR, false)?;
        self.cycles += 7;
        Ok(())
    }

    /// Resets the CPU by loading PC from the reset vector.
    ///
    /// Nothing else changes; as on hardware, the reset routine is expected
    /// to set up the stack pointer and flags itself.
    pub fn reset(&mut self) -> Result<(), MemoryError> {
        self.registers.pc = self.bus.read_word(RESET_VECTOR)?;
        debug!("RESET: pc={:#06X}", self.registers.pc);
        Ok(())
    }

    /// Runs the common interrupt sequence: push PC and P, set I, vector.
    ///
    /// `brk` selects the B bit in the pushed status byte (set for BRK,
    /// clear for IRQ/NMI). The 65C02 additionally clears decimal mode.
    pub(crate) fn interrupt(&mut self, vector: u16, brk: bool) -> Result<(), MemoryError> {
        self.push((self.registers.pc >> 8) as u8)?;
        self.push(self.registers.pc as u8)?;
        let status = self.registers.save_ps(brk);
        self.push(status)?;
        self.registers.status.interrupt_disable = true;
        if self.arch == Arch::Cmos {
            self.registers.status.decimal_mode = false;
        }
        self.registers.pc = self.bus.read_word(vector)?;
        Ok(())
    }

    /// Pushes a byte onto the stack and decrements the stack pointer.
    /// The stack never leaves page `$01`.
    pub(crate) fn push(&mut self, data: u8) -> Result<(), MemoryError> {
        let addr = 0x0100 | self.registers.sp as u16;
        self.store_byte(addr, data)?;
        self.registers.sp = self.registers.sp.wrapping_sub(1);
        Ok(())
    }

    /// Increments the stack pointer and pops a byte from the stack.
    pub(crate) fn pop(&mut self) -> Result<u8, MemoryError> {
        self.registers.sp = self.registers.sp.wrapping_add(1);
        self.bus.read(0x0100 | self.registers.sp as u16)
    }

    /// Writes a byte through the bus, notifying an attached debugger.
    /// Every store the CPU performs goes through here.
    pub(crate) fn store_byte(&mut self, addr: u16, value: u8) -> Result<(), MemoryError> {
        self.bus.write(addr, value)?;
        if let Some(debugger) = self.debugger.as_mut() {
            debugger.on_store(addr, value);
        }
        Ok(())
    }

    /// Updates the zero and negative flags from a result byte.
    pub(crate) fn update_zero_and_negative_flags(&mut self, result: u8) {
        self.registers.status.zero = result == 0;
        self.registers.status.negative = result & 0x80 != 0;
    }

    /// Takes a branch to `target`, charging one cycle, or two when the
    /// target sits on a different page than the instruction that follows
    /// the branch.
    pub(crate) fn branch(&mut self, target: u16) {
        self.extra_cycles += 1;
        if (self.registers.pc & 0xFF00) != (target & 0xFF00) {
            self.extra_cycles += 1;
        }
        self.registers.pc = target;
    }

    /// Builds the dispatch table by joining the opcode rows with the
    /// per-mnemonic implementation pairs.
    fn init_instruction_table(&mut self) {
        for &(mnemonic, mode, opcode, cycles, page_cycles) in table::OPCODES {
            let (fn_nmos, fn_cmos) = implementations::<B>(mnemonic);
            self.map_opcode(mnemonic, mode, opcode, cycles, page_cycles, fn_nmos, fn_cmos);
        }
        // 65C02 additions never get an NMOS handler, whatever the mnemonic.
        for &(mnemonic, mode, opcode, cycles, page_cycles) in table::CMOS_OPCODES {
            let (_, fn_cmos) = implementations::<B>(mnemonic);
            self.map_opcode(mnemonic, mode, opcode, cycles, page_cycles, None, fn_cmos);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn map_opcode(
        &mut self,
        mnemonic: Mnemonic,
        mode: Mode,
        opcode: u8,
        cycles: u8,
        page_cycles: u8,
        fn_nmos: Option<InstructionFn<B>>,
        fn_cmos: Option<InstructionFn<B>>,
    ) {
        self.instruction_table[opcode as usize] = Some(Instruction {
            mnemonic,
            mode,
            opcode,
            length: mode.operand_length() + 1,
            cycles,
            page_cycles,
            fn_nmos,
            fn_cmos,
        });
        self.mnemonic_index.entry(mnemonic).or_default().push(opcode);
    }
}

/// Length and cycle count of a documented 65C02 NOP encoding.
fn cmos_nop_shape(opcode: u8) -> (u8, u8) {
    match opcode {
        0x44 => (2, 3),
        0x54 | 0xD4 | 0xF4 => (2, 4),
        0x5C => (3, 8),
        0xDC | 0xFC => (3, 4),
        _ => match opcode & 0x0F {
            0x02 => (2, 2),
            // Columns $x3, $x7, $xB, $xF: single-byte, single-cycle NOPs.
            _ => (1, 1),
        },
    }
}

#[rustfmt::skip]
mod table {
    use super::OpcodeRow;
    use crate::addressing_modes::Mode::*;
    use crate::instructions::Mnemonic::*;

    /// The 151 legal NMOS opcodes, valid on both chips.
    pub(super) const OPCODES: &[OpcodeRow] = &[
        // ADC
        (ADC, Immediate, 0x69, 2, 0),
        (ADC, ZeroPage,  0x65, 3, 0),
        (ADC, ZeroPageX, 0x75, 4, 0),
        (ADC, Absolute,  0x6D, 4, 0),
        (ADC, AbsoluteX, 0x7D, 4, 1),
        (ADC, AbsoluteY, 0x79, 4, 1),
        (ADC, IndirectX, 0x61, 6, 0),
        (ADC, IndirectY, 0x71, 5, 1),
        // AND
        (AND, Immediate, 0x29, 2, 0),
        (AND, ZeroPage,  0x25, 3, 0),
        (AND, ZeroPageX, 0x35, 4, 0),
        (AND, Absolute,  0x2D, 4, 0),
        (AND, AbsoluteX, 0x3D, 4, 1),
        (AND, AbsoluteY, 0x39, 4, 1),
        (AND, IndirectX, 0x21, 6, 0),
        (AND, IndirectY, 0x31, 5, 1),
        // ASL
        (ASL, Accumulator, 0x0A, 2, 0),
        (ASL, ZeroPage,    0x06, 5, 0),
        (ASL, ZeroPageX,   0x16, 6, 0),
        (ASL, Absolute,    0x0E, 6, 0),
        (ASL, AbsoluteX,   0x1E, 7, 0),
        // Branches
        (BCC, Relative, 0x90, 2, 0),
        (BCS, Relative, 0xB0, 2, 0),
        (BEQ, Relative, 0xF0, 2, 0),
        (BMI, Relative, 0x30, 2, 0),
        (BNE, Relative, 0xD0, 2, 0),
        (BPL, Relative, 0x10, 2, 0),
        (BVC, Relative, 0x50, 2, 0),
        (BVS, Relative, 0x70, 2, 0),
        // BIT
        (BIT, ZeroPage, 0x24, 3, 0),
        (BIT, Absolute, 0x2C, 4, 0),
        // BRK
        (BRK, Implied, 0x00, 7, 0),
        // Flag clears
        (CLC, Implied, 0x18, 2, 0),
        (CLD, Implied, 0xD8, 2, 0),
        (CLI, Implied, 0x58, 2, 0),
        (CLV, Implied, 0xB8, 2, 0),
        // CMP
        (CMP, Immediate, 0xC9, 2, 0),
        (CMP, ZeroPage,  0xC5, 3, 0),
        (CMP, ZeroPageX, 0xD5, 4, 0),
        (CMP, Absolute,  0xCD, 4, 0),
        (CMP, AbsoluteX, 0xDD, 4, 1),
        (CMP, AbsoluteY, 0xD9, 4, 1),
        (CMP, IndirectX, 0xC1, 6, 0),
        (CMP, IndirectY, 0xD1, 5, 1),
        // CPX / CPY
        (CPX, Immediate, 0xE0, 2, 0),
        (CPX, ZeroPage,  0xE4, 3, 0),
        (CPX, Absolute,  0xEC, 4, 0),
        (CPY, Immediate, 0xC0, 2, 0),
        (CPY, ZeroPage,  0xC4, 3, 0),
        (CPY, Absolute,  0xCC, 4, 0),
        // DEC
        (DEC, ZeroPage,  0xC6, 5, 0),
        (DEC, ZeroPageX, 0xD6, 6, 0),
        (DEC, Absolute,  0xCE, 6, 0),
        (DEC, AbsoluteX, 0xDE, 7, 0),
        (DEX, Implied,   0xCA, 2, 0),
        (DEY, Implied,   0x88, 2, 0),
        // EOR
        (EOR, Immediate, 0x49, 2, 0),
        (EOR, ZeroPage,  0x45, 3, 0),
        (EOR, ZeroPageX, 0x55, 4, 0),
        (EOR, Absolute,  0x4D, 4, 0),
        (EOR, AbsoluteX, 0x5D, 4, 1),
        (EOR, AbsoluteY, 0x59, 4, 1),
        (EOR, IndirectX, 0x41, 6, 0),
        (EOR, IndirectY, 0x51, 5, 1),
        // INC
        (INC, ZeroPage,  0xE6, 5, 0),
        (INC, ZeroPageX, 0xF6, 6, 0),
        (INC, Absolute,  0xEE, 6, 0),
        (INC, AbsoluteX, 0xFE, 7, 0),
        (INX, Implied,   0xE8, 2, 0),
        (INY, Implied,   0xC8, 2, 0),
        // Jumps
        (JMP, Absolute, 0x4C, 3, 0),
        (JMP, Indirect, 0x6C, 5, 0),
        (JSR, Absolute, 0x20, 6, 0),
        // LDA
        (LDA, Immediate, 0xA9, 2, 0),
        (LDA, ZeroPage,  0xA5, 3, 0),
        (LDA, ZeroPageX, 0xB5, 4, 0),
        (LDA, Absolute,  0xAD, 4, 0),
        (LDA, AbsoluteX, 0xBD, 4, 1),
        (LDA, AbsoluteY, 0xB9, 4, 1),
        (LDA, IndirectX, 0xA1, 6, 0),
        (LDA, IndirectY, 0xB1, 5, 1),
        // LDX
        (LDX, Immediate, 0xA2, 2, 0),
        (LDX, ZeroPage,  0xA6, 3, 0),
        (LDX, ZeroPageY, 0xB6, 4, 0),
        (LDX, Absolute,  0xAE, 4, 0),
        (LDX, AbsoluteY, 0xBE, 4, 1),
        // LDY
        (LDY, Immediate, 0xA0, 2, 0),
        (LDY, ZeroPage,  0xA4, 3, 0),
        (LDY, ZeroPageX, 0xB4, 4, 0),
        (LDY, Absolute,  0xAC, 4, 0),
        (LDY, AbsoluteX, 0xBC, 4, 1),
        // LSR
        (LSR, Accumulator, 0x4A, 2, 0),
        (LSR, ZeroPage,    0x46, 5, 0),
        (LSR, ZeroPageX,   0x56, 6, 0),
        (LSR, Absolute,    0x4E, 6, 0),
        (LSR, AbsoluteX,   0x5E, 7, 0),
        // NOP
        (NOP, Implied, 0xEA, 2, 0),
        // ORA
        (ORA, Immediate, 0x09, 2, 0),
        (ORA, ZeroPage,  0x05, 3, 0),
        (ORA, ZeroPageX, 0x15, 4, 0),
        (ORA, Absolute,  0x0D, 4, 0),
        (ORA, AbsoluteX, 0x1D, 4, 1),
        (ORA, AbsoluteY, 0x19, 4, 1),
        (ORA, IndirectX, 0x01, 6, 0),
        (ORA, IndirectY, 0x11, 5, 1),
        // Stack
        (PHA, Implied, 0x48, 3, 0),
        (PHP, Implied, 0x08, 3, 0),
        (PLA, Implied, 0x68, 4, 0),
        (PLP, Implied, 0x28, 4, 0),
        // ROL
        (ROL, Accumulator, 0x2A, 2, 0),
        (ROL, ZeroPage,    0x26, 5, 0),
        (ROL, ZeroPageX,   0x36, 6, 0),
        (ROL, Absolute,    0x2E, 6, 0),
        (ROL, AbsoluteX,   0x3E, 7, 0),
        // ROR
        (ROR, Accumulator, 0x6A, 2, 0),
        (ROR, ZeroPage,    0x66, 5, 0),
        (ROR, ZeroPageX,   0x76, 6, 0),
        (ROR, Absolute,    0x6E, 6, 0),
        (ROR, AbsoluteX,   0x7E, 7, 0),
        // Returns
        (RTI, Implied, 0x40, 6, 0),
        (RTS, Implied, 0x60, 6, 0),
        // SBC
        (SBC, Immediate, 0xE9, 2, 0),
        (SBC, ZeroPage,  0xE5, 3, 0),
        (SBC, ZeroPageX, 0xF5, 4, 0),
        (SBC, Absolute,  0xED, 4, 0),
        (SBC, AbsoluteX, 0xFD, 4, 1),
        (SBC, AbsoluteY, 0xF9, 4, 1),
        (SBC, IndirectX, 0xE1, 6, 0),
        (SBC, IndirectY, 0xF1, 5, 1),
        // Flag sets
        (SEC, Implied, 0x38, 2, 0),
        (SED, Implied, 0xF8, 2, 0),
        (SEI, Implied, 0x78, 2, 0),
        // STA; the store variants always pay the indexing cycle
        (STA, ZeroPage,  0x85, 3, 0),
        (STA, ZeroPageX, 0x95, 4, 0),
        (STA, Absolute,  0x8D, 4, 0),
        (STA, AbsoluteX, 0x9D, 5, 0),
        (STA, AbsoluteY, 0x99, 5, 0),
        (STA, IndirectX, 0x81, 6, 0),
        (STA, IndirectY, 0x91, 6, 0),
        // STX / STY
        (STX, ZeroPage,  0x86, 3, 0),
        (STX, ZeroPageY, 0x96, 4, 0),
        (STX, Absolute,  0x8E, 4, 0),
        (STY, ZeroPage,  0x84, 3, 0),
        (STY, ZeroPageX, 0x94, 4, 0),
        (STY, Absolute,  0x8C, 4, 0),
        // Transfers
        (TAX, Implied, 0xAA, 2, 0),
        (TAY, Implied, 0xA8, 2, 0),
        (TSX, Implied, 0xBA, 2, 0),
        (TXA, Implied, 0x8A, 2, 0),
        (TXS, Implied, 0x9A, 2, 0),
        (TYA, Implied, 0x98, 2, 0),
    ];

    /// The 27 opcodes added by the 65C02.
    pub(super) const CMOS_OPCODES: &[OpcodeRow] = &[
        // Zero-page indirect forms of the accumulator group
        (ADC, ZeroPageIndirect, 0x72, 5, 0),
        (AND, ZeroPageIndirect, 0x32, 5, 0),
        (CMP, ZeroPageIndirect, 0xD2, 5, 0),
        (EOR, ZeroPageIndirect, 0x52, 5, 0),
        (LDA, ZeroPageIndirect, 0xB2, 5, 0),
        (ORA, ZeroPageIndirect, 0x12, 5, 0),
        (SBC, ZeroPageIndirect, 0xF2, 5, 0),
        (STA, ZeroPageIndirect, 0x92, 5, 0),
        // New BIT forms
        (BIT, Immediate, 0x89, 2, 0),
        (BIT, ZeroPageX, 0x34, 4, 0),
        (BIT, AbsoluteX, 0x3C, 4, 1),
        // Accumulator increment/decrement
        (INC, Accumulator, 0x1A, 2, 0),
        (DEC, Accumulator, 0x3A, 2, 0),
        // Pre-indexed indirect jump
        (JMP, AbsoluteIndirectX, 0x7C, 6, 0),
        // Unconditional branch
        (BRA, Relative, 0x80, 2, 0),
        // Stack for the index registers
        (PHX, Implied, 0xDA, 3, 0),
        (PHY, Implied, 0x5A, 3, 0),
        (PLX, Implied, 0xFA, 4, 0),
        (PLY, Implied, 0x7A, 4, 0),
        // STZ
        (STZ, ZeroPage,  0x64, 3, 0),
        (STZ, ZeroPageX, 0x74, 4, 0),
        (STZ, Absolute,  0x9C, 4, 0),
        (STZ, AbsoluteX, 0x9E, 5, 0),
        // TRB / TSB
        (TRB, ZeroPage, 0x14, 5, 0),
        (TRB, Absolute, 0x1C, 6, 0),
        (TSB, ZeroPage, 0x04, 5, 0),
        (TSB, Absolute, 0x0C, 6, 0),
    ];
}
