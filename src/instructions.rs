//! The `instructions` module contains the implementation of the 6502 and
//! 65C02 CPU instructions.
//!
//! Each mnemonic is a free function with a common signature. Where NMOS and
//! CMOS silicon disagree (ADC, SBC, the read-modify-write shifts) a `_cmos`
//! variant sits next to the NMOS one; [`implementations`] pairs them up for
//! the dispatch table.

use crate::addressing_modes::{effective_address, load, store, Mode};
use crate::bus::{Bus, MemoryError};
use crate::cpu::{CPU, IRQ_VECTOR};
use std::fmt;
use std::str::FromStr;

/// A type alias for an instruction function.
///
/// The function receives the decoded addressing mode and the raw operand
/// bytes (zero, one or two, little-endian in a `u16`). It reports extra
/// cycles by adjusting the CPU's transient cycle counter rather than through
/// its return value.
pub type InstructionFn<B> = fn(&mut CPU<B>, Mode, u16) -> Result<(), MemoryError>;

/// The instruction mnemonics of the 6502/65C02.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
#[rustfmt::skip]
pub enum Mnemonic {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS,
    CLC, CLD, CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX,
    INY, JMP, JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP,
    ROL, ROR, RTI, RTS, SBC, SEC, SED, SEI, STA, STX, STY, TAX, TAY,
    TSX, TXA, TXS, TYA,
    // 65C02 only
    BRA, PHX, PHY, PLX, PLY, STZ, TRB, TSB,
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The error returned when a string names no known mnemonic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMnemonicError;

impl fmt::Display for ParseMnemonicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown instruction mnemonic")
    }
}

impl std::error::Error for ParseMnemonicError {}

impl FromStr for Mnemonic {
    type Err = ParseMnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Mnemonic::*;
        let m = match s.to_ascii_uppercase().as_str() {
            "ADC" => ADC, "AND" => AND, "ASL" => ASL, "BCC" => BCC,
            "BCS" => BCS, "BEQ" => BEQ, "BIT" => BIT, "BMI" => BMI,
            "BNE" => BNE, "BPL" => BPL, "BRA" => BRA, "BRK" => BRK,
            "BVC" => BVC, "BVS" => BVS, "CLC" => CLC, "CLD" => CLD,
            "CLI" => CLI, "CLV" => CLV, "CMP" => CMP, "CPX" => CPX,
            "CPY" => CPY, "DEC" => DEC, "DEX" => DEX, "DEY" => DEY,
            "EOR" => EOR, "INC" => INC, "INX" => INX, "INY" => INY,
            "JMP" => JMP, "JSR" => JSR, "LDA" => LDA, "LDX" => LDX,
            "LDY" => LDY, "LSR" => LSR, "NOP" => NOP, "ORA" => ORA,
            "PHA" => PHA, "PHP" => PHP, "PHX" => PHX, "PHY" => PHY,
            "PLA" => PLA, "PLP" => PLP, "PLX" => PLX, "PLY" => PLY,
            "ROL" => ROL, "ROR" => ROR, "RTI" => RTI, "RTS" => RTS,
            "SBC" => SBC, "SEC" => SEC, "SED" => SED, "SEI" => SEI,
            "STA" => STA, "STX" => STX, "STY" => STY, "STZ" => STZ,
            "TAX" => TAX, "TAY" => TAY, "TRB" => TRB, "TSB" => TSB,
            "TSX" => TSX, "TXA" => TXA, "TXS" => TXS, "TYA" => TYA,
            _ => return Err(ParseMnemonicError),
        };
        Ok(m)
    }
}

/// Returns the NMOS and CMOS implementation functions for a mnemonic.
///
/// Most mnemonics behave identically on both chips and return the same
/// function twice. The 65C02-only mnemonics have no NMOS side.
pub(crate) fn implementations<B: Bus>(
    mnemonic: Mnemonic,
) -> (Option<InstructionFn<B>>, Option<InstructionFn<B>>) {
    use Mnemonic::*;
    match mnemonic {
        ADC => (Some(adc as InstructionFn<B>), Some(adc_cmos)),
        AND => (Some(and), Some(and)),
        ASL => (Some(asl), Some(asl_cmos)),
        BCC => (Some(bcc), Some(bcc)),
        BCS => (Some(bcs), Some(bcs)),
        BEQ => (Some(beq), Some(beq)),
        BIT => (Some(bit), Some(bit)),
        BMI => (Some(bmi), Some(bmi)),
        BNE => (Some(bne), Some(bne)),
        BPL => (Some(bpl), Some(bpl)),
        BRK => (Some(brk), Some(brk)),
        BVC => (Some(bvc), Some(bvc)),
        BVS => (Some(bvs), Some(bvs)),
        CLC => (Some(clc), Some(clc)),
        CLD => (Some(cld), Some(cld)),
        CLI => (Some(cli), Some(cli)),
        CLV => (Some(clv), Some(clv)),
        CMP => (Some(cmp), Some(cmp)),
        CPX => (Some(cpx), Some(cpx)),
        CPY => (Some(cpy), Some(cpy)),
        DEC => (Some(dec), Some(dec)),
        DEX => (Some(dex), Some(dex)),
        DEY => (Some(dey), Some(dey)),
        EOR => (Some(eor), Some(eor)),
        INC => (Some(inc), Some(inc)),
        INX => (Some(inx), Some(inx)),
        INY => (Some(iny), Some(iny)),
        JMP => (Some(jmp), Some(jmp)),
        JSR => (Some(jsr), Some(jsr)),
        LDA => (Some(lda), Some(lda)),
        LDX => (Some(ldx), Some(ldx)),
        LDY => (Some(ldy), Some(ldy)),
        LSR => (Some(lsr), Some(lsr_cmos)),
        NOP => (Some(nop), Some(nop)),
        ORA => (Some(ora), Some(ora)),
        PHA => (Some(pha), Some(pha)),
        PHP => (Some(php), Some(php)),
        PLA => (Some(pla), Some(pla)),
        PLP => (Some(plp), Some(plp)),
        ROL => (Some(rol), Some(rol_cmos)),
        ROR => (Some(ror), Some(ror_cmos)),
        RTI => (Some(rti), Some(rti)),
        RTS => (Some(rts), Some(rts)),
        SBC => (Some(sbc), Some(sbc_cmos)),
        SEC => (Some(sec), Some(sec)),
        SED => (Some(sed), Some(sed)),
        SEI => (Some(sei), Some(sei)),
        STA => (Some(sta), Some(sta)),
        STX => (Some(stx), Some(stx)),
        STY => (Some(sty), Some(sty)),
        TAX => (Some(tax), Some(tax)),
        TAY => (Some(tay), Some(tay)),
        TSX => (Some(tsx), Some(tsx)),
        TXA => (Some(txa), Some(txa)),
        TXS => (Some(txs), Some(txs)),
        TYA => (Some(tya), Some(tya)),
        BRA => (None, Some(bra)),
        PHX => (None, Some(phx)),
        PHY => (None, Some(phy)),
        PLX => (None, Some(plx)),
        PLY => (None, Some(ply)),
        STZ => (None, Some(stz)),
        TRB => (None, Some(trb)),
        TSB => (None, Some(tsb)),
    }
}

// --- ALU helpers ---------------------------------------------------------

fn binary_add<B: Bus>(cpu: &mut CPU<B>, m: u8) {
    let a = cpu.registers.a;
    let carry = cpu.registers.status.carry as u32;
    let sum = a as u32 + m as u32 + carry;
    let result = sum as u8;
    cpu.registers.status.carry = sum >= 0x100;
    cpu.registers.status.overflow = (a ^ m) & 0x80 == 0 && (a ^ result) & 0x80 != 0;
    cpu.registers.a = result;
    cpu.update_zero_and_negative_flags(result);
}

fn binary_sub<B: Bus>(cpu: &mut CPU<B>, m: u8) {
    let a = cpu.registers.a;
    let carry = cpu.registers.status.carry as u32;
    let diff = 0xFF + a as u32 - m as u32 + carry;
    let result = diff as u8;
    cpu.registers.status.carry = diff >= 0x100;
    cpu.registers.status.overflow = (a ^ m) & 0x80 != 0 && (a ^ result) & 0x80 != 0;
    cpu.registers.a = result;
    cpu.update_zero_and_negative_flags(result);
}

/// Nibble-wise BCD addition. Returns the adjusted result and the carry-out.
fn decimal_add(a: u8, m: u8, carry: u8) -> (u8, bool) {
    let mut lo = (a as u32 & 0x0F) + (m as u32 & 0x0F) + carry as u32;
    let mut carry_lo = 0;
    if lo >= 0x0A {
        lo = (lo - 0x0A) & 0x0F;
        carry_lo = 0x10;
    }
    let mut hi = (a as u32 & 0xF0) + (m as u32 & 0xF0) + carry_lo;
    let carry_out = hi >= 0xA0;
    if carry_out {
        hi -= 0xA0;
    }
    (((hi & 0xF0) | lo) as u8, carry_out)
}

/// Nibble-wise BCD subtraction with the carry flag as inverted borrow.
fn decimal_sub(a: u8, m: u8, carry: u8) -> (u8, bool) {
    let mut lo = 0x0F + (a as i32 & 0x0F) - (m as i32 & 0x0F) + carry as i32;
    let carry_lo;
    if lo < 0x10 {
        lo -= 0x06;
        carry_lo = 0;
    } else {
        lo -= 0x10;
        carry_lo = 0x10;
    }
    let mut hi = 0xF0 + (a as i32 & 0xF0) - (m as i32 & 0xF0) + carry_lo;
    let carry_out;
    if hi < 0x100 {
        hi -= 0x60;
        carry_out = false;
    } else {
        hi -= 0x100;
        carry_out = true;
    }
    (((hi & 0xF0) | (lo & 0x0F)) as u8, carry_out)
}

/// The 65C02 shaves one cycle off ASL/LSR/ROL/ROR `abs,X` when the indexed
/// address stays within the base page.
fn rmw_cycle_adjust<B: Bus>(cpu: &mut CPU<B>, mode: Mode) {
    if mode == Mode::AbsoluteX && !cpu.page_crossed {
        cpu.extra_cycles -= 1;
    }
}

// --- Arithmetic ----------------------------------------------------------

/// ADC - Add with Carry (NMOS).
///
/// Adds memory and carry into the accumulator, in binary or BCD depending
/// on the D flag. In decimal mode the NMOS chip derives N, Z and V from the
/// binary sum before the decimal adjustment.
fn adc<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    if cpu.registers.status.decimal_mode {
        let a = cpu.registers.a;
        let carry = cpu.registers.status.carry as u8;
        let (result, carry_out) = decimal_add(a, m, carry);
        let binary = a.wrapping_add(m).wrapping_add(carry);
        cpu.registers.status.carry = carry_out;
        cpu.registers.status.overflow = (a ^ binary) & 0x80 != 0 && (a ^ m) & 0x80 == 0;
        cpu.update_zero_and_negative_flags(binary);
        cpu.registers.a = result;
    } else {
        binary_add(cpu, m);
    }
    Ok(())
}

/// ADC - Add with Carry (CMOS).
///
/// Identical nibble arithmetic, but N and Z come from the decimal-adjusted
/// result and the decimal path costs one extra cycle.
fn adc_cmos<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    if cpu.registers.status.decimal_mode {
        cpu.extra_cycles += 1;
        let a = cpu.registers.a;
        let carry = cpu.registers.status.carry as u8;
        let (result, carry_out) = decimal_add(a, m, carry);
        let binary = a.wrapping_add(m).wrapping_add(carry);
        cpu.registers.status.carry = carry_out;
        cpu.registers.status.overflow = (a ^ binary) & 0x80 != 0 && (a ^ m) & 0x80 == 0;
        cpu.registers.a = result;
        cpu.update_zero_and_negative_flags(result);
    } else {
        binary_add(cpu, m);
    }
    Ok(())
}

/// SBC - Subtract with Carry (NMOS).
///
/// Subtracts memory and borrow from the accumulator; the carry flag is the
/// inverted borrow. In decimal mode N, Z and V come from the binary
/// difference, as on NMOS silicon.
fn sbc<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    if cpu.registers.status.decimal_mode {
        let a = cpu.registers.a;
        let carry = cpu.registers.status.carry as u8;
        let (result, carry_out) = decimal_sub(a, m, carry);
        let binary = (0xFF + a as u32 - m as u32 + carry as u32) as u8;
        cpu.registers.status.carry = carry_out;
        cpu.registers.status.overflow = (a ^ m) & 0x80 != 0 && (a ^ binary) & 0x80 != 0;
        cpu.update_zero_and_negative_flags(binary);
        cpu.registers.a = result;
    } else {
        binary_sub(cpu, m);
    }
    Ok(())
}

/// SBC - Subtract with Carry (CMOS).
fn sbc_cmos<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    if cpu.registers.status.decimal_mode {
        cpu.extra_cycles += 1;
        let a = cpu.registers.a;
        let carry = cpu.registers.status.carry as u8;
        let (result, carry_out) = decimal_sub(a, m, carry);
        let binary = (0xFF + a as u32 - m as u32 + carry as u32) as u8;
        cpu.registers.status.carry = carry_out;
        cpu.registers.status.overflow = (a ^ m) & 0x80 != 0 && (a ^ binary) & 0x80 != 0;
        cpu.registers.a = result;
        cpu.update_zero_and_negative_flags(result);
    } else {
        binary_sub(cpu, m);
    }
    Ok(())
}

// --- Logical -------------------------------------------------------------

/// AND - Logical AND with the accumulator.
fn and<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    cpu.registers.a &= m;
    cpu.update_zero_and_negative_flags(cpu.registers.a);
    Ok(())
}

/// EOR - Exclusive OR with the accumulator.
fn eor<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    cpu.registers.a ^= m;
    cpu.update_zero_and_negative_flags(cpu.registers.a);
    Ok(())
}

/// ORA - Logical OR with the accumulator.
fn ora<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    cpu.registers.a |= m;
    cpu.update_zero_and_negative_flags(cpu.registers.a);
    Ok(())
}

/// BIT - Bit Test.
///
/// Z is set from `A & M`; N and V are copied from bits 7 and 6 of the
/// operand. The 65C02's `BIT #imm` form updates Z only.
fn bit<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    cpu.registers.status.zero = cpu.registers.a & m == 0;
    if mode != Mode::Immediate {
        cpu.registers.status.negative = m & 0x80 != 0;
        cpu.registers.status.overflow = m & 0x40 != 0;
    }
    Ok(())
}

/// TRB - Test and Reset Bits (65C02).
fn trb<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    cpu.registers.status.zero = cpu.registers.a & m == 0;
    let value = m & !cpu.registers.a;
    store(cpu, mode, operand, value)
}

/// TSB - Test and Set Bits (65C02).
fn tsb<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    cpu.registers.status.zero = cpu.registers.a & m == 0;
    let value = m | cpu.registers.a;
    store(cpu, mode, operand, value)
}

// --- Shifts and rotates --------------------------------------------------

/// ASL - Arithmetic Shift Left on the accumulator or memory.
fn asl<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    let result = m << 1;
    cpu.registers.status.carry = m & 0x80 != 0;
    store(cpu, mode, operand, result)?;
    cpu.update_zero_and_negative_flags(result);
    Ok(())
}

fn asl_cmos<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    asl(cpu, mode, operand)?;
    rmw_cycle_adjust(cpu, mode);
    Ok(())
}

/// LSR - Logical Shift Right on the accumulator or memory.
fn lsr<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    let result = m >> 1;
    cpu.registers.status.carry = m & 0x01 != 0;
    store(cpu, mode, operand, result)?;
    cpu.update_zero_and_negative_flags(result);
    Ok(())
}

fn lsr_cmos<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    lsr(cpu, mode, operand)?;
    rmw_cycle_adjust(cpu, mode);
    Ok(())
}

/// ROL - Rotate Left through the carry flag.
fn rol<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    let result = (m << 1) | cpu.registers.status.carry as u8;
    cpu.registers.status.carry = m & 0x80 != 0;
    store(cpu, mode, operand, result)?;
    cpu.update_zero_and_negative_flags(result);
    Ok(())
}

fn rol_cmos<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    rol(cpu, mode, operand)?;
    rmw_cycle_adjust(cpu, mode);
    Ok(())
}

/// ROR - Rotate Right through the carry flag.
fn ror<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    let result = (m >> 1) | ((cpu.registers.status.carry as u8) << 7);
    cpu.registers.status.carry = m & 0x01 != 0;
    store(cpu, mode, operand, result)?;
    cpu.update_zero_and_negative_flags(result);
    Ok(())
}

fn ror_cmos<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    ror(cpu, mode, operand)?;
    rmw_cycle_adjust(cpu, mode);
    Ok(())
}

// --- Compares ------------------------------------------------------------

fn compare<B: Bus>(cpu: &mut CPU<B>, reg: u8, m: u8) {
    let result = reg.wrapping_sub(m);
    cpu.registers.status.carry = reg >= m;
    cpu.update_zero_and_negative_flags(result);
}

/// CMP - Compare the accumulator with memory.
fn cmp<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    let reg = cpu.registers.a;
    compare(cpu, reg, m);
    Ok(())
}

/// CPX - Compare the X register with memory.
fn cpx<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    let reg = cpu.registers.x;
    compare(cpu, reg, m);
    Ok(())
}

/// CPY - Compare the Y register with memory.
fn cpy<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let m = load(cpu, mode, operand)?;
    let reg = cpu.registers.y;
    compare(cpu, reg, m);
    Ok(())
}

// --- Increment / decrement -----------------------------------------------

/// INC - Increment memory (or, on the 65C02, the accumulator).
fn inc<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let result = load(cpu, mode, operand)?.wrapping_add(1);
    store(cpu, mode, operand, result)?;
    cpu.update_zero_and_negative_flags(result);
    Ok(())
}

/// DEC - Decrement memory (or, on the 65C02, the accumulator).
fn dec<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let result = load(cpu, mode, operand)?.wrapping_sub(1);
    store(cpu, mode, operand, result)?;
    cpu.update_zero_and_negative_flags(result);
    Ok(())
}

/// INX - Increment the X register.
fn inx<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.x = cpu.registers.x.wrapping_add(1);
    cpu.update_zero_and_negative_flags(cpu.registers.x);
    Ok(())
}

/// INY - Increment the Y register.
fn iny<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.y = cpu.registers.y.wrapping_add(1);
    cpu.update_zero_and_negative_flags(cpu.registers.y);
    Ok(())
}

/// DEX - Decrement the X register.
fn dex<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.x = cpu.registers.x.wrapping_sub(1);
    cpu.update_zero_and_negative_flags(cpu.registers.x);
    Ok(())
}

/// DEY - Decrement the Y register.
fn dey<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.y = cpu.registers.y.wrapping_sub(1);
    cpu.update_zero_and_negative_flags(cpu.registers.y);
    Ok(())
}

// --- Loads and stores ----------------------------------------------------

/// LDA - Load the accumulator.
fn lda<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    cpu.registers.a = load(cpu, mode, operand)?;
    cpu.update_zero_and_negative_flags(cpu.registers.a);
    Ok(())
}

/// LDX - Load the X register.
fn ldx<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    cpu.registers.x = load(cpu, mode, operand)?;
    cpu.update_zero_and_negative_flags(cpu.registers.x);
    Ok(())
}

/// LDY - Load the Y register.
fn ldy<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    cpu.registers.y = load(cpu, mode, operand)?;
    cpu.update_zero_and_negative_flags(cpu.registers.y);
    Ok(())
}

/// STA - Store the accumulator. No flag effect.
fn sta<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let value = cpu.registers.a;
    store(cpu, mode, operand, value)
}

/// STX - Store the X register. No flag effect.
fn stx<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let value = cpu.registers.x;
    store(cpu, mode, operand, value)
}

/// STY - Store the Y register. No flag effect.
fn sty<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let value = cpu.registers.y;
    store(cpu, mode, operand, value)
}

/// STZ - Store zero (65C02). No flag effect.
fn stz<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    store(cpu, mode, operand, 0)
}

// --- Transfers -----------------------------------------------------------

/// TAX - Transfer the accumulator to X.
fn tax<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.x = cpu.registers.a;
    cpu.update_zero_and_negative_flags(cpu.registers.x);
    Ok(())
}

/// TAY - Transfer the accumulator to Y.
fn tay<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.y = cpu.registers.a;
    cpu.update_zero_and_negative_flags(cpu.registers.y);
    Ok(())
}

/// TSX - Transfer the stack pointer to X.
fn tsx<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.x = cpu.registers.sp;
    cpu.update_zero_and_negative_flags(cpu.registers.x);
    Ok(())
}

/// TXA - Transfer X to the accumulator.
fn txa<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.a = cpu.registers.x;
    cpu.update_zero_and_negative_flags(cpu.registers.a);
    Ok(())
}

/// TXS - Transfer X to the stack pointer. The only transfer with no flag
/// effect.
fn txs<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.sp = cpu.registers.x;
    Ok(())
}

/// TYA - Transfer Y to the accumulator.
fn tya<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.a = cpu.registers.y;
    cpu.update_zero_and_negative_flags(cpu.registers.a);
    Ok(())
}

// --- Branches ------------------------------------------------------------

/// BCC - Branch if Carry Clear.
fn bcc<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let target = effective_address(cpu, mode, operand)?;
    if !cpu.registers.status.carry {
        cpu.branch(target);
    }
    Ok(())
}

/// BCS - Branch if Carry Set.
fn bcs<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let target = effective_address(cpu, mode, operand)?;
    if cpu.registers.status.carry {
        cpu.branch(target);
    }
    Ok(())
}

/// BEQ - Branch if Equal (zero set).
fn beq<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let target = effective_address(cpu, mode, operand)?;
    if cpu.registers.status.zero {
        cpu.branch(target);
    }
    Ok(())
}

/// BNE - Branch if Not Equal (zero clear).
fn bne<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let target = effective_address(cpu, mode, operand)?;
    if !cpu.registers.status.zero {
        cpu.branch(target);
    }
    Ok(())
}

/// BMI - Branch if Minus (negative set).
fn bmi<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let target = effective_address(cpu, mode, operand)?;
    if cpu.registers.status.negative {
        cpu.branch(target);
    }
    Ok(())
}

/// BPL - Branch if Plus (negative clear).
fn bpl<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let target = effective_address(cpu, mode, operand)?;
    if !cpu.registers.status.negative {
        cpu.branch(target);
    }
    Ok(())
}

/// BVC - Branch if Overflow Clear.
fn bvc<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let target = effective_address(cpu, mode, operand)?;
    if !cpu.registers.status.overflow {
        cpu.branch(target);
    }
    Ok(())
}

/// BVS - Branch if Overflow Set.
fn bvs<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let target = effective_address(cpu, mode, operand)?;
    if cpu.registers.status.overflow {
        cpu.branch(target);
    }
    Ok(())
}

/// BRA - Branch Always (65C02).
fn bra<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let target = effective_address(cpu, mode, operand)?;
    cpu.branch(target);
    Ok(())
}

// --- Jumps and returns ---------------------------------------------------

/// JMP - Jump to an absolute or indirect target.
fn jmp<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    cpu.registers.pc = effective_address(cpu, mode, operand)?;
    Ok(())
}

/// JSR - Jump to Subroutine.
///
/// Pushes the address of the instruction's last byte (PC minus one), high
/// byte first.
fn jsr<B: Bus>(cpu: &mut CPU<B>, mode: Mode, operand: u16) -> Result<(), MemoryError> {
    let target = effective_address(cpu, mode, operand)?;
    let ret = cpu.registers.pc.wrapping_sub(1);
    cpu.push((ret >> 8) as u8)?;
    cpu.push(ret as u8)?;
    cpu.registers.pc = target;
    Ok(())
}

/// RTS - Return from Subroutine. Pops the return address and adds one.
fn rts<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    let lo = cpu.pop()?;
    let hi = cpu.pop()?;
    cpu.registers.pc = u16::from_le_bytes([lo, hi]).wrapping_add(1);
    Ok(())
}

/// RTI - Return from Interrupt. Pops P, then PC; PC is used as popped.
fn rti<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    let status = cpu.pop()?;
    cpu.registers.restore_ps(status);
    let lo = cpu.pop()?;
    let hi = cpu.pop()?;
    cpu.registers.pc = u16::from_le_bytes([lo, hi]);
    Ok(())
}

/// BRK - Force Interrupt.
///
/// Skips the padding byte after the opcode and runs the IRQ sequence with
/// the B flag set in the pushed status.
fn brk<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.pc = cpu.registers.pc.wrapping_add(1);
    cpu.interrupt(IRQ_VECTOR, true)
}

// --- Stack ---------------------------------------------------------------

/// PHA - Push the accumulator.
fn pha<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.push(cpu.registers.a)
}

/// PHP - Push the status register with B and bit 5 set.
fn php<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    let status = cpu.registers.save_ps(true);
    cpu.push(status)
}

/// PLA - Pull the accumulator; updates N and Z.
fn pla<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.a = cpu.pop()?;
    cpu.update_zero_and_negative_flags(cpu.registers.a);
    Ok(())
}

/// PLP - Pull the status register; the B bit is discarded.
fn plp<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    let status = cpu.pop()?;
    cpu.registers.restore_ps(status);
    Ok(())
}

/// PHX - Push the X register (65C02).
fn phx<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.push(cpu.registers.x)
}

/// PHY - Push the Y register (65C02).
fn phy<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.push(cpu.registers.y)
}

/// PLX - Pull the X register (65C02); updates N and Z.
fn plx<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.x = cpu.pop()?;
    cpu.update_zero_and_negative_flags(cpu.registers.x);
    Ok(())
}

/// PLY - Pull the Y register (65C02); updates N and Z.
fn ply<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.y = cpu.pop()?;
    cpu.update_zero_and_negative_flags(cpu.registers.y);
    Ok(())
}

// --- Flag operations -----------------------------------------------------

/// CLC - Clear the carry flag.
fn clc<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.status.carry = false;
    Ok(())
}

/// CLD - Clear the decimal mode flag.
fn cld<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.status.decimal_mode = false;
    Ok(())
}

/// CLI - Clear the interrupt disable flag.
fn cli<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.status.interrupt_disable = false;
    Ok(())
}

/// CLV - Clear the overflow flag.
fn clv<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.status.overflow = false;
    Ok(())
}

/// SEC - Set the carry flag.
fn sec<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.status.carry = true;
    Ok(())
}

/// SED - Set the decimal mode flag.
fn sed<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.status.decimal_mode = true;
    Ok(())
}

/// SEI - Set the interrupt disable flag.
fn sei<B: Bus>(cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    cpu.registers.status.interrupt_disable = true;
    Ok(())
}

/// NOP - No Operation.
fn nop<B: Bus>(_cpu: &mut CPU<B>, _mode: Mode, _operand: u16) -> Result<(), MemoryError> {
    Ok(())
}
