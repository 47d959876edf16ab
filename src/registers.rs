//! The `registers` module defines the CPU registers for the 6502.

use bitflags::bitflags;

bitflags! {
    /// The packed form of the processor status register.
    ///
    /// The live register file keeps one `bool` per flag; this byte layout
    /// only exists on the stack, produced by PHP/BRK/IRQ/NMI and consumed
    /// by PLP/RTI.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        /// C flag (bit 0)
        const CARRY = 1 << 0;
        /// Z flag (bit 1)
        const ZERO = 1 << 1;
        /// I flag (bit 2)
        const INTERRUPT_DISABLE = 1 << 2;
        /// D flag (bit 3)
        const DECIMAL = 1 << 3;
        /// B flag (bit 4); only ever set in pushed copies
        const BREAK = 1 << 4;
        /// Bit 5; hardwired high
        const UNUSED = 1 << 5;
        /// V flag (bit 6)
        const OVERFLOW = 1 << 6;
        /// N flag (bit 7)
        const NEGATIVE = 1 << 7;
    }
}

/// The `Registers` struct represents the 6502 CPU registers.
#[derive(Debug, Clone)]
pub struct Registers {
    /// Accumulator (A)
    pub a: u8,
    /// X register
    pub x: u8,
    /// Y register
    pub y: u8,
    /// Stack pointer; the stack lives at `$0100 + SP` and grows downward
    pub sp: u8,
    /// Program counter
    pub pc: u16,
    /// Status flags
    pub status: StatusFlags,
}

impl Registers {
    /// Creates a new `Registers` instance with power-on values.
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFF,
            pc: 0x0000,
            status: StatusFlags::new(),
        }
    }

    /// Packs the status flags into the byte layout pushed on the stack.
    ///
    /// Bit 5 is always set. Bit 4 (B) is set from `brk`: true for copies
    /// pushed by BRK and PHP, false for copies pushed by IRQ and NMI.
    pub fn save_ps(&self, brk: bool) -> u8 {
        let mut packed = Status::UNUSED;
        packed.set(Status::CARRY, self.status.carry);
        packed.set(Status::ZERO, self.status.zero);
        packed.set(Status::INTERRUPT_DISABLE, self.status.interrupt_disable);
        packed.set(Status::DECIMAL, self.status.decimal_mode);
        packed.set(Status::BREAK, brk);
        packed.set(Status::OVERFLOW, self.status.overflow);
        packed.set(Status::NEGATIVE, self.status.negative);
        packed.bits()
    }

    /// Restores the status flags from a byte popped off the stack.
    ///
    /// B and bit 5 do not exist in the physical register: the B bit is
    /// discarded and bit 5 continues to read as set, whatever the pushed
    /// copy contained.
    pub fn restore_ps(&mut self, byte: u8) {
        let packed = Status::from_bits_retain(byte);
        self.status.carry = packed.contains(Status::CARRY);
        self.status.zero = packed.contains(Status::ZERO);
        self.status.interrupt_disable = packed.contains(Status::INTERRUPT_DISABLE);
        self.status.decimal_mode = packed.contains(Status::DECIMAL);
        self.status.overflow = packed.contains(Status::OVERFLOW);
        self.status.negative = packed.contains(Status::NEGATIVE);
        self.status.break_mode = false;
        self.status.unused = true;
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

/// The `StatusFlags` struct represents the status flags for the 6502.
#[derive(Debug, Clone)]
pub struct StatusFlags {
    /// N flag (bit 7)
    pub negative: bool,
    /// V flag (bit 6)
    pub overflow: bool,
    /// U flag (bit 5)
    pub unused: bool,
    /// B flag (bit 4)
    pub break_mode: bool,
    /// D flag (bit 3)
    pub decimal_mode: bool,
    /// I flag (bit 2)
    pub interrupt_disable: bool,
    /// Z flag (bit 1)
    pub zero: bool,
    /// C flag (bit 0)
    pub carry: bool,
}

impl StatusFlags {
    /// Creates a new `StatusFlags` instance with power-on values.
    pub fn new() -> Self {
        Self {
            negative: false,
            overflow: false,
            unused: true,
            break_mode: false,
            decimal_mode: false,
            interrupt_disable: false,
            zero: false,
            carry: false,
        }
    }
}

impl Default for StatusFlags {
    fn default() -> Self {
        Self::new()
    }
}
