#![warn(missing_docs)]
//! A MOS 6502 / WDC 65C02 emulation library written in Rust.
//!
//! The crate models the CPU core only: registers, the instruction set of
//! both chip variants, cycle counting and interrupt delivery. The CPU
//! connects to a bus, and your emulator can put any memory layout behind
//! it: flat RAM, a RAM/ROM map, or your own [`Bus`] implementation.
//!
//! ```
//! use mos65xx::{Arch, Ram, CPU};
//!
//! let mut ram = Ram::new();
//! ram.load(0x1000, &[0xA2, 0xEE]); // LDX #$EE
//! let mut cpu = CPU::new(Arch::Nmos, ram);
//! cpu.set_pc(0x1000);
//! cpu.step().unwrap();
//! assert_eq!(cpu.registers.x, 0xEE);
//! assert_eq!(cpu.cycles(), 2);
//! ```

pub mod addressing_modes;
pub mod bus;
pub mod cpu;
pub mod instructions;
pub mod registers;


pub use addressing_modes::Mode;
pub use bus::{Bus, MappedBus, MemoryError, Ram};
pub use cpu::{Arch, Debugger, Instruction, StepError, CPU};
pub use cpu::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use instructions::{InstructionFn, Mnemonic};
pub use registers::{Registers, Status, StatusFlags};
