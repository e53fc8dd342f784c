// NES CPU core library
// 6502 interpreter, memory bus, and iNES cartridge loading

// Public modules
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod ram;

// Re-export main types for convenience
pub use bus::Bus;
pub use cartridge::{Cartridge, CartridgeError};
pub use cpu::Cpu;
pub use ram::Ram;
