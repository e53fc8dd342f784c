// Common test utilities for ROM-based integration tests
//
// Builds in-memory iNES images and boots the interpreter on them so the
// test suites never need ROM files on disk.

#![allow(dead_code)]

use nescore::cartridge::PRG_PAGE_SIZE;
use nescore::{Bus, Cartridge, Cpu};

/// Build a single-PRG-page iNES image with `program` at the start of the
/// page
///
/// A single page maps into both banks, so the program is visible at $8000
/// and at $C000 where execution begins.
pub fn image_with_program(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 16 + PRG_PAGE_SIZE];
    rom[0..4].copy_from_slice(b"NES\x1A");
    rom[4] = 1; // one PRG page
    rom[5] = 0; // no CHR
    rom[16..16 + program.len()].copy_from_slice(program);
    rom
}

/// Boot a CPU and bus with the given program mapped at $C000
pub fn boot(program: &[u8]) -> (Cpu, Bus) {
    let cartridge =
        Cartridge::from_bytes(&image_with_program(program)).expect("test image is well-formed");
    let mut bus = Bus::new();
    bus.load_cartridge(cartridge);
    (Cpu::new(), bus)
}

/// Run until the halt sentinel, collecting one trace line per iteration
///
/// Panics if the program has not halted after `max_instructions` steps.
pub fn run_to_halt(cpu: &mut Cpu, bus: &mut Bus, max_instructions: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for _ in 0..=max_instructions {
        lines.push(cpu.trace(bus));
        if !cpu.step(bus) {
            return lines;
        }
    }
    panic!("program did not halt within {} instructions", max_instructions);
}
