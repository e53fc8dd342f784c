// NES CPU core - trace runner entry point
//
// Loads an iNES ROM, starts the interpreter at $C000, and prints one
// trace line per retired instruction until the halt sentinel.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use nescore::{Bus, Cartridge, Cpu};

#[derive(Parser)]
#[command(name = "nescore")]
#[command(about = "6502 interpreter producing an instruction-granular trace log")]
struct Cli {
    /// Path to the iNES ROM image to run
    #[arg(default_value = "nestest.nes")]
    rom: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cartridge = Cartridge::from_file(&cli.rom)
        .with_context(|| format!("failed to load ROM image {}", cli.rom.display()))?;

    let mut bus = Bus::new();
    bus.load_cartridge(cartridge);
    let mut cpu = Cpu::new();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    // One line per instruction, including the sentinel fetch that ends
    // the run
    loop {
        let line = cpu.trace(&bus);
        writeln!(out, "{}", line)?;
        if !cpu.step(&mut bus) {
            break;
        }
    }
    out.flush()?;

    Ok(())
}
