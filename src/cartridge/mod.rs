// Cartridge module - iNES ROM loading
//
// Parses the 16-byte iNES header and keeps the PRG and CHR pages in memory.
// Only the NROM layout is supported: one or two 16KB PRG pages, no bank
// switching. The CPU bus maps PRG page 0 at $8000 ("low bank") and the last
// PRG page at $C000 ("high bank"); a single-page image aliases both banks.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Size of one PRG ROM page in bytes (16KB)
pub const PRG_PAGE_SIZE: usize = 16 * 1024;

/// Size of one CHR ROM page in bytes (8KB)
pub const CHR_PAGE_SIZE: usize = 8 * 1024;

/// Length of the iNES header
const HEADER_SIZE: usize = 16;

/// Errors that can occur while loading a cartridge
#[derive(Debug)]
pub enum CartridgeError {
    /// I/O error reading the ROM file
    Io(io::Error),

    /// The image is structurally unusable
    BadImage(String),
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartridgeError::Io(e) => write!(f, "I/O error: {}", e),
            CartridgeError::BadImage(msg) => write!(f, "bad ROM image: {}", msg),
        }
    }
}

impl std::error::Error for CartridgeError {}

impl From<io::Error> for CartridgeError {
    fn from(e: io::Error) -> Self {
        CartridgeError::Io(e)
    }
}

/// A loaded NROM cartridge
pub struct Cartridge {
    /// PRG ROM data, `prg_page_count` pages of 16KB each
    prg_rom: Vec<u8>,

    /// Number of 16KB PRG pages (header byte 4)
    prg_page_count: usize,

    /// CHR ROM data (header byte 5 pages of 8KB each; may be empty)
    chr_rom: Vec<u8>,
}

impl Cartridge {
    /// Load a cartridge from an iNES file on disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Load a cartridge from an in-memory iNES image
    ///
    /// Header byte 4 is the PRG page count and byte 5 the CHR page count;
    /// the mapper nibbles in bytes 6 and 7 are ignored. Trainers are not
    /// supported.
    pub fn from_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        if data.len() < HEADER_SIZE {
            return Err(CartridgeError::BadImage(format!(
                "{} bytes is too short for an iNES header",
                data.len()
            )));
        }

        let prg_page_count = data[4] as usize;
        let chr_page_count = data[5] as usize;

        if prg_page_count == 0 {
            return Err(CartridgeError::BadImage(
                "image declares zero PRG pages".to_string(),
            ));
        }

        let prg_size = prg_page_count * PRG_PAGE_SIZE;
        let chr_size = chr_page_count * CHR_PAGE_SIZE;

        if data.len() < HEADER_SIZE + prg_size + chr_size {
            return Err(CartridgeError::BadImage(format!(
                "image truncated: header declares {} PRG and {} CHR pages",
                prg_page_count, chr_page_count
            )));
        }

        let prg_rom = data[HEADER_SIZE..HEADER_SIZE + prg_size].to_vec();
        let chr_rom = data[HEADER_SIZE + prg_size..HEADER_SIZE + prg_size + chr_size].to_vec();

        Ok(Cartridge {
            prg_rom,
            prg_page_count,
            chr_rom,
        })
    }

    /// Read a byte from PRG page 0 (the low bank at $8000-$BFFF)
    #[inline]
    pub fn prg_low(&self, offset: u16) -> u8 {
        self.prg_rom[offset as usize]
    }

    /// Read a byte from the last PRG page (the high bank at $C000-$FFFF)
    ///
    /// With a single PRG page this is the same page as the low bank.
    #[inline]
    pub fn prg_high(&self, offset: u16) -> u8 {
        self.prg_rom[(self.prg_page_count - 1) * PRG_PAGE_SIZE + offset as usize]
    }

    /// Read a byte of CHR data
    #[inline]
    pub fn chr(&self, offset: u16) -> u8 {
        self.chr_rom[offset as usize]
    }

    /// Number of 16KB PRG pages in the image
    pub fn prg_page_count(&self) -> usize {
        self.prg_page_count
    }

    /// Number of bytes of CHR data in the image
    pub fn chr_len(&self) -> usize {
        self.chr_rom.len()
    }
}
