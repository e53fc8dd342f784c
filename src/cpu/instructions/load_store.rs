// Load and Store instructions for 6502 CPU

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    // ========================================
    // Load Instructions
    // ========================================
    // Loads copy a byte from memory into a register and set Z and N
    // from the loaded value.

    /// LDA - Load Accumulator
    ///
    /// Flags affected: Z, N
    pub fn lda(&mut self, bus: &Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a = value;
        self.update_zero_and_negative_flags(value);
    }

    /// LDX - Load X Register
    ///
    /// Flags affected: Z, N
    pub fn ldx(&mut self, bus: &Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.x = value;
        self.update_zero_and_negative_flags(value);
    }

    /// LDY - Load Y Register
    ///
    /// Flags affected: Z, N
    pub fn ldy(&mut self, bus: &Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.y = value;
        self.update_zero_and_negative_flags(value);
    }

    // ========================================
    // Store Instructions
    // ========================================
    // Stores copy a register to memory and leave every flag untouched.

    /// STA - Store Accumulator
    pub fn sta(&self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.a);
    }

    /// STX - Store X Register
    pub fn stx(&self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.x);
    }

    /// STY - Store Y Register
    pub fn sty(&self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Load Tests
    // ========================================

    #[test]
    fn test_lda_immediate() {
        let mut cpu = Cpu::new();
        let bus = Bus::new();

        cpu.lda(&bus, &AddressingResult::immediate(0x42));
        assert_eq!(cpu.a, 0x42);
        assert!(!cpu.get_zero());
        assert!(!cpu.get_negative());
    }

    #[test]
    fn test_lda_zero_sets_z() {
        let mut cpu = Cpu::new();
        let bus = Bus::new();

        cpu.a = 0x55;
        cpu.lda(&bus, &AddressingResult::immediate(0x00));
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_zero());
        assert!(!cpu.get_negative());
    }

    #[test]
    fn test_lda_negative_sets_n() {
        let mut cpu = Cpu::new();
        let bus = Bus::new();

        cpu.lda(&bus, &AddressingResult::immediate(0x80));
        assert_eq!(cpu.a, 0x80);
        assert!(!cpu.get_zero());
        assert!(cpu.get_negative());
    }

    #[test]
    fn test_lda_from_memory() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        bus.write(0x0040, 0x37);
        cpu.lda(&bus, &AddressingResult::new(0x0040));
        assert_eq!(cpu.a, 0x37);
    }

    #[test]
    fn test_ldx_and_ldy() {
        let mut cpu = Cpu::new();
        let bus = Bus::new();

        cpu.ldx(&bus, &AddressingResult::immediate(0xFF));
        assert_eq!(cpu.x, 0xFF);
        assert!(cpu.get_negative());

        cpu.ldy(&bus, &AddressingResult::immediate(0x00));
        assert_eq!(cpu.y, 0x00);
        assert!(cpu.get_zero());
    }

    // ========================================
    // Store Tests
    // ========================================

    #[test]
    fn test_sta() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        cpu.a = 0x42;
        cpu.sta(&mut bus, &AddressingResult::new(0x0123));
        assert_eq!(bus.read(0x0123), 0x42);
    }

    #[test]
    fn test_stx_sty() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        cpu.x = 0x11;
        cpu.y = 0x22;
        cpu.stx(&mut bus, &AddressingResult::new(0x0010));
        cpu.sty(&mut bus, &AddressingResult::new(0x0011));
        assert_eq!(bus.read(0x0010), 0x11);
        assert_eq!(bus.read(0x0011), 0x22);
    }

    #[test]
    fn test_store_leaves_flags_alone() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        let before = cpu.status;
        cpu.a = 0x00;
        cpu.sta(&mut bus, &AddressingResult::new(0x0123));
        assert_eq!(cpu.status, before);
    }
}
