// Logic and bit operation instructions for 6502 CPU

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    // ========================================
    // Bitwise Instructions
    // ========================================

    /// AND - Bitwise AND with Accumulator
    ///
    /// Flags affected: Z, N
    pub fn and(&mut self, bus: &Bus, addr_result: &AddressingResult) {
        self.a &= self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// ORA - Bitwise OR with Accumulator
    ///
    /// Flags affected: Z, N
    pub fn ora(&mut self, bus: &Bus, addr_result: &AddressingResult) {
        self.a |= self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// EOR - Bitwise Exclusive OR with Accumulator
    ///
    /// Flags affected: Z, N
    pub fn eor(&mut self, bus: &Bus, addr_result: &AddressingResult) {
        self.a ^= self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// BIT - Bit Test
    ///
    /// Z is set from A AND M, while V and N copy bits 6 and 7 of the
    /// operand. The accumulator is not modified.
    ///
    /// Flags affected: Z, V, N
    pub fn bit(&mut self, bus: &Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.set_zero(self.a & value == 0);
        self.set_overflow(value & 0x40 != 0);
        self.set_negative(value & 0x80 != 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // AND/ORA/EOR Tests
    // ========================================

    #[test]
    fn test_and() {
        let mut cpu = Cpu::new();
        let bus = Bus::new();

        cpu.a = 0b1100_1100;
        cpu.and(&bus, &AddressingResult::immediate(0b1010_1010));
        assert_eq!(cpu.a, 0b1000_1000);
        assert!(cpu.get_negative());
    }

    #[test]
    fn test_and_zero_result() {
        let mut cpu = Cpu::new();
        let bus = Bus::new();

        cpu.a = 0x0F;
        cpu.and(&bus, &AddressingResult::immediate(0xF0));
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_zero());
    }

    #[test]
    fn test_ora() {
        let mut cpu = Cpu::new();
        let bus = Bus::new();

        cpu.a = 0x0F;
        cpu.ora(&bus, &AddressingResult::immediate(0xF0));
        assert_eq!(cpu.a, 0xFF);
        assert!(cpu.get_negative());
    }

    #[test]
    fn test_eor() {
        let mut cpu = Cpu::new();
        let bus = Bus::new();

        cpu.a = 0xFF;
        cpu.eor(&bus, &AddressingResult::immediate(0xFF));
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_zero());
    }

    #[test]
    fn test_logic_from_memory() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        bus.write(0x0040, 0x3C);
        cpu.a = 0xFF;
        cpu.and(&bus, &AddressingResult::new(0x0040));
        assert_eq!(cpu.a, 0x3C);
    }

    // ========================================
    // BIT Tests
    // ========================================

    #[test]
    fn test_bit_copies_high_bits() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        bus.write(0x0040, 0xC0);
        cpu.a = 0xFF;
        cpu.bit(&bus, &AddressingResult::new(0x0040));

        assert!(!cpu.get_zero());
        assert!(cpu.get_overflow());
        assert!(cpu.get_negative());
        assert_eq!(cpu.a, 0xFF, "A is untouched");
    }

    #[test]
    fn test_bit_zero_when_no_common_bits() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        bus.write(0x0040, 0x3F);
        cpu.a = 0x40;
        cpu.bit(&bus, &AddressingResult::new(0x0040));

        assert!(cpu.get_zero());
        assert!(!cpu.get_overflow(), "bit 6 of operand is clear");
        assert!(!cpu.get_negative());
    }
}
