// Shift and rotate instructions for 6502 CPU

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// Fetch the shift operand from A or memory
    #[inline]
    fn rmw_read(&self, bus: &Bus, addr_result: &AddressingResult, accumulator: bool) -> u8 {
        if accumulator {
            self.a
        } else {
            bus.read(addr_result.address)
        }
    }

    /// Write the shifted result back to A or memory
    #[inline]
    fn rmw_write(
        &mut self,
        bus: &mut Bus,
        addr_result: &AddressingResult,
        accumulator: bool,
        value: u8,
    ) {
        if accumulator {
            self.a = value;
        } else {
            bus.write(addr_result.address, value);
        }
    }

    /// ASL - Arithmetic Shift Left
    ///
    /// C takes the old bit 7; Z and N come from the shifted value.
    ///
    /// Flags affected: C, Z, N
    pub fn asl(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        let value = self.rmw_read(bus, addr_result, accumulator);
        self.set_carry(value & 0x80 != 0);
        let result = value << 1;
        self.rmw_write(bus, addr_result, accumulator, result);
        self.update_zero_and_negative_flags(result);
    }

    /// LSR - Logical Shift Right
    ///
    /// C takes the old bit 0; the shifted value always has bit 7 clear.
    ///
    /// Flags affected: C, Z, N
    pub fn lsr(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        let value = self.rmw_read(bus, addr_result, accumulator);
        self.set_carry(value & 0x01 != 0);
        let result = value >> 1;
        self.rmw_write(bus, addr_result, accumulator, result);
        self.update_zero_and_negative_flags(result);
    }

    /// ROL - Rotate Left through Carry
    ///
    /// The old carry enters bit 0 and the old bit 7 becomes the carry.
    /// Z reflects the rotated operand, whichever location it lives in.
    ///
    /// Flags affected: C, Z, N
    pub fn rol(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        let value = self.rmw_read(bus, addr_result, accumulator);
        let carry_in = u8::from(self.get_carry());
        self.set_carry(value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        self.rmw_write(bus, addr_result, accumulator, result);
        self.update_zero_and_negative_flags(result);
    }

    /// ROR - Rotate Right through Carry
    ///
    /// The old carry enters bit 7 and the old bit 0 becomes the carry.
    ///
    /// Flags affected: C, Z, N
    pub fn ror(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        let value = self.rmw_read(bus, addr_result, accumulator);
        let carry_in = u8::from(self.get_carry()) << 7;
        self.set_carry(value & 0x01 != 0);
        let result = (value >> 1) | carry_in;
        self.rmw_write(bus, addr_result, accumulator, result);
        self.update_zero_and_negative_flags(result);
    }
}
