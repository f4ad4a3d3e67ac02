use super::{Bus, Cpu};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    ///
    /// The second dispatch layer decodes the byte after the prefix as
    /// x/y/z fields: x selects rotate-shift vs BIT/RES/SET, y the family
    /// or bit index, z the operand (6 = `(HL)`). Every `(HL)` form goes
    /// through the bus for the read and, for mutating families, the write
    /// back; the register forms never touch memory.
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let cb = self.fetch8(bus);

        #[cfg(feature = "cpu-trace")]
        log::trace!(
            "PC=0x{pc:04X} op=0xCB{cb:02X} {mnemonic}",
            pc = self.regs.pc.wrapping_sub(2),
            mnemonic = super::opcodes::decode_cb(cb).mnemonic,
        );

        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;

        match x {
            0 => {
                // Rotates and shifts.
                let value = self.read_reg8(bus, z);
                // Base cycles: 8 for register, 16 for (HL).
                let cycles = if z == 6 { 16 } else { 8 };

                let result = match y {
                    0 => self.alu_rlc(value, true),
                    1 => self.alu_rrc(value, true),
                    2 => self.alu_rl(value, true),
                    3 => self.alu_rr(value, true),
                    4 => self.alu_sla(value),
                    5 => self.alu_sra(value),
                    6 => self.alu_swap(value),
                    7 => self.alu_srl(value),
                    _ => unreachable!(),
                };

                self.write_reg8(bus, z, result);
                cycles
            }
            1 => {
                // BIT b, r: flags only, operand and C untouched.
                let value = self.read_reg8(bus, z);
                self.alu_bit(y, value);

                if z == 6 { 12 } else { 8 }
            }
            2 => {
                // RES b, r
                let mut value = self.read_reg8(bus, z);
                value &= !(1 << y);
                self.write_reg8(bus, z, value);
                if z == 6 { 16 } else { 8 }
            }
            3 => {
                // SET b, r
                let mut value = self.read_reg8(bus, z);
                value |= 1 << y;
                self.write_reg8(bus, z, value);
                if z == 6 { 16 } else { 8 }
            }
            _ => unreachable!(),
        }
    }
}
