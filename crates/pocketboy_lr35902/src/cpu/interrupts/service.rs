use super::super::{Bus, Cpu, ExecState};
use crate::{IE_ADDRESS, IF_ADDRESS};

impl Cpu {
    /// Run the interrupt entry sequence and return its cycle cost.
    ///
    /// Callers have already established that a dispatch is due (an
    /// enabled line pending with IME set, or the core parked in
    /// `InterruptPending`). IME is cleared immediately, then the current
    /// PC is pushed to the stack, and only after that is the serviced IF
    /// bit cleared and PC redirected to the interrupt vector. The whole
    /// entry is charged as a single logical instruction of 20 T-cycles.
    pub(in crate::cpu) fn service_interrupt<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.ime = false;
        self.state = ExecState::Running;

        let pc = self.regs.pc;
        let hi = (pc >> 8) as u8;
        let lo = pc as u8;

        // Push high byte of PC. This may write to $FFFF (IE) when SP was
        // 0, so the IE value used for interrupt selection must be sampled
        // *after* this write.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);

        let selection = self.select_interrupt_after_high_push(bus);

        // Push low byte of PC. Writes performed by this store (e.g. to
        // $FFFF when SP was 1) must not affect the interrupt selection
        // for the current dispatch.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);

        match selection {
            Some((index, new_if)) => {
                let vector = 0x0040 + (index as u16) * 8;
                let ie = bus.read8(IE_ADDRESS);
                log::debug!(
                    "LR35902 interrupt: idx={index} vector=0x{vector:04X} pc=0x{pc:04X} sp=0x{sp:04X} IF=0x{new_if:02X} IE=0x{ie:02X}",
                    sp = self.regs.sp,
                );
                bus.write8(IF_ADDRESS, new_if);
                self.regs.pc = vector;
            }
            None => {
                // No line remained pending after the high-byte push: the
                // dispatch is cancelled and PC falls through to $0000.
                self.regs.pc = 0x0000;
            }
        }

        20
    }
}
