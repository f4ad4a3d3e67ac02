use super::{Bus, Cpu, CpuError, ExecState};

impl Cpu {
    /// Execute a single instruction and return the number of T-cycles taken.
    ///
    /// One call is one tick of the fetch-decode-execute loop: parked
    /// states (HALT/STOP) burn a fixed 4-cycle idle step instead of
    /// fetching, a due interrupt entry replaces the instruction, and
    /// decode failures surface as [`CpuError`] with the core locked until
    /// [`Cpu::reset`].
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        if self.locked {
            // The core faulted earlier (see the opcode holes in
            // `exec_opcode`). On hardware the CPU is dead until power-off;
            // here every step keeps reporting the lock so the driver can
            // decide what to do with the machine.
            return Err(CpuError::Locked);
        }

        match self.state {
            ExecState::Stopped => {
                // STOP is a deeper low-power state than HALT. On real
                // hardware it ends when a joypad input line (P10–P13) goes
                // low; we observe that by polling P1 ($FF00) each step and
                // resuming once any of the lower four bits reads 0.
                let p1 = bus.read8(0xFF00);
                if (p1 & 0x0F) != 0x0F {
                    self.state = ExecState::Running;
                }
                return Ok(4);
            }
            ExecState::Halted => {
                if self.pending_interrupt(bus).is_some() {
                    if self.ime {
                        // Wake first, dispatch on the next step. The driver
                        // sees the intermediate state through `state()`.
                        self.state = ExecState::InterruptPending;
                    } else {
                        // An interrupt pending while IME is clear wakes the
                        // CPU without servicing it.
                        self.state = ExecState::Running;
                    }
                }
                // While halted the CPU effectively performs a NOP each step.
                return Ok(4);
            }
            ExecState::InterruptPending => {
                // The wake from HALT committed to this dispatch.
                return Ok(self.service_interrupt(bus));
            }
            ExecState::Running => {}
        }

        // A pending, enabled interrupt preempts the opcode fetch.
        if self.ime && self.pending_interrupt(bus).is_some() {
            return Ok(self.service_interrupt(bus));
        }

        let opcode = self.fetch8(bus);

        #[cfg(feature = "cpu-trace")]
        {
            // CB-prefixed instructions trace from `step_cb` instead, after
            // the second byte is known.
            if opcode != 0xCB {
                log::trace!(
                    "PC=0x{pc:04X} op=0x{opcode:02X} {mnemonic}",
                    pc = self.regs.pc.wrapping_sub(1),
                    mnemonic = super::opcodes::decode(opcode).mnemonic,
                );
            }
        }

        let cycles = self.exec_opcode(bus, opcode)?;
        self.apply_ime_delay();
        Ok(cycles)
    }
}
