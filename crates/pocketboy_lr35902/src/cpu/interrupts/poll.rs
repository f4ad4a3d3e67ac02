use super::super::{Bus, Cpu};
use crate::{IE_ADDRESS, IF_ADDRESS};

impl Cpu {
    /// Lowest-numbered pending interrupt line, regardless of IME.
    ///
    /// Priority runs VBlank > LCD STAT > Timer > Serial > Joypad, i.e.
    /// the lowest set bit of `IE & IF` wins.
    pub(in crate::cpu) fn pending_interrupt<B: Bus>(&mut self, bus: &mut B) -> Option<u8> {
        let ie = bus.read8(IE_ADDRESS);
        let iflags = bus.read8(IF_ADDRESS);
        let pending = ie & iflags & 0x1F;
        if pending == 0 {
            return None;
        }

        let index = pending.trailing_zeros();
        if index >= 5 {
            return None;
        }

        Some(index as u8)
    }

    /// Select the interrupt to dispatch *after* the high byte of PC has
    /// been pushed, but *before* the low byte is written.
    ///
    /// The high-byte push can itself land on $FFFF (when SP was 0) and
    /// rewrite IE, so the line is chosen from `IE & IF` at this point;
    /// writes performed by the low-byte push are too late to affect the
    /// current dispatch. Returns the chosen index and the IF value with
    /// that line already cleared.
    pub(in crate::cpu) fn select_interrupt_after_high_push<B: Bus>(
        &mut self,
        bus: &mut B,
    ) -> Option<(u8, u8)> {
        let ie_now = bus.read8(IE_ADDRESS);
        let if_now = bus.read8(IF_ADDRESS);
        let pending = ie_now & if_now & 0x1F;
        if pending == 0 {
            return None;
        }

        let index = pending.trailing_zeros();
        if index >= 5 {
            return None;
        }

        let new_if = if_now & !(1 << index);
        Some((index as u8, new_if))
    }
}
