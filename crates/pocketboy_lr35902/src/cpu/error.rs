use thiserror::Error;

/// Fatal faults raised by the dispatch engine.
///
/// None of these are recoverable inside the core: the faulting `step`
/// latches the lock, and every later `step` reports [`CpuError::Locked`]
/// until the driver calls `reset`. The driver decides whether to halt the
/// whole system or report and exit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// One of the eleven opcode holes ($D3, $DB, $DD, $E3, $E4, $EB, $EC,
    /// $ED, $F4, $FC, $FD). Executing these hard-locks the CPU on real
    /// hardware.
    #[error("illegal opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    /// A byte that should have a definition but dispatch failed to claim.
    /// This is a bug in the decode tables, not a legitimate emulated
    /// condition; it is reported instead of silently continuing so that
    /// execution traces stay debuggable.
    #[error("unrecognized opcode 0x{opcode:02X} at PC=0x{pc:04X} (decode table gap)")]
    UnrecognizedOpcode { opcode: u8, pc: u16 },

    /// The core already faulted and refuses to execute until reset.
    #[error("CPU is locked after a fatal fault; reset required")]
    Locked,
}
