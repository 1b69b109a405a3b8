/// Command codes understood by the peripheral.
///
/// Each variant maps to the 8-bit code placed at byte 0 of the outbound
/// frame. The codes are a fixed convention shared with the peripheral
/// firmware and must not be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Read the measured mains voltage (volts).
    ReadVoltage = 0x01,
    /// Read the measured load current (amperes).
    ReadCurrent = 0x02,
    /// Read the measured active power (watts).
    ReadPower = 0x03,
    /// Read the current relay state without changing it.
    ReadRelay = 0x04,
    /// Read voltage, current, power and relay state in one exchange.
    ReadAll = 0x05,
    /// Switch the relay on.
    RelayOn = 0x06,
    /// Switch the relay off.
    RelayOff = 0x07,
}

impl Command {
    /// Returns the wire code for this command.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns a human-readable label for a wire code, for log output.
    ///
    /// Unknown codes map to `"UNKNOWN"`; this is diagnostic only and never
    /// produces a live command.
    pub const fn describe(code: u8) -> &'static str {
        match code {
            0x01 => "READ VOLTAGE",
            0x02 => "READ CURRENT",
            0x03 => "READ POWER",
            0x04 => "READ RELAY",
            0x05 => "READ ALL",
            0x06 => "SET RELAY ON",
            0x07 => "SET RELAY OFF",
            _ => "UNKNOWN",
        }
    }
}
