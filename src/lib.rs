#![cfg_attr(not(test), no_std)]

use embedded_hal::spi::SpiDevice;
use log::debug;

mod command;
pub use command::*;

mod constants;
pub use constants::*;

mod error;
pub use error::*;

mod config;
pub use config::*;

pub mod frame;

/// Represents the state of the load relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    /// The relay contact is open; the load is unpowered.
    Off,
    /// The relay contact is closed; the load is powered.
    On,
}

impl RelayState {
    /// Returns `true` if the relay is on.
    pub fn is_on(self) -> bool {
        self == RelayState::On
    }
}

impl From<bool> for RelayState {
    fn from(on: bool) -> RelayState {
        if on {
            RelayState::On
        } else {
            RelayState::Off
        }
    }
}

/// A complete set of measurements read from the peripheral in one exchange.
///
/// Constructed fresh by [`SmartPlug::read_all`] on every call; the driver
/// keeps no measurement state between operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Mains voltage in volts.
    pub voltage: f32,
    /// Load current in amperes.
    pub current: f32,
    /// Active power in watts.
    pub power: f32,
    /// Relay state at the time of the reading.
    pub relay: RelayState,
}

/// Driver for an SPI-attached power metering and relay peripheral.
///
/// Each operation performs exactly one blocking full-duplex exchange of a
/// fixed 20-byte frame and decodes the reply into a typed value. There are
/// no retries, no timeouts and no state between operations; exclusive
/// access (`&mut self`) serializes use of the bus.
///
/// # Type Parameters
///
/// * `Spi`: The SPI interface used to communicate with the peripheral.
///   It must implement `embedded_hal::spi::SpiDevice`.
pub struct SmartPlug<Spi> {
    spi: Spi,
    config: Config,
}

impl<Spi> SmartPlug<Spi>
where
    Spi: SpiDevice,
{
    /// Creates a new `SmartPlug` driver instance.
    ///
    /// # Arguments
    ///
    /// * `spi`: The SPI interface for communication with the peripheral.
    /// * `config`: The driver configuration.
    ///
    /// # Returns
    ///
    /// A new `SmartPlug` instance.
    pub fn new(spi: Spi, config: Config) -> Self {
        Self { spi, config }
    }

    /// Releases the driver, returning the SPI interface.
    pub fn release(self) -> Spi {
        self.spi
    }

    /// Reads the measured mains voltage in volts.
    pub fn read_voltage(&mut self) -> Result<f32, Error> {
        let reply = self.exchange(Command::ReadVoltage)?;
        Ok(frame::decode_f32(frame::payload(&reply), 0))
    }

    /// Reads the measured load current in amperes.
    pub fn read_current(&mut self) -> Result<f32, Error> {
        let reply = self.exchange(Command::ReadCurrent)?;
        Ok(frame::decode_f32(frame::payload(&reply), 0))
    }

    /// Reads the measured active power in watts.
    pub fn read_power(&mut self) -> Result<f32, Error> {
        let reply = self.exchange(Command::ReadPower)?;
        Ok(frame::decode_f32(frame::payload(&reply), 0))
    }

    /// Reads the current relay state without changing it.
    pub fn read_relay(&mut self) -> Result<RelayState, Error> {
        let reply = self.exchange(Command::ReadRelay)?;
        Ok(frame::decode_relay(frame::payload(&reply), 0))
    }

    /// Reads voltage, current, power and relay state in a single exchange.
    ///
    /// The peripheral packs the four fields consecutively into the payload:
    /// three 4-byte floats followed by the 1-byte relay flag, no padding.
    ///
    /// # Returns
    ///
    /// * `Ok(Measurements)` with the full measurement set.
    /// * `Err(Error)` if the exchange failed.
    pub fn read_all(&mut self) -> Result<Measurements, Error> {
        let reply = self.exchange(Command::ReadAll)?;
        let payload = frame::payload(&reply);
        Ok(Measurements {
            voltage: frame::decode_f32(payload, 0),
            current: frame::decode_f32(payload, 4),
            power: frame::decode_f32(payload, 8),
            relay: frame::decode_relay(payload, 12),
        })
    }

    /// Switches the relay on or off.
    ///
    /// On and off are disjoint commands on the wire; there is no
    /// parameterized set-state frame. The reply carries the state the
    /// peripheral actually applied, which is what this returns rather than
    /// the requested state.
    ///
    /// # Arguments
    ///
    /// * `on`: The requested relay state.
    ///
    /// # Returns
    ///
    /// * `Ok(RelayState)` with the state reported by the peripheral.
    /// * `Err(Error)` if the exchange failed.
    pub fn set_relay(&mut self, on: bool) -> Result<RelayState, Error> {
        let command = if on { Command::RelayOn } else { Command::RelayOff };
        let reply = self.exchange(command)?;
        Ok(frame::decode_relay(frame::payload(&reply), 0))
    }

    // Performs one full-duplex exchange: encode the command, clock the full
    // 20-byte frame in both directions, return the inbound frame.
    fn exchange(&mut self, command: Command) -> Result<[u8; FRAME_LEN], Error> {
        let tx = frame::encode_command(command);
        let mut rx = [0u8; FRAME_LEN];

        debug!(
            "Sending command {} ({:#04X}): {:02X?}",
            Command::describe(command.code()),
            command.code(),
            tx
        );
        self.spi.transfer(&mut rx, &tx).map_err(|_| Error::Transfer)?;

        let echoed = frame::echoed_command(&rx);
        debug!(
            "Received frame, echo {} ({:#04X}): {:02X?}",
            Command::describe(echoed),
            echoed,
            rx
        );

        if self.config.verify_echo && echoed != command.code() {
            log::error!(
                "Echo mismatch: sent {:#04X}, peripheral echoed {:#04X}",
                command.code(),
                echoed
            );
            return Err(Error::EchoMismatch {
                sent: command.code(),
                echoed,
            });
        }

        Ok(rx)
    }
}
