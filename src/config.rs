/// Configuration settings for the smart plug driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// When enabled, the command code echoed at byte 2 of every inbound
    /// frame is checked against the code that was sent, and a mismatch is
    /// reported as [`crate::Error::EchoMismatch`].
    ///
    /// Disabled by default: the peripheral's echo is informational and
    /// firmware in the field is known to answer correctly while echoing
    /// stale bytes during back-to-back exchanges.
    pub verify_echo: bool,
}

impl Config {
    /// Creates a new `Config` instance.
    pub fn new(verify_echo: bool) -> Config {
        Config { verify_echo }
    }

    /// Sets whether the echoed command byte is verified.
    ///
    /// # Returns
    ///
    /// The updated `Config` instance.
    pub fn verify_echo(mut self, verify_echo: bool) -> Self {
        self.verify_echo = verify_echo;
        self
    }
}

/// Provides default configuration values for the driver.
impl Default for Config {
    /// Returns the default configuration: echo verification disabled.
    fn default() -> Config {
        Config { verify_echo: false }
    }
}
