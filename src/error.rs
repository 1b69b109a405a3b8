#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The SPI exchange could not complete. Fatal to the in-flight
    /// operation; never retried by this crate.
    Transfer,
    /// The peripheral echoed a different command code than the one sent.
    /// Only raised when echo verification is enabled in [`crate::Config`].
    EchoMismatch {
        /// Code that was placed in the outbound frame.
        sent: u8,
        /// Code the peripheral echoed back at byte 2.
        echoed: u8,
    },
}
