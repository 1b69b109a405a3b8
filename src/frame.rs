//! Frame codec: translation between logical command/response values and the
//! fixed 20-byte wire frame.
//!
//! The frame layout is a hard-coded convention shared with the peripheral
//! firmware. There is no length field and no checksum; total frame size and
//! every offset are part of the wire contract, so they live in one place
//! (the crate's layout constants) rather than at the call sites.
//!
//! Outbound: `[0]` command code, `[1..20]` zero padding (reserved).
//! Inbound: `[0..2]` unspecified, `[2]` echoed command code, `[3..20]`
//! payload. Float payload fields are IEEE-754 single precision in the
//! peripheral's native (little-endian) byte order; a relay flag is one byte,
//! zero for off, nonzero for on.

use crate::{Command, RelayState, COMMAND_OFFSET, ECHO_OFFSET, FRAME_LEN, PAYLOAD_OFFSET};

/// Encodes a command into a complete outbound frame.
///
/// The code goes at byte 0; the remaining 19 bytes are zero. This never
/// fails: the frame is fixed-size and takes no variable-length input.
pub fn encode_command(command: Command) -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];
    frame[COMMAND_OFFSET] = command.code();
    frame
}

/// Returns the payload region of an inbound frame (bytes 3..20).
pub fn payload(frame: &[u8; FRAME_LEN]) -> &[u8] {
    &frame[PAYLOAD_OFFSET..]
}

/// Returns the command code the peripheral echoed back at byte 2.
pub fn echoed_command(frame: &[u8; FRAME_LEN]) -> u8 {
    frame[ECHO_OFFSET]
}

/// Decodes a 4-byte little-endian float at the given payload offset.
pub fn decode_f32(payload: &[u8], offset: usize) -> f32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&payload[offset..offset + 4]);
    f32::from_le_bytes(raw)
}

/// Decodes a 1-byte relay flag at the given payload offset.
pub fn decode_relay(payload: &[u8], offset: usize) -> RelayState {
    if payload[offset] == 0 {
        RelayState::Off
    } else {
        RelayState::On
    }
}
