// FRAME_LEN is the fixed size of every full-duplex exchange. The peripheral
// clocks exactly this many bytes per transaction, regardless of how much
// payload the command logically returns.
pub const FRAME_LEN: usize = 20;

// COMMAND_OFFSET is the position of the command code in the outbound frame.
pub const COMMAND_OFFSET: usize = 0;

// ECHO_OFFSET is the position in the inbound frame where the peripheral
// echoes back the command code it is answering.
pub const ECHO_OFFSET: usize = 2;

// PAYLOAD_OFFSET is the position in the inbound frame where the response
// payload starts.
pub const PAYLOAD_OFFSET: usize = 3;

// PAYLOAD_LEN is the number of usable payload bytes in an inbound frame.
pub const PAYLOAD_LEN: usize = FRAME_LEN - PAYLOAD_OFFSET;
