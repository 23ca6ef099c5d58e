// Field size bounds, shared by config validation and the setup screen
pub const FIELD_SIZE_MIN: usize = 3;
pub const FIELD_SIZE_MAX: usize = 10;

// Event loop poll interval
pub const INPUT_POLL_MS: u64 = 50;
