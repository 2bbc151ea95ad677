/// Error code registry for actiontime
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 5000-5999: Scenario replay errors
/// - 7000-7999: Event input errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;
    pub const CONFIG_PARSE_ERROR: u16 = 1007;

    // Scenario errors (5000-5999)
    pub const SCENARIO_GENERIC: u16 = 5000;
    pub const SCENARIO_INVALID_SYNTAX: u16 = 5001;
    pub const SCENARIO_UNKNOWN_COMMAND: u16 = 5002;
    pub const SCENARIO_EVENT_REJECTED: u16 = 5003;
    pub const SCENARIO_TASK_FAILED: u16 = 5004;

    // Event input errors (7000-7999)
    pub const INPUT_FORMAT: u16 = 7001;
    pub const INPUT_INVALID: u16 = 7002;
}

/// Get a human-readable description of an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1005 => "Invalid value in configuration",
        1007 => "Failed to parse configuration",

        // Scenario errors
        5000 => "Generic scenario error",
        5001 => "Scenario script could not be parsed",
        5002 => "Unknown command in scenario script",
        5003 => "Scenario event was rejected by the accumulator",
        5004 => "Scenario worker task failed",

        // Event input errors
        7001 => "Event payload could not be decoded",
        7002 => "Event payload failed validation",
        _ => "Unknown error code",
    }
}
