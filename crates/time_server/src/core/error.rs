use rmcp::ErrorData as McpError;

/// Domain errors raised by the timezone computation core.
///
/// These never cross the MCP boundary as protocol faults: the handler layer
/// renders them as error-flagged text content so callers can distinguish
/// success from failure without parsing the message.
#[derive(Debug, thiserror::Error)]
pub enum TimeServerError {
    #[error("Invalid timezone: {timezone}")]
    InvalidTimezone { timezone: String },
    #[error("Invalid time format: {time}. Expected HH:MM [24-hour format]")]
    InvalidTimeFormat { time: String },
    #[error("Ambiguous local time during DST transition: {time}")]
    AmbiguousTime { time: String },
    #[error("Nonexistent local time during DST transition: {time}")]
    NonexistentTime { time: String },
}

pub type TimeServerResult<T> = Result<T, TimeServerError>;
pub type McpResult<T> = Result<T, McpError>;
