use crate::server::error::AppError;

/// Message returned whenever a group id does not identify a stored group.
pub const GROUP_NOT_FOUND: &str = "Group not found";

/// Parses a group id path segment.
///
/// A segment that is not a valid `i32` cannot identify any stored group, so it is reported
/// the same way as an unknown id.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed group id
/// - `Err(AppError::NotFound)` - Segment is not an integer
pub fn parse_group_id(value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::NotFound(GROUP_NOT_FOUND.to_string()))
}
