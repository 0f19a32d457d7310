//! Result type alias for postfetch

use super::errors::PostFetchError;

/// Result type alias for postfetch operations
///
/// This is a convenience type alias that uses `PostFetchError` as the error
/// type. Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use postfetch::domain::result::Result;
/// use postfetch::domain::errors::PostFetchError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PostFetchError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PostFetchError>;
