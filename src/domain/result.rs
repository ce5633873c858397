//! Result type alias
//!
//! Convenience alias that uses [`CdaError`] as the error type.

use super::errors::CdaError;

/// Result type alias for library operations
///
/// # Examples
///
/// ```
/// use pcehr_cda::domain::result::Result;
/// use pcehr_cda::domain::errors::CdaError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(CdaError::Other("not yet".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, CdaError>;
