/// Numeric conversion helpers.
///
/// Converts identifier-shaped source text into argument indices without
/// accepting anything but plain base-10 digits.
pub mod num;
/// Text helpers shared by error reporting.
pub mod text;
