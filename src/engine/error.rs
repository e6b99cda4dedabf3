use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Input is not a finite number (empty field, non-numeric text, NaN)
    InvalidValue(String),
    UnknownUnit { category: String, unit: String },
    UnknownCategory(String),
}

impl ConversionError {
    /// Expected while the user is still typing: blank the output, report nothing
    pub fn is_blank(&self) -> bool {
        matches!(self, ConversionError::InvalidValue(_))
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidValue(raw) => write!(f, "Invalid value: '{}'", raw),
            ConversionError::UnknownUnit { category, unit } => {
                write!(f, "Unknown unit '{}' in category '{}'", unit, category)
            }
            ConversionError::UnknownCategory(key) => write!(f, "Unknown category: {}", key),
        }
    }
}

impl std::error::Error for ConversionError {}
