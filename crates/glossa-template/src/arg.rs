//! Ready-made text and number slot values.

use std::fmt;

/// A plain slot value.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Arg {
    /// Interpret a command-line word: integer, then float, then text.
    pub fn infer(word: &str) -> Self {
        if let Ok(n) = word.parse::<i64>() {
            return Self::Integer(n);
        }
        // "nan" and "inf" parse as floats; only numerals count.
        if word.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(x) = word.parse::<f64>() {
                return Self::Float(x);
            }
        }
        Self::Text(word.to_string())
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<u32> for Arg {
    fn from(n: u32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<f64> for Arg {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}
