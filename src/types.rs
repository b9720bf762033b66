//! Scalar parameter values used throughout this crate
use std::fmt;

/// Numeric value of a simulation constant.
///
/// The generated solver sources are C++, so the distinction between
/// integer constants (grid sizes, iteration counts) and floating point
/// constants (gas properties, step sizes) must survive formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parameter {
    /// Integer constant, e.g. number of iterations
    Int(i64),
    /// Floating point constant, e.g. `gama` or `dt`
    Float(f64),
}

impl Parameter {
    /// Format the value the way it is written into generated source,
    /// integers plain, floats with fixed six decimals.
    pub fn format(&self) -> String {
        match self {
            Self::Int(v) => format!("{}", v),
            Self::Float(v) => format!("{:.6}", v),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl From<i64> for Parameter {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Parameter {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<usize> for Parameter {
    fn from(v: usize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for Parameter {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_int() {
        assert_eq!(Parameter::from(5000).format(), "5000");
        assert_eq!(Parameter::from(-3).format(), "-3");
    }

    #[test]
    fn format_float() {
        assert_eq!(Parameter::from(1.4).format(), "1.400000");
        assert_eq!(Parameter::from(1e-1).format(), "0.100000");
        assert_eq!(Parameter::from(115.0).format(), "115.000000");
    }
}
