//! Option type selector for the call/put formula branches.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::GreeksError;

/// European option type.
///
/// A closed two-variant enum. Integer codes follow the conventional
/// `Call = 1`, `Put = 2` numbering; any other code is rejected by
/// [`TryFrom<i32>`] rather than silently treated as a put.
///
/// # Examples
/// ```
/// use greeks_core::types::OptionType;
///
/// assert_eq!(OptionType::try_from(1), Ok(OptionType::Call));
/// assert_eq!(OptionType::Put.code(), 2);
/// assert!(OptionType::try_from(0).is_err());
///
/// let parsed: OptionType = "PUT".parse().unwrap();
/// assert_eq!(parsed, OptionType::Put);
/// assert_eq!(parsed.to_string(), "put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(i32)]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    Call = 1,
    /// Right to sell the underlying at the strike.
    Put = 2,
}

impl OptionType {
    /// Returns the integer code (1 for call, 2 for put).
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns `true` for [`OptionType::Call`].
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns `true` for [`OptionType::Put`].
    #[inline]
    pub fn is_put(self) -> bool {
        matches!(self, OptionType::Put)
    }
}

impl TryFrom<i32> for OptionType {
    type Error = GreeksError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(OptionType::Call),
            2 => Ok(OptionType::Put),
            _ => Err(GreeksError::InvalidOptionCode { code }),
        }
    }
}

impl FromStr for OptionType {
    type Err = GreeksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(GreeksError::UnknownOptionType {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}
