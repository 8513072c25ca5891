//! Airport code types.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirport {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// Airport codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `Airport` value is valid by construction, so the search engine
/// never has to re-validate codes it is handed.
///
/// # Examples
///
/// ```
/// use flight_server::domain::Airport;
///
/// let mad = Airport::parse("MAD").unwrap();
/// assert_eq!(mad.as_str(), "MAD");
///
/// // Lowercase is rejected
/// assert!(Airport::parse("mad").is_err());
///
/// // Wrong length is rejected
/// assert!(Airport::parse("MA").is_err());
/// assert!(Airport::parse("MADR").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Airport([u8; 3]);

impl Airport {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirport> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirport {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidAirport {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Airport([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airport({})", self.as_str())
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Airport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
