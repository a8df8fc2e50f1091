//! Carrier master-data types.

use std::fmt;

/// Error returned when parsing an invalid carrier code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid carrier code: {reason}")]
pub struct InvalidCarrierCode {
    reason: &'static str,
}

/// A validated carrier code of 2 to 4 uppercase ASCII letters.
///
/// Liner carriers are identified by short alpha codes in the SCAC style
/// (e.g. "MSK" for Maersk Line, "HPL" for Hapag-Lloyd).
///
/// # Examples
///
/// ```
/// use liner_server::domain::CarrierCode;
///
/// let msk = CarrierCode::parse("MSK").unwrap();
/// assert_eq!(msk.as_str(), "MSK");
///
/// // Lowercase is rejected
/// assert!(CarrierCode::parse("msk").is_err());
///
/// // Wrong length is rejected
/// assert!(CarrierCode::parse("M").is_err());
/// assert!(CarrierCode::parse("MAERSK").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarrierCode {
    bytes: [u8; 4],
    len: u8,
}

impl CarrierCode {
    /// Parse a carrier code from a string.
    ///
    /// The input must be 2 to 4 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidCarrierCode> {
        let input = s.as_bytes();

        if input.len() < 2 || input.len() > 4 {
            return Err(InvalidCarrierCode {
                reason: "must be 2 to 4 characters",
            });
        }

        for &b in input {
            if !b.is_ascii_uppercase() {
                return Err(InvalidCarrierCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        let mut bytes = [0u8; 4];
        bytes[..input.len()].copy_from_slice(input);

        Ok(CarrierCode {
            bytes,
            len: input.len() as u8,
        })
    }

    /// Returns the carrier code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap()
    }
}

impl fmt::Debug for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CarrierCode({})", self.as_str())
    }
}

impl fmt::Display for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a carrier in the master-data catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CarrierId(String);

impl CarrierId {
    /// Creates a carrier id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarrierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ocean carrier operating liner services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    /// Catalog identifier
    pub id: CarrierId,
    /// Trading name (e.g. "Maersk Line")
    pub name: String,
    /// Short alpha code
    pub code: CarrierCode,
}

impl Carrier {
    /// Creates a new carrier record.
    pub fn new(id: CarrierId, name: impl Into<String>, code: CarrierCode) -> Self {
        Self {
            id,
            name: name.into(),
            code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_carrier_codes() {
        // Real liner carrier codes
        assert!(CarrierCode::parse("MSK").is_ok()); // Maersk Line
        assert!(CarrierCode::parse("MSC").is_ok()); // MSC
        assert!(CarrierCode::parse("CMA").is_ok()); // CMA CGM
        assert!(CarrierCode::parse("HPL").is_ok()); // Hapag-Lloyd
        assert!(CarrierCode::parse("EMC").is_ok()); // Evergreen
        assert!(CarrierCode::parse("ONE").is_ok()); // Ocean Network Express

        // Edge cases
        assert!(CarrierCode::parse("AA").is_ok());
        assert!(CarrierCode::parse("ZZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(CarrierCode::parse("msk").is_err());
        assert!(CarrierCode::parse("Msk").is_err());
        assert!(CarrierCode::parse("msK").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(CarrierCode::parse("").is_err());
        assert!(CarrierCode::parse("M").is_err());
        assert!(CarrierCode::parse("MAERS").is_err());
        assert!(CarrierCode::parse("MAERSK").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(CarrierCode::parse("M1K").is_err());
        assert!(CarrierCode::parse("12").is_err());
        assert!(CarrierCode::parse("M K").is_err());
        assert!(CarrierCode::parse("M-K").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        assert_eq!(CarrierCode::parse("MSK").unwrap().as_str(), "MSK");
        assert_eq!(CarrierCode::parse("GW").unwrap().as_str(), "GW");
        assert_eq!(CarrierCode::parse("ABCD").unwrap().as_str(), "ABCD");
    }

    #[test]
    fn display_and_debug() {
        let code = CarrierCode::parse("HPL").unwrap();
        assert_eq!(format!("{}", code), "HPL");
        assert_eq!(format!("{:?}", code), "CarrierCode(HPL)");
    }

    #[test]
    fn equality_respects_length() {
        // "AB" and "ABA" must not collide despite the shared prefix
        let ab = CarrierCode::parse("AB").unwrap();
        let aba = CarrierCode::parse("ABA").unwrap();
        assert_ne!(ab, aba);
    }

    #[test]
    fn carrier_record() {
        let carrier = Carrier::new(
            CarrierId::new("maersk"),
            "Maersk Line",
            CarrierCode::parse("MSK").unwrap(),
        );

        assert_eq!(carrier.id.as_str(), "maersk");
        assert_eq!(carrier.name, "Maersk Line");
        assert_eq!(carrier.code.as_str(), "MSK");
    }
}
