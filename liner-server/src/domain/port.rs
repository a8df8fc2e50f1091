//! Port identity and location types.

use std::fmt;

/// Error returned when parsing an invalid UN/LOCODE.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid UN/LOCODE: {reason}")]
pub struct InvalidLocode {
    reason: &'static str,
}

/// A valid 5-character UN/LOCODE port code.
///
/// UN/LOCODEs are a 2-letter ISO country prefix followed by a 3-character
/// place code of uppercase letters or the digits 2-9 (e.g. "NLRTM" for
/// Rotterdam, "CNSHA" for Shanghai). This type guarantees that any `Locode`
/// value is valid by construction.
///
/// # Examples
///
/// ```
/// use liner_server::domain::Locode;
///
/// let rtm = Locode::parse("NLRTM").unwrap();
/// assert_eq!(rtm.as_str(), "NLRTM");
/// assert_eq!(rtm.country_code(), "NL");
///
/// // Lowercase is rejected
/// assert!(Locode::parse("nlrtm").is_err());
///
/// // Wrong length is rejected
/// assert!(Locode::parse("RTM").is_err());
/// assert!(Locode::parse("NLRTMX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locode([u8; 5]);

impl Locode {
    /// Parse a UN/LOCODE from a string.
    ///
    /// The input must be exactly 5 characters: 2 uppercase ASCII letters
    /// followed by 3 uppercase ASCII letters or digits 2-9.
    pub fn parse(s: &str) -> Result<Self, InvalidLocode> {
        let bytes = s.as_bytes();

        if bytes.len() != 5 {
            return Err(InvalidLocode {
                reason: "must be exactly 5 characters",
            });
        }

        for &b in &bytes[..2] {
            if !b.is_ascii_uppercase() {
                return Err(InvalidLocode {
                    reason: "country prefix must be uppercase ASCII letters A-Z",
                });
            }
        }

        for &b in &bytes[2..] {
            if !b.is_ascii_uppercase() && !(b'2'..=b'9').contains(&b) {
                return Err(InvalidLocode {
                    reason: "place code must be uppercase ASCII letters or digits 2-9",
                });
            }
        }

        Ok(Locode([bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]]))
    }

    /// Parse a UN/LOCODE, trimming whitespace and upper-casing first.
    ///
    /// Convenient for user-supplied input such as query parameters.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidLocode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the LOCODE as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII characters
        std::str::from_utf8(&self.0).unwrap()
    }

    /// Returns the 2-letter ISO country prefix.
    pub fn country_code(&self) -> &str {
        &self.as_str()[..2]
    }
}

impl fmt::Debug for Locode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Locode({})", self.as_str())
    }
}

impl fmt::Display for Locode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a port in the master-data catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortId(String);

impl PortId {
    /// Creates a port id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A physical port: the nodes of the liner network.
///
/// Immutable once referenced by a route; lifecycle owned by master data.
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    /// Catalog identifier
    pub id: PortId,
    /// Human-readable name (e.g. "Rotterdam")
    pub name: String,
    /// UN/LOCODE, globally unique, used as a display/lookup key
    pub locode: Locode,
    /// Country label for display
    pub country: String,
    /// Longitude in degrees
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
}

impl Port {
    /// Creates a new port record.
    pub fn new(
        id: PortId,
        name: impl Into<String>,
        locode: Locode,
        country: impl Into<String>,
        lon: f64,
        lat: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            locode,
            country: country.into(),
            lon,
            lat,
        }
    }

    /// Returns the coordinate pair as (longitude, latitude).
    pub fn coordinates(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid LOCODEs
    fn valid_locode_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z]{2}[A-Z2-9]{3}")
            .unwrap()
            .prop_filter("must be 5 chars", |s| s.len() == 5)
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_locode_string()) {
            let locode = Locode::parse(&s).unwrap();
            prop_assert_eq!(locode.as_str(), s.as_str());
        }

        /// Any valid LOCODE can be parsed
        #[test]
        fn valid_always_parses(s in valid_locode_string()) {
            prop_assert!(Locode::parse(&s).is_ok());
        }

        /// Lowercase strings are always rejected
        #[test]
        fn lowercase_rejected(s in "[a-z]{5}") {
            prop_assert!(Locode::parse(&s).is_err());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,4}|[A-Z]{6,10}") {
            prop_assert!(Locode::parse(&s).is_err());
        }

        /// Normalization accepts what parse accepts, modulo case and padding
        #[test]
        fn normalized_parses_lowercase(s in valid_locode_string()) {
            let lower = s.to_ascii_lowercase();
            prop_assert!(Locode::parse_normalized(&lower).is_ok());
        }
    }
}
