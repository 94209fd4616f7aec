// Numeric form of hexadecimal checksums
// Two checksums are equal when their values are equal, whatever their case or zero padding

use std::fmt;

/// Unsigned integer value of a hex string, kept as its canonical digit form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexValue(String);

impl HexValue {
    /// Parse a hex string; `None` unless it is non-empty and only hex digits
    pub fn parse(hexa: &str) -> Option<Self> {
        if hexa.is_empty() || !hexa.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let digits = hexa.trim_start_matches('0').to_ascii_lowercase();
        if digits.is_empty() {
            Some(HexValue("0".to_string()))
        } else {
            Some(HexValue(digits))
        }
    }

    /// Number of significant hex digits
    pub fn significant_digits(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for HexValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
