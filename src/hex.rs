use crate::error::{FileToolsError, Result};

/// Renders each byte as exactly two lowercase hex digits, most-significant
/// nibble first. An empty slice yields an empty string.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Inverse of [`bytes_to_hex`]. Accepts upper- and lowercase digits.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(FileToolsError::InvalidHex(hex.to_string()));
    }

    let mut out = Vec::with_capacity(hex.len() / 2);
    for chunk in hex.as_bytes().chunks(2) {
        let high = hex_digit(chunk[0]).ok_or_else(|| FileToolsError::InvalidHex(hex.to_string()))?;
        let low = hex_digit(chunk[1]).ok_or_else(|| FileToolsError::InvalidHex(hex.to_string()))?;
        out.push(high << 4 | low);
    }
    Ok(out)
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_hex() {
        assert_eq!(bytes_to_hex(&[]), "");
        assert_eq!(bytes_to_hex(&[0x00]), "00");
        assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
        assert_eq!(bytes_to_hex(&[0x0f, 0xf0]), "0ff0");
    }

    #[test]
    fn test_hex_is_lowercase_and_double_length() {
        let data: Vec<u8> = (0..=255).collect();
        let hex = bytes_to_hex(&data);
        assert_eq!(hex.len(), data.len() * 2);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_round_trip() {
        let data: Vec<u8> = (0..=255).collect();
        let decoded = hex_to_bytes(&bytes_to_hex(&data)).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_hex_to_bytes_uppercase() {
        assert_eq!(hex_to_bytes("DEADBEEF").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_hex_to_bytes_rejects_invalid() {
        assert!(hex_to_bytes("abc").is_err());
        assert!(hex_to_bytes("zz").is_err());
    }
}
