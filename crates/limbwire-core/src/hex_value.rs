//! Opaque 32-byte values (hashes) carried in the limb layout.
//!
//! The hex digits are packed verbatim; nothing here treats them as a number.
//! Decoding goes back through the integer fold, so the legacy asymmetry
//! applies to hashes as well.

use crate::error::{Error, Result};
use crate::limb::{LimbDecoding, Limbs, HEX_DIGITS};

/// Pack a hex string into limbs.
///
/// Shorter strings are left-padded with `'0'`; the empty string packs to
/// zero. An optional `0x` prefix is accepted.
pub fn hexbytes_to_limbs(hex: &str) -> Result<Limbs> {
    let digits = hex.strip_prefix("0x").unwrap_or(hex);

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex(format!(
            "unexpected character {:?} in {:?}",
            bad, hex
        )));
    }
    if digits.len() > HEX_DIGITS {
        return Err(Error::ValueOutOfRange {
            digits: digits.len(),
        });
    }

    let padded = format!("{:0>width$}", digits, width = HEX_DIGITS);
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(&padded, &mut bytes).map_err(|e| Error::InvalidHex(e.to_string()))?;

    Ok(Limbs::from_be_bytes(&bytes))
}

/// Render limbs back as hex.
///
/// `Legacy` yields the minimal lowercase rendering of the 16-bit fold (no
/// padding, `"0"` for zero). `Exact` yields all 64 digits.
pub fn limbs_to_hexbytes(limbs: &Limbs, decoding: LimbDecoding) -> String {
    match decoding {
        LimbDecoding::Legacy => format!("{:x}", decoding.decode(limbs)),
        LimbDecoding::Exact => limbs.to_hex(),
    }
}

/// Pack a raw 32-byte digest.
pub fn bytes32_to_limbs(bytes: &[u8; 32]) -> Limbs {
    Limbs::from_be_bytes(bytes)
}

/// Unpack limbs into a raw 32-byte digest, independent of decoding mode.
pub fn limbs_to_bytes32(limbs: &Limbs) -> [u8; 32] {
    limbs.to_be_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_packs_to_zero() {
        assert_eq!(hexbytes_to_limbs("").unwrap(), Limbs::ZERO);
        assert_eq!(limbs_to_hexbytes(&Limbs::ZERO, LimbDecoding::Legacy), "0");
    }

    #[test]
    fn repeated_byte_hash() {
        let hash = "aa".repeat(32);
        let limbs = hexbytes_to_limbs(&hash).unwrap();
        assert_eq!(limbs.part1, 0xaaaa_aaaa_aaaa_aaaa);
        assert_eq!(limbs.part4, 0xaaaa_aaaa_aaaa_aaaa);

        assert_eq!(limbs_to_hexbytes(&limbs, LimbDecoding::Exact), hash);
        // overlapping 16-bit shifts fold 256 bits down to 112
        assert_eq!(limbs_to_hexbytes(&limbs, LimbDecoding::Legacy), "aa".repeat(14));
    }

    #[test]
    fn short_values_survive_legacy_decoding() {
        let limbs = hexbytes_to_limbs("68656c6c6f").unwrap();
        assert_eq!(limbs.part1, 0x68656c6c6f);
        assert_eq!(limbs.part2, 0);
        assert_eq!(limbs_to_hexbytes(&limbs, LimbDecoding::Legacy), "68656c6c6f");
    }

    #[test]
    fn prefix_and_case_are_accepted() {
        let lower = hexbytes_to_limbs("0xabcdef").unwrap();
        let upper = hexbytes_to_limbs("ABCDEF").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.part1, 0xabcdef);
    }

    #[test]
    fn rejects_non_hex() {
        assert!(matches!(hexbytes_to_limbs("zz"), Err(Error::InvalidHex(_))));
        assert!(matches!(hexbytes_to_limbs("0x 1"), Err(Error::InvalidHex(_))));
    }

    #[test]
    fn rejects_more_than_32_bytes() {
        let long = "1".repeat(65);
        assert!(matches!(
            hexbytes_to_limbs(&long),
            Err(Error::ValueOutOfRange { digits: 65 })
        ));
    }

    #[test]
    fn digest_round_trip() {
        let digest = hex_literal::hex!("290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563");
        let limbs = bytes32_to_limbs(&digest);
        assert_eq!(limbs_to_bytes32(&limbs), digest);
        assert_eq!(limbs, hexbytes_to_limbs(&hex::encode(digest)).unwrap());
    }
}
