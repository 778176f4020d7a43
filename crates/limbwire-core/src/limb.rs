//! Conversion between 256-bit integers and four 64-bit limbs.
//!
//! A value is rendered as 64 big-endian hex digits and cut into four
//! 16-digit groups. The most significant group lands in `part4`, the least
//! significant in `part1`:
//!
//! ```text
//! digits  [0, 16)   [16, 32)  [32, 48)  [48, 64)
//! limb     part4     part3     part2     part1
//! ```
//!
//! Decoding comes in two flavours, see [`LimbDecoding`].

use primitive_types::{U256, U512};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of bytes covered by a single limb.
pub const LIMB_BYTES: usize = 8;

/// Number of hex digits in a fully padded 256-bit value.
pub const HEX_DIGITS: usize = 64;

/// Four 64-bit limbs of a 256-bit value, least significant first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Limbs {
    pub part1: u64,
    pub part2: u64,
    pub part3: u64,
    pub part4: u64,
}

impl Limbs {
    pub const ZERO: Limbs = Limbs {
        part1: 0,
        part2: 0,
        part3: 0,
        part4: 0,
    };

    /// Build limbs from optional wire fields. Absent fields read as zero.
    pub fn from_parts(
        part1: Option<u64>,
        part2: Option<u64>,
        part3: Option<u64>,
        part4: Option<u64>,
    ) -> Self {
        Self {
            part1: part1.unwrap_or_default(),
            part2: part2.unwrap_or_default(),
            part3: part3.unwrap_or_default(),
            part4: part4.unwrap_or_default(),
        }
    }

    /// Split a 32-byte big-endian buffer into limbs.
    ///
    /// Each 8-byte group is exactly one 16-digit hex group of the padded
    /// rendering, so this is the shared splitting step for both integers and
    /// opaque byte values.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let group = |i: usize| {
            let mut limb = [0u8; LIMB_BYTES];
            limb.copy_from_slice(&bytes[i * LIMB_BYTES..(i + 1) * LIMB_BYTES]);
            u64::from_be_bytes(limb)
        };

        Self {
            part4: group(0),
            part3: group(1),
            part2: group(2),
            part1: group(3),
        }
    }

    /// Concatenate the limbs back into 32 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (i, limb) in [self.part4, self.part3, self.part2, self.part1].iter().enumerate() {
            bytes[i * LIMB_BYTES..(i + 1) * LIMB_BYTES].copy_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    /// The 64-digit hex string these limbs were cut from.
    pub fn to_hex(&self) -> String {
        format!(
            "{:016x}{:016x}{:016x}{:016x}",
            self.part4, self.part3, self.part2, self.part1
        )
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// How limbs are folded back into an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimbDecoding {
    /// Shift limbs by 16-bit multiples, as deployed decoders do.
    ///
    /// Only values below 2^64 survive a round trip; anything that uses
    /// `part2..part4` comes back with overlapping limbs.
    #[default]
    Legacy,
    /// Shift limbs by 64-bit multiples. The true inverse of the encoder.
    Exact,
}

impl LimbDecoding {
    pub fn decode(self, limbs: &Limbs) -> U256 {
        match self {
            LimbDecoding::Legacy => limbs_to_uint256(limbs),
            LimbDecoding::Exact => limbs_to_uint256_exact(limbs),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LimbDecoding::Legacy => "legacy",
            LimbDecoding::Exact => "exact",
        }
    }
}

/// Split a 256-bit integer into limbs.
pub fn uint256_to_limbs(value: U256) -> Limbs {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    Limbs::from_be_bytes(&bytes)
}

/// Split a wider integer, failing if it does not fit in 256 bits.
pub fn try_uint256_to_limbs(value: U512) -> Result<Limbs> {
    let narrow = U256::try_from(value).map_err(|_| Error::ValueOutOfRange {
        digits: value.bits().div_ceil(4),
    })?;
    Ok(uint256_to_limbs(narrow))
}

/// Split a numeric hex string (optional `0x`, leading zeros ignored).
pub fn numeric_hex_to_limbs(hex: &str) -> Result<Limbs> {
    let digits = hex.strip_prefix("0x").unwrap_or(hex).trim_start_matches('0');
    if digits.len() > HEX_DIGITS {
        return Err(Error::ValueOutOfRange {
            digits: digits.len(),
        });
    }
    crate::hex_value::hexbytes_to_limbs(digits)
}

/// Fold limbs into an integer using 16-bit shifts.
///
/// `(part4 << 48) | (part3 << 32) | (part2 << 16) | part1`. Wire compatible
/// with existing decoders; not the inverse of [`uint256_to_limbs`] once a
/// value reaches 2^64.
pub fn limbs_to_uint256(limbs: &Limbs) -> U256 {
    (U256::from(limbs.part4) << 48)
        | (U256::from(limbs.part3) << 32)
        | (U256::from(limbs.part2) << 16)
        | U256::from(limbs.part1)
}

/// Fold limbs into an integer using 64-bit shifts.
pub fn limbs_to_uint256_exact(limbs: &Limbs) -> U256 {
    (U256::from(limbs.part4) << 192)
        | (U256::from(limbs.part3) << 128)
        | (U256::from(limbs.part2) << 64)
        | U256::from(limbs.part1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn zero_encodes_to_zero_limbs() {
        let limbs = uint256_to_limbs(U256::zero());
        assert_eq!(limbs, Limbs::ZERO);
        assert!(limbs.is_zero());
        assert_eq!(limbs_to_uint256(&limbs), U256::zero());
    }

    #[test]
    fn groups_land_most_significant_first() {
        let value = U256::from_big_endian(&hex_literal::hex!(
            "1111111111111111 2222222222222222 3333333333333333 4444444444444444"
        ));
        let limbs = uint256_to_limbs(value);

        assert_eq!(limbs.part4, 0x1111111111111111);
        assert_eq!(limbs.part3, 0x2222222222222222);
        assert_eq!(limbs.part2, 0x3333333333333333);
        assert_eq!(limbs.part1, 0x4444444444444444);
        assert_eq!(
            limbs.to_hex(),
            "1111111111111111222222222222222233333333333333334444444444444444"
        );
    }

    #[test]
    fn legacy_round_trip_below_two_pow_64() {
        for value in [0u64, 1, 0xdead_beef, 0xffff, 0x1_0000, u64::MAX] {
            let value = U256::from(value);
            assert_eq!(limbs_to_uint256(&uint256_to_limbs(value)), value);
        }
    }

    #[test]
    fn legacy_decoding_loses_upper_limbs() {
        // 2^64 puts a single bit in part2, which legacy decoding shifts by 16
        let value = U256::one() << 64;
        let limbs = uint256_to_limbs(value);
        assert_eq!(limbs.part2, 1);

        let decoded = limbs_to_uint256(&limbs);
        assert_ne!(decoded, value);
        assert_eq!(decoded, U256::one() << 16);

        assert_ne!(limbs_to_uint256(&uint256_to_limbs(U256::MAX)), U256::MAX);
    }

    #[test]
    fn legacy_shifts_overlap() {
        let limbs = Limbs {
            part1: 1,
            part2: 1,
            part3: 1,
            part4: 1,
        };
        assert_eq!(limbs_to_uint256(&limbs), U256::from(0x0001_0001_0001_0001u64));
    }

    #[test]
    fn exact_decoding_round_trips() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let mut bytes = [0u8; 32];
            rng.fill(&mut bytes);
            let value = U256::from_big_endian(&bytes);
            let limbs = uint256_to_limbs(value);
            assert_eq!(LimbDecoding::Exact.decode(&limbs), value);
            assert_eq!(limbs.to_be_bytes(), bytes);
        }

        assert_eq!(LimbDecoding::Exact.decode(&uint256_to_limbs(U256::MAX)), U256::MAX);
    }

    #[test]
    fn wide_values_are_rejected() {
        let too_big = U512::one() << 256;
        assert!(matches!(
            try_uint256_to_limbs(too_big),
            Err(Error::ValueOutOfRange { digits: 65 })
        ));

        let max = U512::from(U256::MAX);
        assert_eq!(try_uint256_to_limbs(max).unwrap(), uint256_to_limbs(U256::MAX));
    }

    #[test]
    fn numeric_hex_ignores_leading_zeros() {
        let padded = format!("0x{}2a", "0".repeat(70));
        assert_eq!(numeric_hex_to_limbs(&padded).unwrap().part1, 0x2a);

        let wide = format!("1{}", "0".repeat(64));
        assert!(matches!(
            numeric_hex_to_limbs(&wide),
            Err(Error::ValueOutOfRange { digits: 65 })
        ));
    }

    #[test]
    fn absent_parts_default_to_zero() {
        let limbs = Limbs::from_parts(Some(5), None, None, Some(1));
        assert_eq!(limbs.part2, 0);
        assert_eq!(limbs.part3, 0);
        assert_eq!(limbs_to_uint256(&limbs), (U256::one() << 48) | U256::from(5));
    }

    #[test]
    fn decoding_serializes_lowercase() {
        let json = serde_json::to_string(&LimbDecoding::Exact).unwrap();
        assert_eq!(json, "\"exact\"");
        let back: LimbDecoding = serde_json::from_str("\"legacy\"").unwrap();
        assert_eq!(back, LimbDecoding::Legacy);
    }
}
