// ============================================================================
// Wire Codec
// Minor-unit integer tokens as they appear inside JSON payloads
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use super::money::Money;

impl Money {
    /// Decode the raw bytes of a JSON numeric token.
    ///
    /// The token is a signed count of minor units with no decimal point:
    /// the last two digits are the minor part and the digits before them are
    /// the whole part (`"123"` is 1.23, `"50"` is 0.50, `"-12345"` is -123.45).
    /// The single byte `"0"` is zero.
    ///
    /// # Errors
    /// - `Empty` for an empty token or a bare minus sign
    /// - `InvalidDigit` for anything other than an optional leading `-` and digits
    /// - `Overflow` if the whole part does not fit an i64
    pub fn decode_wire(token: &[u8]) -> MoneyResult<Self> {
        if token == b"0" {
            return Ok(Self::ZERO);
        }

        let (is_negative, digits) = match token.split_first() {
            None => return Err(MoneyError::Empty),
            Some((b'-', rest)) => (true, rest),
            Some(_) => (false, token),
        };
        if digits.is_empty() {
            return Err(MoneyError::Empty);
        }
        if let Some(pos) = digits.iter().position(|b| !b.is_ascii_digit()) {
            return Err(MoneyError::InvalidDigit {
                token: String::from_utf8_lossy(token).into_owned(),
                position: pos + usize::from(is_negative),
            });
        }

        let (whole_digits, minor_digits) = digits.split_at(digits.len().saturating_sub(2));
        let minor = minor_digits
            .iter()
            .fold(0i128, |acc, b| acc * 10 + (b - b'0') as i128);
        let whole = whole_digits
            .iter()
            .try_fold(0i128, |acc, b| {
                acc.checked_mul(10)?.checked_add((b - b'0') as i128)
            })
            .ok_or(MoneyError::Overflow)?;

        let magnitude = whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(minor))
            .ok_or(MoneyError::Overflow)?;
        let units = if is_negative { -magnitude } else { magnitude };

        Self::from_units_i128(units)
    }

    /// Encode as a wire token: a signed minor-unit integer with at least three
    /// digits (`1.23` -> `"123"`, `0.05` -> `"005"`, `-123.45` -> `"-12345"`).
    /// Zero encodes as `"0"`.
    pub fn to_wire_token(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let units = self.units_i128();
        let sign = if units < 0 { "-" } else { "" };
        format!("{}{:03}", sign, units.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(token: &str) -> MoneyResult<Money> {
        Money::decode_wire(token.as_bytes())
    }

    #[test]
    fn test_zero_token() {
        assert_eq!(decode("0").unwrap(), Money::ZERO);
        assert_eq!(decode("-0").unwrap(), Money::ZERO);
        assert_eq!(decode("000").unwrap(), Money::ZERO);
    }

    #[test]
    fn test_two_digit_token_is_all_minor() {
        let value = decode("50").unwrap();
        assert_eq!(value.whole(), 0);
        assert_eq!(value.minor(), 50);
    }

    #[test]
    fn test_three_digit_token() {
        let value = decode("123").unwrap();
        assert_eq!(value.whole(), 1);
        assert_eq!(value.minor(), 23);
    }

    #[test]
    fn test_single_nonzero_digit() {
        assert_eq!(decode("7").unwrap(), Money::new(0, 7).unwrap());
    }

    #[test]
    fn test_large_token() {
        let value = decode("1234567").unwrap();
        assert_eq!(value, Money::new(12345, 67).unwrap());
        assert_eq!(value.to_string(), "12345.67");
    }

    #[test]
    fn test_negative_tokens() {
        // -123.45 borrows from the whole part
        let value = decode("-12345").unwrap();
        assert_eq!(value, Money::new(-124, 55).unwrap());
        assert_eq!(value.to_string(), "-123.45");

        assert_eq!(decode("-50").unwrap().to_string(), "-0.50");
        assert_eq!(decode("-100").unwrap(), Money::from_whole(-1));
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(decode(""), Err(MoneyError::Empty));
        assert_eq!(decode("-"), Err(MoneyError::Empty));
        assert_eq!(
            decode("ab"),
            Err(MoneyError::InvalidDigit {
                token: "ab".to_string(),
                position: 0
            })
        );
        assert!(matches!(
            decode("12.50"),
            Err(MoneyError::InvalidDigit { position: 2, .. })
        ));
        assert!(matches!(
            decode("-1a0"),
            Err(MoneyError::InvalidDigit { position: 2, .. })
        ));
        assert!(decode("+100").is_err());
        assert!(decode("1e5").is_err());
        assert!(decode("--100").is_err());
    }

    #[test]
    fn test_malformed_is_never_zero() {
        for token in ["", "ab", "x", "1.0", " 1"] {
            let result = decode(token);
            assert!(result.is_err(), "token {:?} decoded to {:?}", token, result);
            assert!(result.unwrap_err().is_decode_error());
        }
    }

    #[test]
    fn test_overflow() {
        // i64::MAX whole units plus 99 cents still fits
        assert_eq!(decode("922337203685477580799").unwrap(), Money::MAX);
        assert_eq!(
            decode("922337203685477580800"),
            Err(MoneyError::Overflow)
        );
        assert_eq!(decode("-922337203685477580800").unwrap(), Money::MIN);
        assert_eq!(
            decode("-922337203685477580801"),
            Err(MoneyError::Overflow)
        );
        assert_eq!(
            decode("99999999999999999999999999999999999999999999"),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_wire_token_encoding() {
        assert_eq!(Money::ZERO.to_wire_token(), "0");
        assert_eq!(Money::new(1, 23).unwrap().to_wire_token(), "123");
        assert_eq!(Money::new(0, 5).unwrap().to_wire_token(), "005");
        assert_eq!(Money::new(0, 50).unwrap().to_wire_token(), "050");
        assert_eq!(Money::new(-124, 55).unwrap().to_wire_token(), "-12345");
        assert_eq!(Money::new(-1, 95).unwrap().to_wire_token(), "-005");
    }

    #[test]
    fn test_wire_round_trip() {
        for value in [
            Money::ZERO,
            Money::new(0, 1).unwrap(),
            Money::new(5, 2).unwrap(),
            Money::new(-124, 55).unwrap(),
            Money::MAX,
            Money::MIN,
        ] {
            assert_eq!(Money::decode_wire(value.to_wire_token().as_bytes()), Ok(value));
        }
    }
}
