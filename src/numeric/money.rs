// ============================================================================
// Fixed-Point Money
// Whole currency units plus a two-digit minor part with carry/borrow arithmetic
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use std::fmt;
use std::str::FromStr;

/// A currency amount stored as whole units plus hundredths.
///
/// The amount represented is always exactly `whole + minor / 100`, with
/// `minor` kept in `[0, 100)`. Negative amounts therefore borrow from the
/// whole part: `-123.45` is stored as `whole = -124, minor = 55`. This keeps
/// component-wise addition and subtraction exact for every sign.
///
/// # Example
/// ```ignore
/// use budget_view::numeric::Money;
///
/// let a = Money::new(1, 80)?;
/// let b = Money::new(0, 30)?;
/// assert_eq!(a.checked_add(b)?, Money::new(2, 10)?);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Money {
    // Field order matters: derived Ord compares whole first, then minor.
    whole: i64,
    minor: u8,
}

impl Money {
    /// Minor units in one whole unit
    pub const MINOR_PER_UNIT: u8 = 100;

    /// Zero value
    pub const ZERO: Self = Self { whole: 0, minor: 0 };

    /// Largest representable amount
    pub const MAX: Self = Self {
        whole: i64::MAX,
        minor: 99,
    };

    /// Smallest representable amount
    pub const MIN: Self = Self {
        whole: i64::MIN,
        minor: 0,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a whole/minor pair.
    ///
    /// `whole` is the floor of the amount, so `new(-123, 45)` is -122.55;
    /// -123.45 is `new(-124, 55)`.
    ///
    /// # Errors
    /// Returns `MinorOutOfRange` if `minor >= 100`.
    #[inline]
    pub fn new(whole: i64, minor: u8) -> MoneyResult<Self> {
        if minor >= Self::MINOR_PER_UNIT {
            return Err(MoneyError::MinorOutOfRange(minor));
        }
        Ok(Self { whole, minor })
    }

    /// Create a round amount with no minor part.
    #[inline]
    pub const fn from_whole(whole: i64) -> Self {
        Self { whole, minor: 0 }
    }

    /// Create from a signed count of minor units (cents).
    #[inline]
    pub const fn from_minor_units(units: i64) -> Self {
        Self {
            whole: units.div_euclid(100),
            minor: units.rem_euclid(100) as u8,
        }
    }

    /// Create from a signed minor-unit count held in an i128.
    pub(crate) fn from_units_i128(units: i128) -> MoneyResult<Self> {
        let whole = i64::try_from(units.div_euclid(100)).map_err(|_| MoneyError::Overflow)?;
        Ok(Self {
            whole,
            minor: units.rem_euclid(100) as u8,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Whole units (floor of the amount).
    #[inline]
    pub const fn whole(self) -> i64 {
        self.whole
    }

    /// Minor units, always in `[0, 100)`.
    #[inline]
    pub const fn minor(self) -> u8 {
        self.minor
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.whole == 0 && self.minor == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.whole < 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.whole > 0 || (self.whole == 0 && self.minor > 0)
    }

    /// Total amount in minor units, widened so it never overflows.
    #[inline]
    pub(crate) const fn units_i128(self) -> i128 {
        self.whole as i128 * 100 + self.minor as i128
    }

    /// Total amount in minor units.
    ///
    /// # Errors
    /// Returns `Overflow` if the amount does not fit an i64 cent count.
    pub fn to_minor_units(self) -> MoneyResult<i64> {
        self.whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(self.minor as i64))
            .ok_or(MoneyError::Overflow)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked addition with a single carry from the minor part.
    ///
    /// # Errors
    /// Returns `Overflow` if the whole part leaves the i64 range.
    pub fn checked_add(self, rhs: Self) -> MoneyResult<Self> {
        // Both minors are below 100, so the sum is below 200: at most one carry.
        let mut minor = self.minor + rhs.minor;
        let mut carry = 0i128;
        if minor >= Self::MINOR_PER_UNIT {
            minor -= Self::MINOR_PER_UNIT;
            carry = 1;
        }

        let whole = self.whole as i128 + rhs.whole as i128 + carry;
        let whole = i64::try_from(whole).map_err(|_| MoneyError::Overflow)?;
        Ok(Self { whole, minor })
    }

    /// Checked subtraction with a single borrow from the whole part.
    ///
    /// # Errors
    /// Returns `Overflow` if the whole part leaves the i64 range.
    pub fn checked_sub(self, rhs: Self) -> MoneyResult<Self> {
        let mut minor = self.minor as i16 - rhs.minor as i16;
        let mut borrow = 0i128;
        if minor < 0 {
            minor += Self::MINOR_PER_UNIT as i16;
            borrow = 1;
        }

        let whole = self.whole as i128 - rhs.whole as i128 - borrow;
        let whole = i64::try_from(whole).map_err(|_| MoneyError::Overflow)?;
        Ok(Self {
            whole,
            minor: minor as u8,
        })
    }

    /// In-place addition. On error the receiver is left unchanged.
    pub fn add_assign_checked(&mut self, rhs: Self) -> MoneyResult<()> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    /// In-place subtraction. On error the receiver is left unchanged.
    pub fn sub_assign_checked(&mut self, rhs: Self) -> MoneyResult<()> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    /// Checked negation.
    ///
    /// # Errors
    /// Returns `Overflow` for amounts whose negation does not fit.
    pub fn checked_neg(self) -> MoneyResult<Self> {
        Self::ZERO.checked_sub(self)
    }

    /// Checked absolute value.
    pub fn checked_abs(self) -> MoneyResult<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    /// Sum a sequence of amounts, stopping at the first overflow.
    pub fn checked_sum<I>(amounts: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |acc, amount| acc.checked_add(amount))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Money({}, whole={}, minor={})",
            self, self.whole, self.minor
        )
    }
}

impl fmt::Display for Money {
    /// Renders `{sign}{units}.{cents}` with the cents zero-padded to two digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.units_i128();
        let magnitude = units.unsigned_abs();
        let sign = if units < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Money {
    /// Serialized as the display form so amounts stay exact in JSON output.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Money {
    /// Convert to rust_decimal::Decimal with a scale of 2.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        // |units| < 2^70, well inside the 96-bit mantissa.
        rust_decimal::Decimal::from_i128_with_scale(self.units_i128(), 2)
    }

    /// Convert from rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the value has non-zero digits below the cent
    /// - `Overflow` if the whole part does not fit an i64
    pub fn from_decimal(d: rust_decimal::Decimal) -> MoneyResult<Self> {
        let d = d.normalize();
        let scale = d.scale();
        if scale > 2 {
            return Err(MoneyError::PrecisionLoss);
        }

        let units = d.mantissa() * 10i128.pow(2 - scale);
        Self::from_units_i128(units)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Money {
    type Err = MoneyError;

    /// Parse the display form.
    ///
    /// # Examples
    /// - "5.02" -> 5.02
    /// - "5.2" -> 5.20
    /// - "-0.5" -> -0.50
    /// - "42" -> 42.00
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid_at = |position: usize| MoneyError::InvalidDigit {
            token: trimmed.to_string(),
            position,
        };

        let (is_negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let offset = usize::from(is_negative);

        let (int_str, frac_str) = match body.find('.') {
            Some(pos) => (&body[..pos], Some((pos, &body[pos + 1..]))),
            None => (body, None),
        };

        if int_str.is_empty() && frac_str.is_none() {
            return Err(MoneyError::Empty);
        }
        if int_str.is_empty() {
            return Err(invalid_at(offset));
        }
        if let Some(pos) = int_str.bytes().position(|b| !b.is_ascii_digit()) {
            return Err(invalid_at(offset + pos));
        }

        let mut units: i128 = 0;
        for b in int_str.bytes() {
            units = units
                .checked_mul(10)
                .and_then(|u| u.checked_add((b - b'0') as i128))
                .ok_or(MoneyError::Overflow)?;
        }
        units = units.checked_mul(100).ok_or(MoneyError::Overflow)?;

        if let Some((dot, frac)) = frac_str {
            let frac_offset = offset + dot + 1;
            if frac.is_empty() {
                return Err(invalid_at(frac_offset));
            }
            if let Some(pos) = frac.bytes().position(|b| !b.is_ascii_digit()) {
                return Err(invalid_at(frac_offset + pos));
            }
            if frac.len() > 2 {
                return Err(MoneyError::PrecisionLoss);
            }
            // Right-pad: "5.2" means 5.20
            let cents = frac
                .bytes()
                .chain(std::iter::repeat(b'0'))
                .take(2)
                .fold(0i128, |acc, b| acc * 10 + (b - b'0') as i128);
            units += cents;
        }

        if is_negative {
            units = -units;
        }
        Self::from_units_i128(units)
    }
}

// ============================================================================
// Tests
// ============================================================================
