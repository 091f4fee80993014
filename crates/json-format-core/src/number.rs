//! Exact narrowing of JSON number text into native integers.
//!
//! Works on the decimal text rather than a float so that wide values keep
//! every digit and `3.0` is recognized as the integer `3`.

/// Why a number does not fit an integer target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narrowing {
    /// The value has a non-zero fractional part.
    Fractional,
    /// The value is integral but outside the target's range.
    OutOfRange,
}

/// Largest power-of-ten shift considered; anything beyond overflows every
/// native integer anyway.
const MAX_SCALE: i64 = 64;

/// Splits `text` into sign and integral magnitude digits (no leading zeros),
/// or reports that it is not an integer.
pub fn integral_digits(text: &str) -> Result<(bool, String), Narrowing> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };
    let (int_part, frac_part) = match mantissa.find('.') {
        Some(at) => (&mantissa[..at], &mantissa[at + 1..]),
        None => (mantissa, ""),
    };

    let mut digits: String = int_part.chars().chain(frac_part.chars()).collect();
    trim_leading_zeros(&mut digits);
    if digits == "0" {
        return Ok((false, digits));
    }

    let exponent = match exponent {
        None => 0,
        Some(e) => match e.trim_start_matches('+').parse::<i64>() {
            Ok(e) => e,
            Err(_) if e.starts_with('-') => return Err(Narrowing::Fractional),
            Err(_) => return Err(Narrowing::OutOfRange),
        },
    };
    let scale = exponent.saturating_sub(frac_part.len() as i64);

    if scale >= 0 {
        if scale > MAX_SCALE {
            return Err(Narrowing::OutOfRange);
        }
        digits.extend(std::iter::repeat('0').take(scale as usize));
    } else {
        let cut = scale.unsigned_abs() as usize;
        if cut > digits.len() || digits[digits.len() - cut..].bytes().any(|b| b != b'0') {
            return Err(Narrowing::Fractional);
        }
        digits.truncate(digits.len() - cut);
        trim_leading_zeros(&mut digits);
    }
    Ok((negative && digits != "0", digits))
}

fn trim_leading_zeros(digits: &mut String) {
    let zeros = digits.bytes().take_while(|b| *b == b'0').count();
    digits.drain(..zeros);
    if digits.is_empty() {
        digits.push('0');
    }
}

pub fn to_i128(text: &str) -> Result<i128, Narrowing> {
    let (negative, digits) = integral_digits(text)?;
    let magnitude: u128 = digits.parse().map_err(|_| Narrowing::OutOfRange)?;
    if negative {
        if magnitude == i128::MIN.unsigned_abs() {
            return Ok(i128::MIN);
        }
        i128::try_from(magnitude)
            .map(|m| -m)
            .map_err(|_| Narrowing::OutOfRange)
    } else {
        i128::try_from(magnitude).map_err(|_| Narrowing::OutOfRange)
    }
}

pub fn to_u128(text: &str) -> Result<u128, Narrowing> {
    let (negative, digits) = integral_digits(text)?;
    if negative {
        return Err(Narrowing::OutOfRange);
    }
    digits.parse().map_err(|_| Narrowing::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers() {
        assert_eq!(to_i128("0"), Ok(0));
        assert_eq!(to_i128("-0"), Ok(0));
        assert_eq!(to_i128("36"), Ok(36));
        assert_eq!(to_i128("-17"), Ok(-17));
    }

    #[test]
    fn integral_values_with_fraction_or_exponent() {
        assert_eq!(to_i128("3.0"), Ok(3));
        assert_eq!(to_i128("3.000"), Ok(3));
        assert_eq!(to_i128("1e2"), Ok(100));
        assert_eq!(to_i128("1.5e1"), Ok(15));
        assert_eq!(to_i128("300e-2"), Ok(3));
        assert_eq!(to_i128("-2.50e1"), Ok(-25));
        assert_eq!(to_i128("0.0e-5"), Ok(0));
    }

    #[test]
    fn fractional_values_are_rejected() {
        assert_eq!(to_i128("3.5"), Err(Narrowing::Fractional));
        assert_eq!(to_i128("0.1"), Err(Narrowing::Fractional));
        assert_eq!(to_i128("100e-3"), Err(Narrowing::Fractional));
        assert_eq!(to_i128("1e-99999999999999999999"), Err(Narrowing::Fractional));
    }

    #[test]
    fn range_limits() {
        assert_eq!(to_i128("170141183460469231731687303715884105727"), Ok(i128::MAX));
        assert_eq!(to_i128("-170141183460469231731687303715884105728"), Ok(i128::MIN));
        assert_eq!(
            to_i128("170141183460469231731687303715884105728"),
            Err(Narrowing::OutOfRange)
        );
        assert_eq!(to_i128("1e100"), Err(Narrowing::OutOfRange));
        assert_eq!(to_u128("-1"), Err(Narrowing::OutOfRange));
        assert_eq!(to_u128("340282366920938463463374607431768211455"), Ok(u128::MAX));
    }
}
