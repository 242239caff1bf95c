//! Exact decimal expansion of binary floating-point values.
//!
//! Every finite `f64` is `mantissa * 2^exp` for some 53-bit mantissa, so its
//! decimal expansion is an exact rational with a power-of-two denominator.
//! Working on that rational with big integers gives correctly-rounded digits
//! at any precision, with ties broken to even. The rest of the crate never
//! rounds through the binary value itself.

use num_bigint::BigUint;
use std::cmp::Ordering;

/// A finite float split into sign, integer mantissa, and binary exponent,
/// such that the magnitude equals `mantissa * 2^exp`.
pub(crate) struct Decomposed {
    pub neg: bool,
    pub mantissa: u64,
    pub exp: i32,
}

pub(crate) fn decompose(x: f64) -> Decomposed {
    let bits = x.to_bits();
    let neg = bits >> 63 == 1;
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let frac = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if biased == 0 {
        // Subnormal
        (frac, -1074)
    } else {
        (frac | (1 << 52), biased - 1075)
    };
    Decomposed { neg, mantissa, exp }
}

/// The magnitude `mantissa * 2^exp` rounded to `precision` digits after the
/// decimal point. Returns the integer-part digits and exactly `precision`
/// fraction digits.
pub(crate) fn fixed(mantissa: u64, exp: i32, precision: usize) -> (String, String) {
    if mantissa == 0 {
        return ("0".to_string(), "0".repeat(precision));
    }
    let (num, den) = to_ratio(mantissa, exp);
    let scaled = num * pow10(precision as u32);
    let q = div_round_half_even(&scaled, &den);
    let digits = q.to_string();
    if precision == 0 {
        return (digits, String::new());
    }
    if digits.len() <= precision {
        ("0".to_string(), format!("{:0>precision$}", digits))
    } else {
        let split = digits.len() - precision;
        (digits[..split].to_string(), digits[split..].to_string())
    }
}

/// The magnitude as scientific-notation digits: `precision + 1` significand
/// digits (the first sits before the decimal point) and the decimal exponent.
pub(crate) fn scientific(mantissa: u64, exp: i32, precision: usize) -> (String, i32) {
    if mantissa == 0 {
        return ("0".repeat(precision + 1), 0);
    }
    let (num, den) = to_ratio(mantissa, exp);

    // Decimal exponent: the unique e10 with 10^e10 <= magnitude < 10^(e10+1).
    let e10 = if num >= den {
        let int_part = &num / &den;
        int_part.to_string().len() as i32 - 1
    } else {
        let mut k = 0i32;
        let mut scaled = num.clone();
        while scaled < den {
            scaled *= 10u32;
            k += 1;
        }
        -k
    };

    let shift = precision as i32 - e10;
    let (num, den) = if shift >= 0 {
        (num * pow10(shift as u32), den)
    } else {
        (num, den * pow10((-shift) as u32))
    };
    let significand = div_round_half_even(&num, &den);

    // Rounding can carry into an extra digit (9.99... -> 10.0...).
    let limit = pow10(precision as u32 + 1);
    if significand >= limit {
        let mut digits = String::with_capacity(precision + 1);
        digits.push('1');
        digits.push_str(&"0".repeat(precision));
        return (digits, e10 + 1);
    }
    let digits = significand.to_string();
    debug_assert_eq!(digits.len(), precision + 1);
    (digits, e10)
}

fn to_ratio(mantissa: u64, exp: i32) -> (BigUint, BigUint) {
    if exp >= 0 {
        (BigUint::from(mantissa) << exp as usize, BigUint::from(1u8))
    } else {
        (BigUint::from(mantissa), BigUint::from(1u8) << (-exp) as usize)
    }
}

fn pow10(k: u32) -> BigUint {
    BigUint::from(10u8).pow(k)
}

fn div_round_half_even(num: &BigUint, den: &BigUint) -> BigUint {
    let q = num / den;
    let r = num - &q * den;
    let twice = r << 1usize;
    match twice.cmp(den) {
        Ordering::Greater => q + 1u32,
        Ordering::Equal => {
            if &q % 2u32 == BigUint::from(1u8) {
                q + 1u32
            } else {
                q
            }
        }
        Ordering::Less => q,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_of(x: f64, precision: usize) -> (String, String) {
        let d = decompose(x);
        fixed(d.mantissa, d.exp, precision)
    }

    #[test]
    fn rounds_through_the_exact_binary_value() {
        // 2.675 is stored as 2.67499999..., so it rounds down.
        assert_eq!(fixed_of(2.675, 2), ("2".to_string(), "67".to_string()));
        // 2.5 is exact, and the tie goes to even.
        assert_eq!(fixed_of(2.5, 0), ("2".to_string(), String::new()));
        assert_eq!(fixed_of(0.5, 0), ("0".to_string(), String::new()));
        assert_eq!(fixed_of(1.5, 0), ("2".to_string(), String::new()));
    }

    #[test]
    fn pads_small_magnitudes() {
        assert_eq!(fixed_of(0.25, 4), ("0".to_string(), "2500".to_string()));
        assert_eq!(fixed_of(0.0, 3), ("0".to_string(), "000".to_string()));
    }

    #[test]
    fn scientific_digit_count_is_fixed() {
        let d = decompose(1234.5678);
        let (digits, exp) = scientific(d.mantissa, d.exp, 6);
        assert_eq!(digits, "1234568");
        assert_eq!(exp, 3);
    }

    #[test]
    fn scientific_carry_bumps_the_exponent() {
        let d = decompose(99999.99);
        let (digits, exp) = scientific(d.mantissa, d.exp, 4);
        assert_eq!(digits, "10000");
        assert_eq!(exp, 5);
    }

    #[test]
    fn huge_and_tiny_values_stay_exact() {
        let (int_part, frac) = fixed_of(1e300, 0);
        assert_eq!(int_part.len(), 301);
        assert!(frac.is_empty());

        let d = decompose(5e-324);
        let (_, exp) = scientific(d.mantissa, d.exp, 2);
        assert_eq!(exp, -324);
    }
}
