//! Punycode decoding implementation.

use crate::bootstring::{
    adapt_bias, decode_digit, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
};
use crate::{Error, Result};

/// Decode a Punycode ASCII string back to Unicode.
///
/// Everything before the *last* `-` is the basic segment and is copied to
/// the output verbatim; the rest is decoded as base-36 delta groups, each
/// of which inserts one code point at the position the deltas select. An
/// input with no delimiter is treated as all delta groups.
///
/// Digits are accepted case-insensitively.
///
/// # Examples
///
/// ```
/// use labelcode::{decode, Error};
///
/// assert_eq!(decode("mnchen-3ya").unwrap(), "münchen");
/// assert_eq!(decode("28j2a3ar1p").unwrap(), "こんにちは");
///
/// // '+' is not a base-36 digit
/// assert_eq!(decode("abc-+"), Err(Error::InvalidDigit('+')));
/// ```
pub fn decode(input: &str) -> Result<String> {
    if let Some(c) = input.chars().find(|c| !c.is_ascii()) {
        return Err(Error::NonAscii(c));
    }

    // Split at the last delimiter. Without one, the whole input is the
    // extended segment.
    let (basic, extended) = match input.rfind(DELIMITER) {
        Some(pos) => (&input[..pos], &input[pos + 1..]),
        None => ("", input),
    };

    let mut output: Vec<char> = basic.chars().collect();
    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut chars = extended.chars().peekable();

    while chars.peek().is_some() {
        let old_i = i;
        i = decode_varint(&mut chars, i, bias)?;

        let len = u32::try_from(output.len() + 1).map_err(|_| Error::Overflow)?;
        bias = adapt_bias(i - old_i, len, old_i == 0);

        // i was supposed to wrap around from len to 0, incrementing n each
        // time. Undo that to recover the code point and the position.
        n = n.checked_add(i / len).ok_or(Error::Overflow)?;
        i %= len;

        let c = char::from_u32(n).ok_or(Error::InvalidCodePoint(n))?;
        output.insert(i as usize, c);
        i += 1;
    }

    Ok(output.into_iter().collect())
}

/// Decode one variable-length digit group, accumulating onto `i`.
fn decode_varint(
    chars: &mut std::iter::Peekable<std::str::Chars>,
    mut i: u32,
    bias: u32,
) -> Result<u32> {
    let mut weight: u32 = 1;
    let mut k: u32 = BASE;

    loop {
        let c = chars.next().ok_or(Error::UnexpectedEnd)?;
        let digit = decode_digit(c).ok_or(Error::InvalidDigit(c))?;

        // i += digit * weight
        i = i
            .checked_add(digit.checked_mul(weight).ok_or(Error::Overflow)?)
            .ok_or(Error::Overflow)?;

        let t = threshold(k, bias);
        if digit < t {
            break;
        }

        // weight *= (BASE - t)
        weight = weight.checked_mul(BASE - t).ok_or(Error::Overflow)?;
        k = k.checked_add(BASE).ok_or(Error::Overflow)?;
    }

    Ok(i)
}
