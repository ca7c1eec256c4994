//! Punycode encoding implementation.

use crate::bootstring::{
    adapt_bias, encode_digit, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
};
use crate::{Error, Result};

/// Encode a Unicode string as a Punycode ASCII string.
///
/// Basic (ASCII) characters are copied to the output unchanged, in their
/// original order. If the input also contains non-ASCII characters, a `-`
/// delimiter follows the basic segment and the remaining characters are
/// represented as base-36 delta groups. An all-ASCII input is returned
/// as-is, with no delimiter.
///
/// The only failure mode is [`Error::Overflow`] on inputs long enough to
/// push the internal delta accumulator past `u32::MAX`; any realistic
/// label encodes without error.
///
/// # Examples
///
/// ```
/// use labelcode::encode;
///
/// assert_eq!(encode("münchen").unwrap(), "mnchen-3ya");
/// assert_eq!(encode("こんにちは").unwrap(), "28j2a3ar1p");
/// assert_eq!(encode("plain").unwrap(), "plain");
/// ```
pub fn encode(input: &str) -> Result<String> {
    let chars: Vec<char> = input.chars().collect();
    let total = u32::try_from(chars.len()).map_err(|_| Error::Overflow)?;

    // Basic code points are encoded as themselves, up front.
    let mut output: String = chars.iter().filter(|c| c.is_ascii()).collect();
    let basic_len = output.len() as u32;

    if basic_len == total {
        // Nothing to encode; the delimiter is only emitted when delta
        // groups follow.
        return Ok(output);
    }
    if basic_len > 0 {
        output.push(DELIMITER);
    }

    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic_len;

    while handled < total {
        // Smallest code point that still needs encoding. All code points
        // below `n` are already represented.
        let m = chars
            .iter()
            .map(|&c| c as u32)
            .filter(|&c| c >= n)
            .min()
            .expect("unhandled code points remain");

        // Advance the decoder's <n, i> state to <m, 0>.
        delta = (m - n)
            .checked_mul(handled + 1)
            .and_then(|d| d.checked_add(delta))
            .ok_or(Error::Overflow)?;
        n = m;

        for &c in &chars {
            let c = c as u32;
            if c < n {
                delta = delta.checked_add(1).ok_or(Error::Overflow)?;
            }
            if c == n {
                encode_varint(&mut output, delta, bias);
                bias = adapt_bias(delta, handled + 1, handled == basic_len);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(Error::Overflow)?;
        n += 1;
    }

    Ok(output)
}

/// Encode a value as a variable-length integer using bootstring encoding.
fn encode_varint(output: &mut String, mut value: u32, bias: u32) {
    let mut k: u32 = BASE;

    loop {
        let t = threshold(k, bias);

        if value < t {
            output.push(encode_digit(value).expect("value should be < BASE"));
            break;
        }

        let digit = t + (value - t) % (BASE - t);
        output.push(encode_digit(digit).expect("digit should be < BASE"));

        value = (value - t) / (BASE - t);
        k += BASE;
    }
}
