//! Domain-name label conversion (`xn--` form).
//!
//! Splits a dotted domain into labels, routes the ones that need it
//! through the Punycode codec, and rejoins. No IDNA mapping, length
//! checks, or repertoire validation happens here; labels go through
//! the codec exactly as given.

use crate::decode::decode;
use crate::encode::encode;
use crate::Result;

/// The ASCII-compatible-encoding prefix for internationalized labels.
pub const ACE_PREFIX: &str = "xn--";

/// Convert a Unicode domain name to its Punycode (`xn--`) form.
///
/// Labels containing any non-ASCII character are encoded and prefixed
/// with `xn--`; all-ASCII labels pass through untouched.
///
/// # Examples
///
/// ```
/// use labelcode::unicode_to_punycode;
///
/// assert_eq!(
///     unicode_to_punycode("münchen.de").unwrap(),
///     "xn--mnchen-3ya.de"
/// );
/// ```
pub fn unicode_to_punycode(domain: &str) -> Result<String> {
    let labels = domain
        .split('.')
        .map(|label| {
            if label.is_ascii() {
                Ok(label.to_string())
            } else {
                Ok(format!("{}{}", ACE_PREFIX, encode(label)?))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(labels.join("."))
}

/// Convert a Punycode (`xn--`) domain name back to Unicode.
///
/// Labels starting with the literal `xn--` prefix are decoded; all
/// other labels pass through untouched.
///
/// # Examples
///
/// ```
/// use labelcode::punycode_to_unicode;
///
/// assert_eq!(
///     punycode_to_unicode("xn--mnchen-3ya.de").unwrap(),
///     "münchen.de"
/// );
/// ```
pub fn punycode_to_unicode(domain: &str) -> Result<String> {
    let labels = domain
        .split('.')
        .map(|label| match label.strip_prefix(ACE_PREFIX) {
            Some(encoded) => decode(encoded),
            None => Ok(label.to_string()),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(labels.join("."))
}
