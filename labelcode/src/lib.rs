//! Labelcode: Punycode (RFC 3492) for internationalized domain labels.
//!
//! Labelcode converts Unicode domain labels to and from the Bootstring-based
//! ASCII form used by IDNA, including the `xn--` label convention. The codec
//! is pure and allocation-only: no I/O, no shared state, no normalization.
//!
//! # Key Properties
//!
//! - Encode/decode in a single pass over the input
//! - Strict roundtrip: `decode(encode(s)) == s` for any `s` with a
//!   non-ASCII character
//! - All-ASCII inputs encode to themselves
//!
//! # Examples
//!
//! ```
//! use labelcode::{decode, encode, punycode_to_unicode, unicode_to_punycode};
//!
//! // Raw label codec
//! assert_eq!(encode("münchen").unwrap(), "mnchen-3ya");
//! assert_eq!(decode("mnchen-3ya").unwrap(), "münchen");
//!
//! // ASCII passes through unchanged
//! assert_eq!(encode("plain").unwrap(), "plain");
//!
//! // Whole-domain conversion
//! assert_eq!(unicode_to_punycode("münchen.de").unwrap(), "xn--mnchen-3ya.de");
//! assert_eq!(punycode_to_unicode("xn--mnchen-3ya.de").unwrap(), "münchen.de");
//! ```
//!
//! What this crate does *not* do: IDNA mapping/normalization, case folding,
//! DNS length limits. Feed it labels you already consider well-formed.

mod bootstring;
mod decode;
mod domain;
mod encode;

pub use decode::decode;
pub use domain::{punycode_to_unicode, unicode_to_punycode, ACE_PREFIX};
pub use encode::encode;

/// Errors that can occur while encoding or decoding Punycode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A character outside the base-36 alphabet in the encoded portion.
    #[error("invalid punycode digit: '{0}'")]
    InvalidDigit(char),
    /// The encoded portion ended in the middle of a digit group.
    #[error("punycode input ended inside a digit group")]
    UnexpectedEnd,
    /// A non-ASCII character in a string that should already be encoded.
    #[error("non-ascii character in punycode input: '{0}'")]
    NonAscii(char),
    /// A delta decoded to a value outside the Unicode scalar range.
    #[error("decoded code point {0:#x} is not a unicode scalar")]
    InvalidCodePoint(u32),
    /// Arithmetic overflow while accumulating a delta.
    #[error("overflow while processing delta")]
    Overflow,
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: any input with a non-ASCII char survives
        /// decode(encode(s)); pure-ASCII input encodes to itself.
        #[test]
        fn prop_roundtrip(s in "\\PC*") {
            let encoded = encode(&s).unwrap();
            if s.is_ascii() {
                prop_assert_eq!(&encoded, &s, "identity failed for: {}", &s);
            } else {
                prop_assert!(encoded.is_ascii(), "output not ascii for: {}", &s);
                let decoded = decode(&encoded).unwrap_or_else(|e| {
                    panic!("decode failed for input '{}' with encoding '{}': {:?}", &s, &encoded, e)
                });
                prop_assert_eq!(&decoded, &s, "roundtrip failed for: {}", &s);
            }
        }

        /// Encoded output never contains characters outside the label
        /// alphabet plus the delimiter and the original ASCII chars.
        #[test]
        fn prop_output_is_ascii(s in "\\PC*") {
            prop_assert!(encode(&s).unwrap().is_ascii());
        }

        /// Domain roundtrip over labels mixing ASCII and non-ASCII runs.
        #[test]
        fn prop_roundtrip_domain(
            labels in proptest::collection::vec("[a-z0-9äöüßé名前点]{1,8}", 1..4)
        ) {
            let domain = labels.join(".");
            let ascii = unicode_to_punycode(&domain).unwrap();
            prop_assert!(ascii.is_ascii());
            let back = punycode_to_unicode(&ascii).unwrap();
            prop_assert_eq!(&back, &domain);
        }

        /// ASCII domains are untouched in both directions, as long as no
        /// label carries the ACE prefix.
        #[test]
        fn prop_ascii_domain_passthrough(
            labels in proptest::collection::vec("[a-z0-9-]{1,8}", 1..4)
        ) {
            let domain = labels.join(".");
            prop_assume!(!domain.split('.').any(|l| l.starts_with(ACE_PREFIX)));
            prop_assert_eq!(&unicode_to_punycode(&domain).unwrap(), &domain);
            prop_assert_eq!(&punycode_to_unicode(&domain).unwrap(), &domain);
        }
    }
}
