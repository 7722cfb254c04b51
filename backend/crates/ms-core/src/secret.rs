use subtle::ConstantTimeEq;

/// Compare a presented token with the expected one in constant time.
///
/// Only the length of `expected` can leak through timing.
pub fn tokens_match(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}
