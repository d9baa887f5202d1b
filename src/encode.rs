use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Query component percent-encode set, as browsers submit search forms:
/// everything but ASCII alphanumerics and `-`, `_`, `.`, `~`.
/// Space is also in the set; it is written as `+` by [`encode_component_into`].
pub const QUERY_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Write a form-encoded key or value directly to buffer
pub fn encode_component_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, QUERY_COMPONENT_SET) {
        // `%` is itself encoded, so a literal "%20" chunk can only be a space
        if chunk == "%20" {
            buffer.push('+');
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a key or value read from the address bar.
/// `+` means space; malformed escapes and invalid UTF-8 are kept lossily.
pub fn decode_component(input: &str) -> String {
    if !input.bytes().any(|b| b == b'+' || b == b'%') {
        return input.to_owned();
    }
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_component(input: &str) -> String {
        let mut result = String::new();
        encode_component_into(&mut result, input);
        result
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("cats"), "cats");
        assert_eq!(encode_component("big cats"), "big+cats");
        assert_eq!(encode_component("!g rust"), "%21g+rust");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("1+1"), "1%2B1");
        assert_eq!(encode_component("100%"), "100%25");
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("cats"), "cats");
        assert_eq!(decode_component("big+cats"), "big cats");
        assert_eq!(decode_component("big%20cats"), "big cats");
        assert_eq!(decode_component("1%2B1"), "1+1");
        assert_eq!(decode_component("caf%C3%A9"), "café");
        // Malformed escapes pass through
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
    }
}
