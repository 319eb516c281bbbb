use std::borrow::Cow;

/// Percent-encode `text` so it can be used as a single query-string value.
///
/// Everything except ASCII alphanumerics and `-._~` is escaped, space
/// included (as `%20`). Never fails.
pub fn encode(text: &str) -> Cow<'_, str> {
    urlencoding::encode(text)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::encode;

    #[rstest]
    #[case("", "")]
    #[case("steal your skin", "steal%20your%20skin")]
    #[case("I am so smart\n", "I%20am%20so%20smart%0A")]
    #[case("a&b=c?d#e/f", "a%26b%3Dc%3Fd%23e%2Ff")]
    #[case("d'oh!", "d%27oh%21")]
    #[case("crème brûlée", "cr%C3%A8me%20br%C3%BBl%C3%A9e")]
    #[case("tab\there", "tab%09here")]
    fn encodes_query_values(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(encode(input), expected);
    }

    #[test]
    fn leaves_unreserved_characters_alone() {
        assert!(matches!(encode("Abc-1_2.3~"), std::borrow::Cow::Borrowed(_)));
    }
}
