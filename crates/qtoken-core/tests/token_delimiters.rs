use qtoken_core::{Token, TOKEN_DELIMITER};
use rstest::rstest;

#[rstest]
#[case("pkg", 0)]
#[case("pkg:mod", 1)]
#[case("pkg:mod:Foo", 2)]
#[case("pkg:mod:Foo:bar", 3)]
#[case("my-org/lib:collections/list:List", 2)]
#[case("[]*map[string]int", 0)]
#[case("map[pkg:mod:K]pkg:mod:V", 4)]
#[case("(pkg:mod:A,pkg:mod:B)pkg:mod:C", 6)]
fn test_delimiter_count_is_literal(#[case] input: &str, #[case] expected: usize) {
    let tok = Token::parse(input).unwrap();
    assert_eq!(tok.delimiters(), expected);
    assert_eq!(tok.delimiters(), input.matches(TOKEN_DELIMITER).count());
}

#[rstest]
#[case("pkg", false, false, false)]
#[case("pkg:mod", true, false, false)]
#[case("pkg:mod:Foo", true, true, false)]
#[case("pkg:mod:Foo:bar", true, true, true)]
fn test_depth_thresholds(
    #[case] input: &str,
    #[case] module: bool,
    #[case] member: bool,
    #[case] class_member: bool,
) {
    let tok = Token::parse(input).unwrap();
    assert_eq!(tok.has_module(), module);
    assert_eq!(tok.has_module_member(), member);
    assert_eq!(tok.has_class_member(), class_member);
    assert_eq!(tok.is_simple(), !module);
}

#[test]
fn test_delimiter_indexes_point_at_delimiters() {
    let input = "my-org/lib:collections/list:List:push";
    let tok = Token::parse(input).unwrap();
    for n in 1..=tok.delimiters() {
        let ix = tok.delimiter(n).unwrap();
        assert_eq!(&input[ix..ix + 1], ":");
        assert_eq!(input[..ix].matches(TOKEN_DELIMITER).count(), n - 1);
    }
    assert_eq!(tok.delimiter(tok.delimiters() + 1), None);
}

#[test]
fn test_unchecked_tokens_never_panic() {
    for raw in [":", "::", ":::", "a::", "::b", "", "[]:", "map[:"] {
        let tok = Token::new_unchecked(raw);
        let _ = tok.package();
        let _ = tok.module();
        let _ = tok.module_member();
        let _ = tok.class_member();
        let _ = tok.address();
        let _ = tok.to_type();
    }
}
