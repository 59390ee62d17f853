use qtoken_core::{Token, Type};
use rstest::rstest;

fn decorations(ty: &Type) -> [bool; 4] {
    [ty.is_pointer(), ty.is_array(), ty.is_map(), ty.is_function()]
}

#[rstest]
#[case("string")]
#[case("pkg:mod:Foo")]
#[case("*int")]
#[case("[]pkg:mod:Foo")]
#[case("map[string]int")]
#[case("(string,int)bool")]
#[case("()")]
#[case("[]*map[string]int")]
#[case("map[[]int](*pkg:mod:Foo)map[string][]bool")]
fn test_shape_predicates_are_exclusive(#[case] input: &str) {
    let ty = Type::parse(input).unwrap();
    let exclusive = [ty.is_primitive(), ty.is_named(), ty.is_decorated()];
    assert_eq!(exclusive.iter().filter(|b| **b).count(), 1);

    let decorated = decorations(&ty).iter().filter(|b| **b).count();
    assert_eq!(decorated, if ty.is_decorated() { 1 } else { 0 });

    assert_eq!(ty.to_string(), input);
    assert_eq!(Token::parse(input).unwrap().is_decorated(), ty.is_decorated());
}

#[test]
fn test_nested_construction_peels_layer_by_layer() {
    let string = Type::parse("string").unwrap();
    let int = Type::parse("int").unwrap();
    let ty = Type::array(Type::pointer(Type::map(string.clone(), int.clone())));
    assert_eq!(ty.to_string(), "[]*map[string]int");

    let reparsed = Type::parse(&ty.to_string()).unwrap();
    assert_eq!(reparsed, ty);

    assert!(reparsed.is_array());
    let pointer = reparsed.element().unwrap();
    assert!(pointer.is_pointer());
    let map = pointer.element().unwrap();
    assert!(map.is_map());
    assert_eq!(map.key(), Some(&string));
    assert_eq!(map.value(), Some(&int));
}

#[test]
fn test_function_returning_map_of_arrays() {
    let ty = Type::parse("(pkg:mod:Req)map[string][]pkg:mod:Item").unwrap();
    let params = ty.parameters().unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].module().unwrap().to_string(), "pkg:mod");

    let returns = ty.returns().unwrap();
    assert!(returns.is_map());
    let item = returns.value().unwrap().element().unwrap();
    assert_eq!(item.name().unwrap().as_str(), "Item");
    assert_eq!(item.package().unwrap().to_string(), "pkg");
}

#[rstest]
#[case("map[string]")]
#[case("map[]int")]
#[case("(int")]
#[case("(,)")]
#[case("[]")]
#[case("*")]
#[case("int)")]
#[case("[]pkg:mod")]
#[case("*pkg:mod:Foo:bar")]
fn test_malformed_types(#[case] input: &str) {
    assert!(Type::parse(input).is_err());
    assert!(Token::parse(input).is_err());
}

#[test]
fn test_deeply_nested_tokens_are_rejected() {
    let input = format!("{}pkg:mod:Foo", "[]".repeat(50_000));
    assert!(Token::parse(&input).is_err());
    assert!(Type::parse(&input).is_err());

    let json = serde_json::to_string(&input).unwrap();
    assert!(serde_json::from_str::<Type>(&json).is_err());
    assert!(serde_json::from_str::<Token>(&json).is_err());
}
