use sigdex::parser::{MAX_NESTING_DEPTH, parse_type};
use sigdex::types::{SyntaxError, TypeExpr};

fn parse(input: &str) -> TypeExpr {
    parse_type(input).unwrap_or_else(|err| panic!("parsing '{input}' failed: {err}"))
}

fn int() -> TypeExpr {
    TypeExpr::ident("int")
}

#[test]
fn parse_variable_and_ident() {
    assert_eq!(parse("'a"), TypeExpr::var("a"));
    assert_eq!(parse("List.t"), TypeExpr::ident("List.t"));
}

#[test]
fn parse_arrow_is_right_associative() {
    assert_eq!(
        parse("'a -> 'b -> 'c"),
        TypeExpr::arrow(
            TypeExpr::var("a"),
            TypeExpr::arrow(TypeExpr::var("b"), TypeExpr::var("c"))
        )
    );
}

#[test]
fn parse_product_is_left_nested() {
    assert_eq!(
        parse("int * int * int"),
        TypeExpr::product(TypeExpr::product(int(), int()), int())
    );
}

#[test]
fn parse_precedence() {
    assert_eq!(
        parse("int * int list -> unit"),
        TypeExpr::arrow(
            TypeExpr::product(int(), TypeExpr::app(int(), "list")),
            TypeExpr::unit()
        )
    );
}

#[test]
fn parse_postfix_applications_chain() {
    assert_eq!(
        parse("'a list option"),
        TypeExpr::app(TypeExpr::app(TypeExpr::var("a"), "list"), "option")
    );
}

#[test]
fn parse_multi_argument_application() {
    assert_eq!(
        parse("('k, 'v) Hashtbl.t"),
        TypeExpr::app(
            TypeExpr::TypeList(vec![TypeExpr::var("k"), TypeExpr::var("v")]),
            "Hashtbl.t"
        )
    );
}

#[test]
fn parse_parenthesized_function() {
    assert_eq!(
        parse("('a -> 'b) -> 'a list -> 'b list"),
        TypeExpr::arrow(
            TypeExpr::arrow(TypeExpr::var("a"), TypeExpr::var("b")),
            TypeExpr::arrow(
                TypeExpr::app(TypeExpr::var("a"), "list"),
                TypeExpr::app(TypeExpr::var("b"), "list")
            )
        )
    );
}

#[test]
fn parse_labels_are_dropped() {
    assert_eq!(parse("f:('a -> unit) -> unit"), parse("('a -> unit) -> unit"));
    assert_eq!(parse("~f:('a -> unit) -> unit"), parse("('a -> unit) -> unit"));
}

#[test]
fn parse_optional_parameter() {
    assert_eq!(
        parse("?x:int -> unit"),
        TypeExpr::arrow(TypeExpr::optional(int()), TypeExpr::unit())
    );
}

#[test]
fn parse_optional_parameter_with_tuple() {
    assert_eq!(
        parse("?pos:int * int -> unit"),
        TypeExpr::arrow(
            TypeExpr::optional(TypeExpr::product(int(), int())),
            TypeExpr::unit()
        )
    );
}

#[test]
fn parse_rejects_missing_codomain() {
    assert!(matches!(parse_type("int ->"), Err(SyntaxError::Parse(_))));
}

#[test]
fn parse_rejects_unclosed_paren() {
    let err = parse_type("(int -> bool").unwrap_err();
    assert!(matches!(err, SyntaxError::Parse(_)));
}

#[test]
fn parse_rejects_list_without_constructor() {
    assert!(parse_type("(int, bool)").is_err());
}

#[test]
fn parse_rejects_trailing_tokens() {
    assert!(parse_type("int bool )").is_err());
}

#[test]
fn parse_error_names_expectation() {
    let message = parse_type("int * ").unwrap_err().to_string();
    assert!(message.contains("type"), "unexpected message: {message}");
}

fn nested(depth: usize) -> String {
    format!("{}int{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn parse_accepts_moderate_nesting() {
    assert_eq!(parse(&nested(40)), int());
}

#[test]
fn parse_rejects_excessive_nesting() {
    for depth in [MAX_NESTING_DEPTH + 1, 300, 1000] {
        assert!(
            matches!(parse_type(&nested(depth)), Err(SyntaxError::Parse(_))),
            "depth {depth} should be rejected"
        );
    }
}

#[test]
fn parse_rejects_excessively_long_arrow_chain() {
    let chain = vec!["int"; 500].join(" -> ");
    assert!(matches!(parse_type(&chain), Err(SyntaxError::Parse(_))));
}
