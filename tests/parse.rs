use recursive_flatten::{flatten, nested, Container, CursorKind, ParseConfig, ParseError};

#[test]
fn parsed_literal_flattens_like_built_literal() {
    let parsed: Container<i32> = "[[[1, 2]], [], [[3], 4], 5]".parse().expect("literal parses");
    let built: Container<i32> = nested![[[1, 2]], [], [[3], 4], 5];
    assert_eq!(parsed, built);

    for kind in CursorKind::ALL {
        let leaves: Vec<i32> = flatten(&parsed).make_cursor(kind).copied().collect();
        assert_eq!(leaves, vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn display_output_parses_back() {
    let built: Container<i32> = nested![[1, [], [2, [[], 3]]], [[[]], 4], (-5)];
    let text = built.to_string();
    assert_eq!(text, "[[1, [], [2, [[], 3]]], [[[]], 4], -5]");
    assert_eq!(text.parse::<Container<i32>>(), Ok(built));
}

#[test]
fn string_leaves_keep_inner_spaces() {
    let parsed: Container<String> = "[hello world, [nested leaf], []]".parse().expect("literal parses");
    let leaves: Vec<&str> = flatten(&parsed).into_iter().map(String::as_str).collect();
    assert_eq!(leaves, vec!["hello world", "nested leaf"]);
}

#[test]
fn depth_limit_guards_pathological_input() {
    let depth = 5_000;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));

    let err = Container::<i32>::parse_with(&text, &ParseConfig::default()).unwrap_err();
    assert_eq!(
        err,
        ParseError::DepthExceeded {
            limit: ParseConfig::DEFAULT_MAX_DEPTH,
            offset: ParseConfig::DEFAULT_MAX_DEPTH,
        }
    );

    let parsed = Container::<i32>::parse_with(&text, &ParseConfig::with_max_depth(depth))
        .expect("within raised limit");
    assert_eq!(parsed.depth(), depth);
    assert_eq!(flatten(&parsed).chain_cursor().count(), 0);
}

#[test]
fn error_messages_name_the_offset() {
    let err = "[1, two]".parse::<Container<u8>>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid leaf 'two' at offset 4: invalid digit found in string"
    );

    let err = "[1, 2".parse::<Container<u8>>().unwrap_err();
    assert_eq!(err.to_string(), "unexpected end of input with 1 unclosed container(s)");
}
