use replscope_rewriter::{RewriteError, flatten_pattern_names, rewrite, rewrite_pattern_text};

fn names(declaration: &str) -> Vec<String> {
    flatten_pattern_names(declaration).expect("declaration parses")
}

fn pattern(declaration: &str) -> String {
    rewrite_pattern_text(declaration).expect("declaration parses")
}

#[test]
fn test_nested_pattern_names_in_order() {
    // `b` is a property key here, not a binding.
    assert_eq!(
        names("let [a, {b: [c, ...d]}, ...e] = x;"),
        ["a", "c", "d", "e"]
    );
    assert_eq!(names("let {b, c: [d]} = x;"), ["b", "d"]);
}

#[test]
fn test_holes_and_defaults_contribute_no_names() {
    assert_eq!(names("let [, a, , b] = x;"), ["a", "b"]);
    assert_eq!(names("let {a = f(), b: [c = 2]} = x;"), ["a", "c"]);
}

#[test]
fn test_duplicate_names_are_kept() {
    assert_eq!(names("var [a, a] = x;"), ["a", "a"]);
}

#[test]
fn test_array_pattern_text() {
    assert_eq!(pattern("let [a, , b] = x;"), "[a, , b]");
    assert_eq!(pattern("let [, a] = x;"), "[, a]");
    assert_eq!(pattern("let [a, ...rest] = x;"), "[a, ...rest]");
    assert_eq!(pattern("let [...rest] = x;"), "[...rest]");
}

#[test]
fn test_trailing_hole_keeps_its_slot() {
    assert_eq!(pattern("let [a, ,] = x;"), "[a, ,]");
}

#[test]
fn test_object_pattern_text() {
    assert_eq!(pattern("let {a, b: c} = x;"), "{a: a, b: c}");
    assert_eq!(pattern("let {a, ...rest} = x;"), "{a: a, ...rest}");
    assert_eq!(pattern("let {\"x-y\": z, 0: w} = x;"), "{\"x-y\": z, 0: w}");
}

#[test]
fn test_computed_key_keeps_its_value() {
    assert_eq!(pattern("let {[k]: v} = x;"), "{[k]: v}");
    assert_eq!(pattern("let {[`${p}x`]: {y}} = x;"), "{[`${p}x`]: {y: y}}");
}

#[test]
fn test_defaults_are_rewritten() {
    assert_eq!(pattern("let {a = 1, b: [c = 2]} = x;"), "{a: a = 1, b: [c = 2]}");
    assert_eq!(
        pattern("let {a = import.meta.url} = x;"),
        "{a: a = __module__.meta.url}"
    );
}

#[test]
fn test_pattern_helpers_need_a_declaration() {
    assert!(matches!(
        flatten_pattern_names("foo();"),
        Err(RewriteError::UnexpectedNode { .. })
    ));
    assert!(matches!(
        rewrite_pattern_text(""),
        Err(RewriteError::UnexpectedNode { .. })
    ));
}

#[test]
fn test_redirected_pattern_registers_every_name() {
    assert_eq!(
        rewrite("let [a, {b: [c, ...d]}, ...e] = x;").expect("rewrite"),
        "__module__.scope(\"a\", \"c\", \"d\", \"e\");\n[a, {b: [c, ...d]}, ...e] = x;\n"
    );
}
