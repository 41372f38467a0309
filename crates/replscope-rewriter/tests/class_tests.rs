use replscope_rewriter::{RewriteError, Rewriter, rewrite};

fn rewrite_ok(source: &str) -> String {
    match rewrite(source) {
        Ok(code) => code,
        Err(err) => panic!("rewrite of {source:?} failed: {err}"),
    }
}

#[test]
fn test_fields_and_constructor() {
    assert_eq!(
        rewrite_ok("class Point {\n  x = 1;\n  constructor(x) { this.x = x; }\n}"),
        "__module__.scope(\"Point\");\nPoint = class Point {\n    x = 1;\n    \
         constructor(x) {\n        this.x = x;\n    }\n};\n"
    );
}

#[test]
fn test_method_modifiers() {
    let output = rewrite_ok(
        "class A { static get v() { return 1; } set v(n) {} async *gen() {} static #n; [k]() {} }",
    );
    assert_eq!(
        output,
        "__module__.scope(\"A\");\nA = class A {\n    static get v() {\n        return 1;\n    }\n    \
         set v(n) {\n    }\n    async *gen() {\n    }\n    static #n = void 0;\n    [k]() {\n    }\n};\n"
    );
}

#[test]
fn test_static_block_is_function_scope() {
    assert_eq!(
        rewrite_ok("class A { static { var t = 1; A.ready = t; } }"),
        "__module__.scope(\"A\");\nA = class A {\n    static {\n        var t = 1;\n        \
         A.ready = t;\n    }\n};\n"
    );
}

#[test]
fn test_superclass_with_host_form() {
    assert_eq!(
        rewrite_ok("class M extends (await import(\"./base.js\")).Base {}"),
        "__module__.scope(\"M\");\nM = class M extends (await __module__.import(\"./base.js\")).Base {\n};\n"
    );
}

#[test]
fn test_computed_member_keys_are_rewritten() {
    assert_eq!(
        rewrite_ok("class A { [import.meta.key] = 1; }"),
        "__module__.scope(\"A\");\nA = class A {\n    [__module__.meta.key] = 1;\n};\n"
    );
}

#[test]
fn test_class_expression_is_copied() {
    let output = Rewriter::default()
        .rewrite("const B = class { m() { var q; } };")
        .expect("rewrite");
    assert_eq!(
        output.code,
        "__module__.scope(\"B\");\nB = class { m() { var q; } };\n"
    );
    assert!(output.bindings.constants.contains("B"));
}

#[test]
fn test_class_in_function_is_ordinary() {
    assert_eq!(
        rewrite_ok("function make() { class Inner extends Base {} return Inner; }"),
        "window[\"make\"] = function () {\n    class Inner extends Base {\n    }\n    \
         return Inner;\n};\n"
    );
}

#[test]
fn test_class_bindings_are_not_constants() {
    let output = Rewriter::default().rewrite("class A {}").expect("rewrite");
    assert!(output.bindings.scope.contains("A"));
    assert!(output.bindings.constants.is_empty());
}

#[test]
fn test_typescript_members_are_rejected() {
    // Not valid JavaScript: the parser rejects it before the rewriter runs.
    assert!(matches!(
        rewrite("class A { [key: string]: number }"),
        Err(RewriteError::Syntax { .. })
    ));
}
