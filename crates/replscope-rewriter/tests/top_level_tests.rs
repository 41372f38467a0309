use replscope_rewriter::{RewriteOptions, Rewriter, rewrite};

fn rewrite_ok(source: &str) -> String {
    match rewrite(source) {
        Ok(code) => code,
        Err(err) => panic!("rewrite of {source:?} failed: {err}"),
    }
}

fn rewrite_with(options: RewriteOptions, source: &str) -> String {
    let rewriter = Rewriter::new(options).expect("valid options");
    rewriter.rewrite(source).expect("rewrite").code
}

#[test]
fn test_empty_snippet() {
    assert_eq!(rewrite_ok(""), "");
    assert_eq!(rewrite_ok("// just a comment\n"), "");
}

#[test]
fn test_final_expression_is_returned() {
    assert_eq!(rewrite_ok("1 + 2"), "return 1 + 2;\n");
    assert_eq!(rewrite_ok("1 + 2;"), "return 1 + 2;\n");
}

#[test]
fn test_expressions_pass_through_verbatim() {
    assert_eq!(
        rewrite_ok("foo(1,  2)\na?.b ?? c"),
        "foo(1,  2);\nreturn a?.b ?? c;\n"
    );
    assert_eq!(
        rewrite_ok("const f = (x) => { var y = x; return y; }"),
        "__module__.scope(\"f\");\nf = (x) => { var y = x; return y; };\n",
        "arrow function bodies are copied as written"
    );
}

#[test]
fn test_var_is_registered_before_assignment() {
    assert_eq!(
        rewrite_ok("var x = 1; log(x);"),
        "__module__.global(\"x\");\nx = 1;\nreturn log(x);\n"
    );
}

#[test]
fn test_uninitialized_var_is_void() {
    assert_eq!(
        rewrite_ok("var x, y = 2;"),
        "__module__.global(\"x\", \"y\");\nx = void 0, y = 2;\n"
    );
}

#[test]
fn test_for_var_is_registered_before_loop() {
    assert_eq!(
        rewrite_ok("for (var x = 0; x < 1; x++) {}"),
        "__module__.global(\"x\");\nfor (x = 0; x < 1; x++) {\n}\n"
    );
}

#[test]
fn test_destructuring_var_is_parenthesized() {
    assert_eq!(
        rewrite_ok("var {a, b: [c]} = o;"),
        "__module__.global(\"a\", \"c\");\n({a: a, b: [c]} = o);\n"
    );
    assert_eq!(
        rewrite_ok("var [p, q] = pair;"),
        "__module__.global(\"p\", \"q\");\n[p, q] = pair;\n"
    );
}

#[test]
fn test_let_and_const_go_to_scope() {
    let output = Rewriter::default()
        .rewrite("let a = 5;\nconst b = 1, c = 2;\nlet d;")
        .expect("rewrite");
    assert_eq!(
        output.code,
        "__module__.scope(\"a\");\na = 5;\n\
         __module__.scope(\"b\", \"c\");\nb = 1, c = 2;\n\
         __module__.scope(\"d\");\nd = void 0;\n"
    );
    let scope: Vec<&str> = output.bindings.scope.iter().map(String::as_str).collect();
    let constants: Vec<&str> = output.bindings.constants.iter().map(String::as_str).collect();
    assert_eq!(scope, ["a", "b", "c", "d"]);
    assert_eq!(constants, ["b", "c"], "only const names are constants");
    assert!(output.bindings.global.is_empty());
}

#[test]
fn test_scope_survives_between_snippets() {
    // The second snippet refers to `a` as a plain identifier; the harness
    // resolves it through the scope object.
    assert_eq!(rewrite_ok("let a = 5;"), "__module__.scope(\"a\");\na = 5;\n");
    assert_eq!(rewrite_ok("a * 2"), "return a * 2;\n");
}

#[test]
fn test_top_level_class_goes_to_scope() {
    assert_eq!(
        rewrite_ok("class A extends B {}"),
        "__module__.scope(\"A\");\nA = class A extends B {\n};\n"
    );
}

#[test]
fn test_function_declarations_are_hoisted() {
    assert_eq!(
        rewrite_ok("f();\nfunction f() { return 1; }"),
        "window[\"f\"] = function () {\n    return 1;\n};\nf();\n"
    );
    assert_eq!(
        rewrite_ok("a();\nfunction a() {}\nb()\nasync function* b() {}\nc"),
        "window[\"a\"] = function () {\n};\n\
         window[\"b\"] = async function* () {\n};\n\
         a();\nb();\nreturn c;\n"
    );
}

#[test]
fn test_function_hoisting_can_be_disabled() {
    let options = RewriteOptions {
        hoist_functions: false,
        ..RewriteOptions::default()
    };
    assert_eq!(
        rewrite_with(options, "f();\nfunction f() {}"),
        "f();\nwindow[\"f\"] = function () {\n};\n"
    );
}

#[test]
fn test_redirected_function_is_anonymous() {
    // A named function expression would make `f` read-only inside its body.
    assert_eq!(
        rewrite_ok("function f() { f = function () { return 2; }; return 1; }\nf()"),
        "window[\"f\"] = function () {\n    f = function () { return 2; };\n    return 1;\n};\nreturn f();\n"
    );
}

#[test]
fn test_function_declaration_bindings() {
    let output = Rewriter::default()
        .rewrite("function f() {}\nvar g;")
        .expect("rewrite");
    let global: Vec<&str> = output.bindings.global.iter().map(String::as_str).collect();
    assert_eq!(global, ["f", "g"]);
}

#[test]
fn test_parameters_are_rebuilt() {
    assert_eq!(
        rewrite_ok("function f(a, b = 1, {c}, ...d) {}"),
        "window[\"f\"] = function (a, b = 1, {c: c}, ...d) {\n};\n"
    );
}

#[test]
fn test_import_and_export_are_dropped() {
    assert_eq!(rewrite_ok("import x from \"y\"; x"), "return x;\n");
    assert_eq!(
        rewrite_ok("import * as ns from \"./m.js\";\nexport { ns };\nexport default 1;\nns"),
        "return ns;\n"
    );
}

#[test]
fn test_directives() {
    assert_eq!(rewrite_ok("\"use strict\""), "return \"use strict\";\n");
    assert_eq!(rewrite_ok("'a';\n'b';"), "'a';\nreturn 'b';\n");
    assert_eq!(rewrite_ok("\"use strict\";\n1"), "\"use strict\";\nreturn 1;\n");
}

#[test]
fn test_hashbang_is_dropped() {
    assert_eq!(rewrite_ok("#!/usr/bin/env node\n1"), "return 1;\n");
}

#[test]
fn test_top_level_await_and_return() {
    assert_eq!(rewrite_ok("await ready"), "return await ready;\n");
    assert_eq!(
        rewrite_ok("if (done) return 1;\nnext()"),
        "if (done) {\n    return 1;\n}\nreturn next();\n"
    );
}

#[test]
fn test_custom_binding_names() {
    let options = RewriteOptions {
        global_binding: "g".to_string(),
        module_binding: "m".to_string(),
        ..RewriteOptions::default()
    };
    assert_eq!(
        rewrite_with(options, "var x = import.meta;\nfunction f() {}"),
        "g[\"f\"] = function () {\n};\nm.global(\"x\");\nx = m.meta;\n"
    );
}

#[test]
fn test_indent_width() {
    let options = RewriteOptions {
        indent_width: 2,
        ..RewriteOptions::default()
    };
    assert_eq!(
        rewrite_with(options, "if (a) { b(); }"),
        "if (a) {\n  b();\n}\n"
    );
}

#[test]
fn test_output_serializes() {
    let output = Rewriter::default().rewrite("const k = 1;").expect("rewrite");
    let json = serde_json::to_value(&output).expect("serialize");
    assert_eq!(json["code"], "__module__.scope(\"k\");\nk = 1;\n");
    assert_eq!(json["bindings"]["constants"][0], "k");
    assert_eq!(json["bindings"]["global"], serde_json::json!([]));
}
