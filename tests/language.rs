use std::fs;

use minijs::{
    interpreter::{environment::Environment, lexer::tokenize, parser::core::parse_program},
    run_with_output,
};

fn run_capture(src: &str) -> Result<String, String> {
    let mut out = Vec::new();
    match run_with_output(src, &mut out) {
        Ok(()) => Ok(String::from_utf8(out).expect("output is valid UTF-8")),
        Err(e) => Err(e.to_string()),
    }
}

fn assert_output(src: &str, expected: &str) {
    match run_capture(src) {
        Ok(out) => assert_eq!(out, expected, "script: {src}"),
        Err(e) => panic!("Script failed: {e}\nscript: {src}"),
    }
}

fn assert_failure(src: &str) {
    if run_capture(src).is_ok() {
        panic!("Script succeeded but was expected to fail: {src}")
    }
}

fn assert_failure_with(src: &str, needle: &str) {
    match run_capture(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail: {src}"),
        Err(e) => assert!(e.contains(needle), "error `{e}` does not mention `{needle}`"),
    }
}

#[test]
fn declaration_assignment_and_debug() {
    assert_output("let x = 1; x = 2; debug x;", "2\n");
    assert_output("let a = 1, b = 2; debug a + b;", "3\n");
    assert_output("let x; debug x;", "undefined\n");
}

#[test]
fn constants() {
    assert_output("const c = 10; debug c * 2;", "20\n");
    assert_failure_with("const c = 10; c = 11;", "constant");
    assert_failure_with("const c = 10; c++;", "constant");
    assert_failure_with("const c = 10; debug --c;", "constant");
}

#[test]
fn redeclaration_and_shadowing() {
    assert_failure("let x = 1; let x = 2;");
    assert_failure("let x = 1; const x = 2;");

    // A nested block may shadow; the outer binding is untouched.
    assert_output("let x = 1; { let x = 2; debug x; } debug x;", "2\n1\n");
}

#[test]
fn block_scope_does_not_leak() {
    assert_failure("{ let x = 1; } debug x;");
    assert_failure("while (false) let x = 1; debug x;");
    assert_failure("let xs = 1; for (v in xs) debug v; debug v;");
}

#[test]
fn undeclared_names_are_parse_errors() {
    assert_failure("y = 1;");
    assert_failure("debug y;");
    assert_failure("let x = y + 1;");
}

#[test]
fn assignment_targets() {
    assert_failure("1 = 2;");
    assert_failure("let x = 1; x + 1 = 2;");
    assert_failure("debug ++1;");
    assert_failure("let x = 1; debug (x + 1)++;");
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("debug 1 + 2 * 3;", "7\n");
    assert_output("debug (1 + 2) * 3;", "9\n");
    assert_output("debug 10 - 2 - 3;", "5\n");
    assert_output("debug 4 / 2;", "2\n");
    assert_output("debug -2 * 3;", "-6\n");
}

#[test]
fn numeric_literals_render_back() {
    assert_output("debug 42;", "42\n");
    assert_output("debug 3.14;", "3.14\n");
    assert_output("debug 0.5;", "0.5\n");
}

#[test]
fn division_follows_floating_point_rules() {
    assert_output("debug 1 / 0;", "inf\n");
    assert_output("debug 7 / 2;", "3.5\n");
}

#[test]
fn numeric_coercion() {
    assert_output("debug \"3\" + \"4\";", "7\n");
    assert_output("debug \" 2.5 \" * 2;", "5\n");
    assert_output("debug true + true;", "2\n");
    assert_output("debug +\"7\";", "7\n");

    assert_failure_with("debug \"abc\" - 1;", "not a number");
    assert_failure_with("let x; debug x + 1;", "not a number");
}

#[test]
fn equality_never_coerces() {
    assert_output("debug 1 == \"1\";", "false\n");
    assert_output("debug 1 != \"1\";", "true\n");
    assert_output("debug \"a\" == \"a\";", "true\n");
    assert_output("debug undefined == undefined;", "true\n");
}

#[test]
fn comparisons_coerce_operands() {
    assert_output("debug \"2\" < 3;", "true\n");
    assert_output("debug 3 <= 3;", "true\n");
    assert_output("debug false >= 1;", "false\n");
}

#[test]
fn relational_operators_do_not_chain() {
    assert_failure("debug 1 < 2 < 3;");
    assert_failure("debug 1 == 1 == 1;");
}

#[test]
fn logic_and_short_circuit() {
    assert_output("debug 1 && 2;", "true\n");
    assert_output("debug 0 || \"\";", "false\n");
    assert_output("debug !0;", "true\n");

    // The failing right operand is never evaluated.
    assert_output("debug false && \"abc\" - 1;", "false\n");
    assert_output("debug true || \"abc\" - 1;", "true\n");
    assert_failure("debug true && \"abc\" - 1;");
}

#[test]
fn truthiness() {
    assert_output("if (\"\") debug 1; else debug 2;", "2\n");
    assert_output("if (\"x\") debug 1; else debug 2;", "1\n");
    assert_output("if (undefined) debug 1; else debug 2;", "2\n");
    assert_output("if (-0.5) debug 1; else debug 2;", "1\n");
}

#[test]
fn if_else_branches() {
    assert_output("let x = 5; if (x > 3) debug \"big\"; else debug \"small\";", "big\n");
    assert_output("let x = 1; if (x > 3) debug \"big\"; else debug \"small\";", "small\n");
    assert_output("let x = 1; if (x > 3) debug \"big\";", "");
}

#[test]
fn while_loops() {
    assert_output("let i = 0; while (i < 3) { debug i; i = i + 1; }", "0\n1\n2\n");
    assert_output("while (false) debug 1;", "");
}

#[test]
fn increment_and_decrement() {
    assert_output("let x = 1; debug ++x; debug x;", "2\n2\n");
    assert_output("let x = 1; debug x++; debug x;", "1\n2\n");
    assert_output("let x = 1; debug --x; debug x;", "0\n0\n");
    assert_output("let x = 1; debug x--; debug x;", "1\n0\n");

    // Coercion applies to the stepped value too.
    assert_output("let x = \"4\"; x++; debug x;", "5\n");
    assert_failure("let x = \"abc\"; x++;");
}

#[test]
fn text_escapes() {
    assert_output(r#"debug "a\tb";"#, "a\tb\n");
    assert_output(r#"debug "say \"hi\"";"#, "say \"hi\"\n");
}

#[test]
fn comments_are_skipped_and_lines_counted() {
    assert_output("// leading comment\ndebug 1; /* inline */ debug 2;", "1\n2\n");

    // The error after a multi-line comment reports the right line.
    assert_failure_with("/* one\n   two */\ndebug y;", "line 3");
}

#[test]
fn invalid_lexemes_are_rejected() {
    assert_failure("let x = a ? b : c;");
    assert_failure("debug 1 @ 2;");
}

#[test]
fn parsed_only_constructs_fail_at_runtime() {
    assert_failure_with("let l = [1, 2, 3];", "no runtime support");
    assert_failure_with("let o = { a: 1, b: 2 };", "no runtime support");
    assert_failure_with("let f = function () { return 1; };", "no runtime support");
    assert_failure_with("let x = 1; x(2);", "no runtime support");
    assert_failure_with("for (v in 1) debug v;", "no runtime support");
}

#[test]
fn parsing_is_deterministic() {
    let src = "let x = 1; { const y = x + 2; debug y; } while (x < 3) x++;";
    let tokens = tokenize(src).unwrap();

    let mut first_env = Environment::new();
    let first = parse_program(tokens.iter(), &mut first_env).unwrap();

    let mut second_env = Environment::new();
    let second = parse_program(tokens.iter(), &mut second_env).unwrap();

    assert_eq!(first, second);
}

#[test]
fn example_works() {
    let script = fs::read_to_string("tests/example.js").expect("missing file");
    assert_output(&script, "6\n6\ndone\n");
}
