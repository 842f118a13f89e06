use std::fs;

use walkdir::WalkDir;
use xmas::{
    Error, TraceEvent, Value,
    error::{LexError, ParseError, RuntimeError},
    run, run_traced,
};

#[test]
fn script_fixtures_produce_expected_values() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "xmas"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = content.lines()
                              .next()
                              .and_then(|line| line.strip_prefix("// expect: "))
                              .unwrap_or_else(|| panic!("{path:?} has no '// expect:' line"));

        let input_path = path.with_extension("input");
        let input = fs::read_to_string(&input_path).ok();

        count += 1;
        match run(&content, input.as_deref()) {
            Ok(value) => assert_eq!(value.to_string(), expected, "script {path:?}"),
            Err(e) => panic!("Script {path:?} failed:\n{content}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_value(src: &str, expected: &str) {
    match run(src, None) {
        Ok(value) => assert_eq!(value.to_string(), expected, "script: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_with_input(src: &str, input: &str, expected: &str) {
    match run(src, Some(input)) {
        Ok(value) => assert_eq!(value.to_string(), expected, "script: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) {
    if run(src, None).is_ok() {
        panic!("Script succeeded but was expected to fail: {src}")
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match run(src, None) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime error from {src:?}, got {other:?}"),
    }
}

#[test]
fn concrete_scenarios() {
    assert_value("5 < 10 == true", "true");
    assert_value("10 / 3", "3");
    assert_value("10 % 3", "1");
    assert_value("~\"123\" * 2", "246");
    assert_value("[1,2] + [3,4]", "[1, 2, 3, 4]");
    assert_value("addOne(x) = x + 1; addTwo = addOne |> addOne; addTwo(5)", "7");
    assert_with_input("len(input)", "abc\ndef", "[2, 3]");
    assert_with_input("input[1,1]", "abc\ndef", "e");
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_value("x = 1 + 2\nx", "3");
    assert_value("x = 7 * 9\nx", "63");
    assert_value("x = 8 - 5\nx", "3");
    assert_value("x = 10 / 2\nx", "5");
    assert_value("2 + 3 * 4", "14");
    assert_value("(2 + 3) * 4", "20");
    assert_value("-7 / 2", "-3");
    assert_value("-7 % 2", "-1");
    assert_value("7 % -2", "1");
    assert_value("- -4", "4");
}

#[test]
fn compound_assignments() {
    assert_value("x = 2\nx += 3\nx", "5");
    assert_value("x = 7\nx -= 2\nx", "5");
    assert_value("x = 4\nx *= 2\nx", "8");
    assert_value("x = 9\nx /= 3\nx", "3");
    assert_value("x = 9\nx %= 4\nx", "1");
    assert_value("s = \"ab\"\ns += \"cd\"", "abcd");
    assert_value("{ _ = 1\n_ += 2 }", "3");

    assert!(matches!(runtime_error("y += 1"), RuntimeError::UndefinedName { .. }));
}

#[test]
fn final_value_rules() {
    assert_value("x = 5", "5");
    assert_value("x = 5\nx + 1\ny = 2\ny", "2");
    assert_eq!(run("double(x) = x * 2", None).unwrap(), Value::Nothing);
    assert_eq!(run("", None).unwrap(), Value::Nothing);
    assert_eq!(run("// only a comment\n", None).unwrap(), Value::Nothing);
}

#[test]
fn text_values() {
    assert_value("\"ab\" + \"cd\"", "abcd");
    assert_value("\"a\\\"b\"", "a\"b");
    assert_value("\"apple\" < \"banana\"", "true");
    assert_value("\"abc\"[2]", "c");
    assert_value("\"hello\"[1..]", "ello");
    assert_value("\"hello\"[..2]", "he");
    assert_value("len(\"hello\")", "5");
    assert_value("~\"-42\"", "-42");
    assert_value("~true + ~false", "1");

    assert!(matches!(runtime_error("~\"12a\""), RuntimeError::ConversionFailure { .. }));
    assert!(matches!(runtime_error("~\" 12\""), RuntimeError::ConversionFailure { .. }));
    assert!(matches!(runtime_error("~[1]"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn logical_and_comparisons() {
    assert_value("2 < 3", "true");
    assert_value("3 > 2", "true");
    assert_value("2 <= 2", "true");
    assert_value("3 >= 4", "false");
    assert_value("2 == 2", "true");
    assert_value("[1, [2]] == [1, [2]]", "true");
    assert_value("\"a\" == 1", "false");
    assert_value("!false", "true");
    assert_value("true && false", "false");
    assert_value("false || true", "true");
    assert_value("1 < 2 && 2 < 3 || false", "true");

    assert!(matches!(runtime_error("1 && true"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("!0"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("[1] < [2]"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn logical_operators_short_circuit() {
    assert_value("false && undefinedName", "false");
    assert_value("true || 1 / 0", "true");
    assert!(matches!(runtime_error("true && 1 / 0"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn lists_and_ranges() {
    assert_value("[]", "[]");
    assert_value("[1, \"two\", [3]]", "[1, two, [3]]");
    assert_value("[1..5]", "[1, 2, 3, 4, 5]");
    assert_value("[3..0]", "[3, 2, 1, 0]");
    assert_value("[4..4]", "[4]");
    assert_value("a = 2\n[a..a + 2]", "[2, 3, 4]");
    assert_value("len([1..10])", "10");

    assert!(matches!(runtime_error("[1..\"5\"]"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn deeply_nested_list_literals() {
    let depth = 30;
    let source = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));

    assert_value(&source, &source);

    let ranges = format!("{}1..3{}", "[".repeat(depth), "]".repeat(depth));
    assert_value(&ranges,
                 &format!("{}1, 2, 3{}", "[".repeat(depth), "]".repeat(depth)));
}

#[test]
fn oversized_range_is_an_error() {
    assert!(matches!(runtime_error("len([0..4611686018427387903])"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("[-9223372036854775807 - 1..9223372036854775807]"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn indexing_and_slicing() {
    assert_value("xs = [10, 20, 30, 40]\nxs[0]", "10");
    assert_value("xs = [10, 20, 30, 40]\nxs[1..3]", "[20, 30]");
    assert_value("xs = [10, 20, 30, 40]\nxs[2..]", "[30, 40]");
    assert_value("xs = [10, 20, 30, 40]\nxs[..2]", "[10, 20]");
    assert_value("xs = [10, 20, 30, 40]\nxs[..]", "[10, 20, 30, 40]");
    assert_value("xs = [10, 20, 30, 40]\nxs[2..2]", "[]");
    assert_value("m = [[1, 2], [3, 4]]\nm[1][0]", "3");
    assert_value("m = [[1, 2], [3, 4]]\nm[1, 0]", "3");
    assert_value("m = [[1, 2], [3, 4]]\nm[.., 1]", "[2, 4]");

    let err = runtime_error("[1, 2, 3][3]");
    assert!(matches!(err, RuntimeError::IndexOutOfRange { index: 3, length: 3, .. }));
    assert!(matches!(runtime_error("[1, 2, 3][-1]"), RuntimeError::IndexOutOfRange { .. }));
    assert!(matches!(runtime_error("[1, 2, 3][2..1]"), RuntimeError::IndexOutOfRange { .. }));
    assert!(matches!(runtime_error("[1, 2, 3][0..4]"), RuntimeError::IndexOutOfRange { .. }));
    assert!(matches!(runtime_error("5[0]"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("[1][true]"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn input_grid() {
    let grid = "abc\ndef\nghi";

    assert_with_input("len(input)", grid, "[3, 3]");
    assert_with_input("input[2, 0]", grid, "g");
    assert_with_input("input[0]", grid, "[a, b, c]");
    assert_with_input("input[.., 1]", grid, "[b, e, h]");
    assert_with_input("input[1..]", grid, "[[d, e, f], [g, h, i]]");
    assert_with_input("len(input[1..])", grid, "[2, 3]");
    assert_with_input("input.rows()", "ab\ncd", "[[a, b], [c, d]]");
    assert_with_input("len(input.rows())", grid, "3");
    assert_with_input("len(input)", "ab\ncd\n", "[2, 2]");
    assert_value("len(input)", "[0, 0]");

    assert!(matches!(run("input[3, 0]", Some(grid)),
                     Err(Error::Runtime(RuntimeError::IndexOutOfRange { .. }))));
    assert!(matches!(run("for(r of input, { _ = r }, 0)", Some(grid)),
                     Err(Error::Runtime(RuntimeError::TypeMismatch { .. }))));
}

#[test]
fn user_defined_functions() {
    assert_value("square(x) = x * x\nsquare(3)", "9");
    assert_value("add(a, b) = a + b\nadd(2, 5)", "7");
    assert_value("fact(n) = if(n <= 1, 1, n * fact(n - 1))\nfact(10)", "3628800");
    assert_value("pick(x) = {\n  _ = x\n  _ *= 10\n}\npick(4)", "40");
    assert_value("f(x) = x + 1\ng = f\ng(1)", "2");
    assert_value("f(x) = x + 1\n[f][0](1)", "2");

    let err = runtime_error("add(a, b) = a + b\nadd(1)");
    assert!(matches!(err, RuntimeError::ArityMismatch { found: 1, .. }));
    assert!(matches!(runtime_error("nope(1)"), RuntimeError::UndefinedName { .. }));
    assert!(matches!(runtime_error("x = 3\nx(1)"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn parameters_and_loop_variables_are_restored() {
    assert_value("x = 100\nf(x) = x * 2\nf(3)\nx", "100");
    assert_value("f(y) = y * 2\nf(3)\ny = 1\ny", "1");
    assert_value("n = \"outer\"\nfor(n of [1, 2], { _ = n }, 0)\nn", "outer");
    assert_failure("f(z) = z\nf(1)\nz");
    assert_failure("for(k of [1, 2], { _ = k }, 0)\nk");
    assert_failure("f(z) = z / 0\nf(1)");
}

#[test]
fn builtins() {
    assert_value("min(3, 7)", "3");
    assert_value("max(3, 7)", "7");
    assert_value("max(3, 9, 7)", "9");
    assert_value("floor(5) + ceil(-2)", "3");
    assert_value("min |> floor", "<function>");
    assert_value("(max |> floor)(1, 8)", "8");
    assert_value("max(a, b) = a\nmax(1, 2)", "1");

    assert!(matches!(runtime_error("min(1)"), RuntimeError::ArityMismatch { .. }));
    assert!(matches!(runtime_error("max(1, \"2\")"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn pipe_composition() {
    assert_value("inc(x) = x + 1\ndbl(x) = x * 2\n(inc |> dbl)(5)", "12");
    assert_value("inc(x) = x + 1\ndbl(x) = x * 2\n(dbl |> inc)(5)", "11");
    assert_value("inc(x) = x + 1\nthree = inc |> inc |> inc\nthree(0)", "3");

    assert!(matches!(runtime_error("inc(x) = x + 1\ninc |> 1"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn if_special_form() {
    assert_value("if(true, 1, 2)", "1");
    assert_value("if(false, 1, 2)", "2");
    assert_value("if(1 < 2, { _ = \"a\"\n_ += \"b\" })", "ab");
    assert_value("if(true, 1, 1 / 0)", "1");
    assert_eq!(run("if(false, 1)", None).unwrap(), Value::Nothing);

    assert!(matches!(runtime_error("if(1, 2, 3)"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("if(true)"), RuntimeError::ArityMismatch { .. }));
}

#[test]
fn for_special_form() {
    assert_value("for(n of [1, 2, 3], { _ = _ + n }, 0)", "6");
    assert_value("for(n of [], { _ = _ + n }, 42)", "42");
    assert_value("for(n of [1..4], { _ = _ * n }, 1)", "24");
    assert_value("for(c of \"abc\", { _ = c + _ }, \"\")", "cba");
    assert_value("for(r of [[1, 2], [3]], { _ += len(r) }, 0)", "3");
    assert_value("total = 0\nfor(n of [1, 2, 3], { total += n })\ntotal", "6");
    assert_eq!(run("for(n of [1, 2], n)", None).unwrap(), Value::Nothing);

    let inner = "for(n of [1, 2], { _ = if(n > 1, { _ = _ + n }, 0) }, 10)";
    assert!(matches!(runtime_error(inner), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("for(n of 5, n)"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("for(n of [1])"),
                     RuntimeError::ArityMismatch { found: 1, .. }));
}

#[test]
fn len_special_form() {
    assert_value("len([1, 2, 3])", "3");
    assert_value("len([])", "0");
    assert_value("len(\"\")", "0");
    assert!(matches!(runtime_error("len(5)"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("len([1], [2])"), RuntimeError::ArityMismatch { .. }));
}

#[test]
fn accumulator_blocks() {
    assert_value("{ _ = 3 }", "3");
    assert_value("{ _ = 1\n{ _ = 5 }\n_ += 1 }", "2");
    assert_value("_ = 4\n_ * 2", "8");
    assert_value("x = { y = 2\n_ = y * y }\nx + y", "6");
    assert_eq!(run("{ x = 1 }", None).unwrap(), Value::Nothing);
}

#[test]
fn underscore_prefixed_names_are_identifiers() {
    assert_value("_x = 5
_x + 1", "6");
    assert_value("{ __ = 2
_ = __ * 3 }", "6");
    assert_value("a_b = 1
{ _ = a_b + 1 }", "2");
}

#[test]
fn no_value_sentinel_is_rejected_by_operators() {
    assert!(matches!(runtime_error("if(false, 1) + 1"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("for(n of [1], n) == 1"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("{ x = 1 } + \"a\""), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("if(false, 1) < 3"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(runtime_error("1 / 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("1 % 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("9223372036854775807 + 1"), RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("1 - \"a\""), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("[1] * 2"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("x + 1"), RuntimeError::UndefinedName { .. }));
}

#[test]
fn runtime_errors_report_their_line() {
    let err = runtime_error("x = 1\ny = 2\nz = x / 0");

    assert_eq!(err.line(), 3);
    assert!(err.to_string().starts_with("Error on line 3:"));
}

#[test]
fn lexing_errors() {
    assert!(matches!(run("x = 1 @ 2", None), Err(Error::Lex(_))));
    assert!(matches!(run("\"open", None), Err(Error::Lex(_))));
    assert!(matches!(run("\"bad \\q escape\"", None),
                     Err(Error::Lex(LexError::InvalidEscape { .. }))));
    assert!(matches!(run("99999999999999999999", None),
                     Err(Error::Lex(LexError::IntegerTooLarge { .. }))));
}

#[test]
fn parsing_errors() {
    assert!(matches!(run("x = ", None), Err(Error::Parse(_))));
    assert!(matches!(run("(1 + 2", None), Err(Error::Parse(_))));
    assert!(matches!(run("[1, 2", None), Err(Error::Parse(_))));
    assert!(matches!(run("[1, ]", None), Err(Error::Parse(_))));
    assert!(matches!(run("[1 2]", None), Err(Error::Parse(_))));
    assert!(matches!(run("[1..2, 3]", None),
                     Err(Error::Parse(ParseError::MalformedBracket { .. }))));
    assert!(matches!(run("x = 1 2", None), Err(Error::Parse(_))));
    assert!(matches!(run("input = 3", None), Err(Error::Parse(_))));
    assert!(matches!(run("for(1, 2)", None), Err(Error::Parse(_))));
    assert!(matches!(run("input.columns()", None),
                     Err(Error::Parse(ParseError::UnknownMethod { .. }))));
    assert!(matches!(run("f(1) = 2", None),
                     Err(Error::Parse(ParseError::InvalidFunctionDefinition { .. }))));
    assert!(matches!(run("f(a, a) = a", None),
                     Err(Error::Parse(ParseError::InvalidFunctionDefinition { .. }))));
    assert!(matches!(run("{ x = 1", None), Err(Error::Parse(_))));
}

#[test]
fn trace_records_events_in_order() {
    let mut events: Vec<TraceEvent> = Vec::new();
    let source = "x = 1\nx += 2\nif(x > 2, { _ = x })";
    let value = run_traced(source, None, &mut events).unwrap();

    assert_eq!(value, Value::Integer(3));

    let lines: Vec<String> = events.iter().map(ToString::to_string).collect();
    assert_eq!(lines,
               vec!["x: undefined → 1",
                    "x +=: 1 → 3",
                    "3 > 2 = true",
                    "if: true",
                    "  _: no value → 3"]);
}

#[test]
fn trace_records_unary_operators() {
    let mut events: Vec<TraceEvent> = Vec::new();
    run_traced("x = -3\ny = !true\nz = ~\"12\"", None, &mut events).unwrap();

    let lines: Vec<String> = events.iter().map(ToString::to_string).collect();
    assert_eq!(lines,
               vec!["-3 = -3",
                    "x: undefined → -3",
                    "!true = false",
                    "y: undefined → false",
                    "~\"12\" = 12",
                    "z: undefined → 12"]);
}

#[test]
fn trace_covers_loop_iterations() {
    let mut events: Vec<TraceEvent> = Vec::new();
    run_traced("for(n of [1, 2], { _ = _ + n }, 0)", None, &mut events).unwrap();

    let iterations = events.iter()
                           .filter(|e| matches!(e, TraceEvent::Iteration { .. }))
                           .count();
    assert_eq!(iterations, 2);
    assert_eq!(events[0].to_string(), "for n: 1");
    assert!(events.iter().all(|e| e.depth() <= 1));
}

#[test]
fn tracing_does_not_change_results() {
    let source = "fact(n) = if(n <= 1, 1, n * fact(n - 1))\nfor(k of [1..5], { _ += fact(k) }, 0)";
    let mut events: Vec<TraceEvent> = Vec::new();

    assert_eq!(run(source, None).unwrap(), run_traced(source, None, &mut events).unwrap());
    assert!(!events.is_empty());
}
