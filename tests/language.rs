use std::{fs, io};

use eucalyptus::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::{core::Interpreter, function::MAX_CALL_DEPTH},
        parser::parse,
        reserved::ReservedNames,
        value::core::Value,
    },
    run_with_output,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn scripts_match_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| e.path().extension().is_some_and(|ext| ext == "euc"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        let mut output = Vec::new();
        if let Err(e) = run_with_output(&source, ReservedNames::default(), &mut output) {
            panic!("Script {path:?} failed:\n{e}");
        }

        assert_eq!(String::from_utf8_lossy(&output), expected, "output of {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn output_of(src: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = run_with_output(src, ReservedNames::default(), &mut output) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(output).expect("output is UTF-8")
}

fn value_of(src: &str) -> Value {
    match run_with_output(src, ReservedNames::default(), io::sink()) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("Script produced no value"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = run_with_output(src, ReservedNames::default(), io::sink()) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> Error {
    match run_with_output(src, ReservedNames::default(), io::sink()) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match assert_failure(src) {
        Error::Execution(e) => e.error,
        Error::Parse(e) => panic!("Expected a runtime error, got {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match assert_failure(src) {
        Error::Parse(e) => e,
        Error::Execution(e) => panic!("Expected a parse error, got {e}"),
    }
}

#[test]
fn print_of_sum() {
    assert_eq!(output_of("print(add(1, 2))"), "3\n");
}

#[test]
fn user_function_square() {
    assert_eq!(output_of("defFunction(square, x, return(mult(x, x)))\nprint(square(5))"),
               "25\n");
}

#[test]
fn for_each_prints_every_item() {
    assert_eq!(output_of("def(nums, [1, 2, 3])\nforEach(n, nums, print(n))"),
               "1\n2\n3\n");
}

#[test]
fn missing_dict_key_fails() {
    assert_eq!(runtime_error(r#"get({"a": 1}, "b")"#),
               RuntimeError::KeyNotFound { key:       "b".to_string(),
                                           container: "Dict", });
}

#[test]
fn if_chooses_branch() {
    assert_eq!(value_of(r#"if(lt(1,2), "yes", "no")"#), Value::from("yes"));
    assert_eq!(value_of(r#"if(lt(2,1), "yes", "no")"#), Value::from("no"));
    assert_eq!(output_of(r#"print(if(false, "yes"))"#), "");
}

#[test]
fn while_loop_updates_outer_variable() {
    assert_eq!(output_of("def(total, 0)\nwhile(lt(total, 3), def(total, add(total, 1)))\nprint(total)"),
               "3\n");
}

#[test]
fn constants_are_write_once() {
    assert_eq!(runtime_error("def(X, 1)\ndef(X, 2)"),
               RuntimeError::ReassignConstant { name: "X".to_string() });
    assert_eq!(runtime_error("def(MAX_SIZE, 1)\ninc(MAX_SIZE, 1)"),
               RuntimeError::ReassignConstant { name: "MAX_SIZE".to_string() });
    assert_eq!(output_of("def(x, 1)\ndef(x, 2)\nprint(x)"), "2\n");
}

#[test]
fn early_return_skips_rest_of_body() {
    let src = r#"
        def(before, 1)
        defFunction(early, n, [return(n), print("unreachable")])
        print(early(7))
        print(before)
    "#;
    assert_eq!(output_of(src), "7\n1\n");
}

#[test]
fn scopes_are_closed_after_calls_and_loops() {
    let program = parse(r#"
        defFunction(first, items, forEach(item, items, return(item)))
        def(x, first([4, 5]))
        while(true, return(x))
    "#).expect("program parses");

    let mut interpreter = Interpreter::with_output(ReservedNames::default(), Vec::new());
    let result = interpreter.interpret(&program).expect("program runs");

    assert_eq!(result, Some(Value::Integer(4)));
    assert_eq!(interpreter.environment.depth(), 1);
    assert!(!interpreter.environment.has_variable("item"));
    assert!(!interpreter.environment.has_variable("items"));
}

#[test]
fn failed_program_leaves_no_scope_behind() {
    let mut interpreter = Interpreter::with_output(ReservedNames::default(), Vec::new());

    let failing = parse("defFunction(boom, n, forEach(i, n, get(n, 9)))\nboom([1])").expect("program parses");
    assert!(interpreter.interpret(&failing).is_err());
    assert_eq!(interpreter.environment.depth(), 1);

    let next = parse("print(boom)").expect("program parses");
    interpreter.interpret(&next).expect("interpreter is still usable");
    assert_eq!(String::from_utf8_lossy(interpreter.output()), "<function boom(n)>\n");
}

#[test]
fn index_out_of_bounds() {
    assert_eq!(runtime_error("get([1, 2, 3], 3)"),
               RuntimeError::IndexOutOfBounds { index:  3,
                                                length: 3, });
    assert_eq!(runtime_error("get([1, 2, 3], -1)"),
               RuntimeError::IndexOutOfBounds { index:  -1,
                                                length: 3, });
    assert_eq!(runtime_error("get([], 0)"),
               RuntimeError::IndexOutOfBounds { index:  0,
                                                length: 0, });
    assert_eq!(value_of("get([1, 2, 3], 2)"), Value::Integer(3));
}

#[test]
fn numeric_promotion() {
    assert_eq!(value_of("add(1, 2)"), Value::Integer(3));
    assert_eq!(value_of("add(1, 2.5)"), Value::Real(3.5));
    assert_eq!(value_of("sub(5, 0.5)"), Value::Real(4.5));
    assert_eq!(value_of("mult(2, 1.5)"), Value::Real(3.0));
    assert_eq!(value_of("mult(2, 3, 4)"), Value::Integer(24));
    assert_eq!(value_of("sub(10, 1, 2)"), Value::Integer(7));
}

#[test]
fn addition_is_associative() {
    assert_eq!(value_of("eq(add(add(1, 2.5), 3), add(1, add(2.5, 3)))"),
               Value::Bool(true));
    assert_eq!(value_of("eq(sub(sub(10, 4), 3), sub(10, sub(4, 3)))"),
               Value::Bool(false));
}

#[test]
fn integer_overflow_is_reported() {
    assert_eq!(runtime_error("mult(9223372036854775807, 2)"), RuntimeError::Overflow);
    assert_eq!(runtime_error("add(9223372036854775807, 1)"), RuntimeError::Overflow);
}

#[test]
fn string_list_and_dict_arithmetic() {
    assert_eq!(value_of(r#"add("euca", "lyptus")"#), Value::from("eucalyptus"));
    assert_eq!(value_of(r#"sub("banana", "an")"#), Value::from("ba"));
    assert_eq!(output_of("print(add([1], [2, 3], 4))"), "[1, 2, 3, 4]\n");
    assert_eq!(output_of("print(sub([1, 2, 3, 2], [2]))"), "[1, 3]\n");
    assert_eq!(output_of("print(sub([1, 2, 1], 1))"), "[2, 1]\n");
    assert_eq!(output_of(r#"print(add({"a": 1}, "b", 2))"#), "{a=1, b=2}\n");
    assert_eq!(output_of(r#"print(add({"a": 1}, {"a": 5, "c": 3}))"#),
               "{a=5, c=3}\n");
    assert_eq!(output_of(r#"print(sub({"a": 1, "b": 2}, "a"))"#), "{b=2}\n");
}

#[test]
fn subtraction_of_absent_items_fails() {
    assert_eq!(runtime_error("sub([1, 2], 3)"),
               RuntimeError::KeyNotFound { key:       "3".to_string(),
                                           container: "List", });
    assert_eq!(runtime_error(r#"sub({"a": 1}, "z")"#),
               RuntimeError::KeyNotFound { key:       "z".to_string(),
                                           container: "Dict", });
}

#[test]
fn type_errors() {
    assert!(matches!(runtime_error(r#"lt("a", 1)"#), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error(r#"mult("a", 2)"#), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("add(true, 1)"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("len(5)"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("while(1, print(1))"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("forEach(n, 5, print(n))"), RuntimeError::TypeError { .. }));
}

#[test]
fn comparisons() {
    assert_eq!(value_of("lt(1, 1.5)"), Value::Bool(true));
    assert_eq!(value_of(r#"lt("apple", "banana")"#), Value::Bool(true));
    assert_eq!(value_of("lt([1, 2], [3])"), Value::Bool(false));
    assert_eq!(value_of("eq(null, null)"), Value::Bool(true));
    assert_eq!(value_of("eq(1, 1.0)"), Value::Bool(false));
    assert_eq!(value_of(r#"eq([1, {"a": "b"}], [1, {"a": "b"}])"#), Value::Bool(true));
}

#[test]
fn len_counts_elements() {
    assert_eq!(value_of(r#"len("hello")"#), Value::Integer(5));
    assert_eq!(value_of("len([1, 2, 3])"), Value::Integer(3));
    assert_eq!(value_of(r#"len({"a": 1, "b": 2})"#), Value::Integer(2));
}

#[test]
fn logic_evaluates_every_argument() {
    assert_eq!(output_of("def(n, 0)\ndef(r, or(true, inc(n, 1)))\nprint(n, r)"),
               "1\ntrue\n");
    assert_eq!(output_of("def(n, 0)\ndef(r, and(false, inc(n, 1)))\nprint(n, r)"),
               "1\nfalse\n");
    assert_eq!(value_of(r#"and(1, "a", [0])"#), Value::Bool(true));
    assert_eq!(value_of(r#"or(0, "", [], {})"#), Value::Bool(false));
}

#[test]
fn inc_adds_to_integer_variables() {
    assert_eq!(output_of("def(i, 1)\ninc(i, 2)\nprint(i)"), "3\n");
    assert!(matches!(runtime_error("def(i, 1)\ninc(i, 1.5)"), RuntimeError::TypeError { .. }));
    assert_eq!(runtime_error("inc(missing, 1)"),
               RuntimeError::UnknownVariable { name: "missing".to_string() });
}

#[test]
fn naming_conventions_are_enforced() {
    assert!(matches!(runtime_error("def(myVar, 1)"), RuntimeError::Naming { .. }));
    assert!(matches!(runtime_error("defFunction(my_fn, x, return(x))"),
                     RuntimeError::Naming { .. }));
    assert!(matches!(runtime_error("forEach(Item, [1], print(Item))"),
                     RuntimeError::Naming { .. }));
    assert!(matches!(runtime_error("defFunction(f, badParam, return(1))"),
                     RuntimeError::Naming { .. }));
    assert_success("def(snake_case_name, 1)\ndef(SCREAMING_NAME, 2)\ndefFunction(camelCaseName, x, return(x))");
}

#[test]
fn reserved_names_cannot_be_bound() {
    assert_eq!(runtime_error("def(print, 1)"),
               RuntimeError::ReservedName { name: "print".to_string() });
    assert_eq!(runtime_error("defFunction(add, x, return(x))"),
               RuntimeError::ReservedName { name: "add".to_string() });
    assert_eq!(runtime_error("forEach(len, [1], print(1))"),
               RuntimeError::ReservedName { name: "len".to_string() });

    let reserved = ReservedNames::parse("total\nmapAll\n");
    let result = run_with_output("def(total, 1)", reserved.clone(), io::sink());
    assert!(matches!(result,
                     Err(Error::Execution(e)) if e.error == RuntimeError::ReservedName { name: "total".to_string() }));
    assert!(run_with_output("defFunction(mapAll, x, return(x))", reserved, io::sink()).is_err());
}

#[test]
fn argument_counts_are_checked() {
    assert_eq!(runtime_error("add(1)"),
               RuntimeError::ArgumentCountMismatch { function: "add".to_string(),
                                                     expected: "at least 2".to_string(),
                                                     found:    1, });
    assert_eq!(runtime_error("if(true)"),
               RuntimeError::ArgumentCountMismatch { function: "if".to_string(),
                                                     expected: "2 to 3".to_string(),
                                                     found:    1, });
    assert_eq!(runtime_error("defFunction(square, x, return(mult(x, x)))\nsquare(1, 2)"),
               RuntimeError::ArgumentCountMismatch { function: "square".to_string(),
                                                     expected: "exactly 1".to_string(),
                                                     found:    2, });
}

#[test]
fn unknown_and_uncallable_names() {
    assert_eq!(runtime_error("foo(1)"),
               RuntimeError::UnknownFunction { name: "foo".to_string() });
    assert_eq!(runtime_error("def(x, 1)\nx(2)"),
               RuntimeError::NotCallable { name: "x".to_string() });
    assert_eq!(runtime_error("print(y)"),
               RuntimeError::UnknownVariable { name: "y".to_string() });
}

#[test]
fn errors_report_line_and_function() {
    let Error::Execution(error) = assert_failure("defFunction(boom, x, return(get(x, 5)))\nboom([1])")
    else {
        panic!("Expected an execution error");
    };

    assert_eq!(error.line, 2);
    assert_eq!(error.function.as_deref(), Some("boom"));
    assert_eq!(error.to_string(),
               "Error on line 2 while executing function 'boom': Index out of bounds: 5 for List of \
                length 1.");
}

#[test]
fn functions_cannot_rebind_outer_variables() {
    assert_eq!(output_of("def(x, 1)\ndefFunction(setX, v, def(x, v))\nsetX(5)\nprint(x)"),
               "1\n");
}

#[test]
fn loop_variable_is_local_to_the_loop() {
    assert_eq!(runtime_error("forEach(n, [1], print(n))\nprint(n)"),
               RuntimeError::UnknownVariable { name: "n".to_string() });
}

#[test]
fn return_escapes_nested_loops_and_functions() {
    let src = "defFunction(firstOver, [items, limit], forEach(item, items, if(lt(limit, item), \
               return(item))))\nprint(firstOver([1, 5, 9], 4))";
    assert_eq!(output_of(src), "5\n");
}

#[test]
fn null_elements_are_dropped_from_list_literals() {
    assert_eq!(output_of("print([1, null, 2])"), "[1, 2]\n");
    assert_eq!(value_of("len([null, 1, null, 2])"), Value::Integer(2));
    assert_eq!(output_of("defFunction(nothing, [], return(null))\nprint([nothing(), 3])"),
               "[3]\n");
}

#[test]
fn recursion() {
    let src = "defFunction(fact, n, [if(lt(n, 2), return(1)), return(mult(n, fact(sub(n, 1))))])\n\
               print(fact(5))";
    assert_eq!(output_of(src), "120\n");
}

#[test]
fn deep_recursion_completes() {
    let src = "defFunction(down, n, [if(eq(n, 0), return(0)), return(add(1, down(sub(n, 1))))])\n\
               print(down(5000))";
    assert_eq!(output_of(src), "5000\n");
}

#[test]
fn unbounded_recursion_hits_the_limit() {
    let Error::Execution(error) = assert_failure("defFunction(loop, n, return(loop(n)))\nloop(0)")
    else {
        panic!("Expected an execution error");
    };

    assert_eq!(error.line, 2);
    assert_eq!(error.function.as_deref(), Some("loop"));
    assert_eq!(error.error, RuntimeError::RecursionLimit { limit: MAX_CALL_DEPTH });
}

#[test]
fn recursion_limit_unwinds_every_scope() {
    let mut interpreter = Interpreter::with_output(ReservedNames::default(), Vec::new());
    let program = parse("defFunction(loop, n, forEach(i, [n], return(loop(i))))\nloop(0)").unwrap();

    assert!(interpreter.interpret(&program).is_err());
    assert_eq!(interpreter.environment.depth(), 1);
    assert_eq!(interpreter.environment.call_depth(), 0);

    let program = parse("defFunction(two, [], return(2))\nprint(two())").unwrap();
    interpreter.interpret(&program).unwrap();
    assert_eq!(interpreter.into_output(), b"2\n");
}

#[test]
fn deeply_nested_literals() {
    let depth = 5_000;
    let nested = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));

    assert_eq!(output_of(&format!("print({nested})")), format!("{nested}\n"));
}

#[test]
fn display_forms() {
    assert_eq!(output_of(r#"print(1.0, [1, "a"], true, 'single')"#),
               "1.0\n[1, a]\ntrue\nsingle\n");
    assert_eq!(output_of(r#"print({"a": "x"}, ["s"])"#), "{a=x}\n[s]\n");
    assert_eq!(output_of(r#"print({"k": ["v", {"n": "w"}]})"#), "{k=[v, {n=w}]}\n");
    assert_eq!(output_of("defFunction(pair, [a, b], return([a, b]))\nprint(pair)"),
               "<function pair(a, b)>\n");
}

#[test]
fn parse_errors() {
    assert!(matches!(parse_error("print(1,)"), ParseError::TrailingComma { .. }));
    assert!(matches!(parse_error("print([1, 2,])"), ParseError::TrailingComma { .. }));
    assert!(matches!(parse_error("print(1"), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(parse_error(r#"print({1: 2})"#), ParseError::KeyType { .. }));
    assert!(matches!(parse_error(r#"print("open)"#), ParseError::Lex(_)));
    assert_eq!(parse_error("print 1"),
               ParseError::ExpectedOpeningParen { name:  "print".to_string(),
                                                  found: Some("1".to_string()),
                                                  line:  1, });
    assert_eq!(parse_error(r#"print({"a": 1,})"#),
               ParseError::TrailingComma { context: "Dict",
                                           line:    1, });
    assert_eq!(parse_error(r#"print({"a" 1})"#),
               ParseError::ExpectedColon { found: Some("1".to_string()),
                                           line:  1, });
    assert_eq!(parse_error("print([1"),
               ParseError::UnexpectedEndOfInput { expected: "']'",
                                                  line:     1, });
}
