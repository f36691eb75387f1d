use calx::{error::SyntaxError, interpreter::value::Number, parse};

fn assert_value(src: &str, expected: i64) {
    match parse(src) {
        Ok(value) => assert_eq!(value,
                                Number::from(expected),
                                "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_approx(src: &str, expected: f64) {
    match parse(src) {
        Ok(value) => assert!((value.as_f64() - expected).abs() < 1e-7,
                             "{src:?} evaluated to {value}, expected about {expected}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> SyntaxError {
    match parse(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn addition_and_subtraction_are_left_associative() {
    assert_value("1+1", 2);
    assert_value("1+1+1", 3);
    assert_value("1-1", 0);
    assert_value("1-1-1", -1);
    assert_value("10-2+3", 11);
}

#[test]
fn unary_minus_chains() {
    assert_value("-1", -1);
    assert_value("--1", 1);
    assert_value("---1", -1);
    assert_value("--1--1--1--1", 4);
    assert_value("------------10", 10);
    assert_value("- - 3", 3);
    assert_value("2*-3", -6);
    assert_value("-(2+3)", -5);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("1+2*3", 7);
    assert_value("3*2+1", 7);
    assert_value("3*3*3", 27);
    assert_value("3*3/3", 3);
    assert_value("27/3/3/3", 1);
    assert_value("2+8/4", 4);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(1+2)*3", 9);
    assert_value("(((((1)))))", 1);
    assert_value("(1-(2-3))*4", 8);
    assert_value("42", 42);
}

#[test]
fn whitespace_is_tolerated_between_tokens() {
    assert_value("1 + 2", 3);
    assert_value("  1 + 2", 3);
    assert_value("  1 + 2   ", 3);
    assert_value("\t( 1\n+ 2 ) *\r3 ", 9);
}

#[test]
fn decimal_literals() {
    assert_approx(".1", 0.1);
    assert_approx("0.1", 0.1);
    assert_approx("000.1", 0.1);
    assert_approx(".1+.1", 0.2);
    assert_approx(".1*.1", 0.01);
    assert_approx(".1/.1", 1.0);
    assert_approx("-.5", -0.5);
}

#[test]
fn literal_typing_and_promotion() {
    assert!(matches!(parse("007"), Ok(Number::Integer(_))));
    assert_eq!(parse("007").unwrap().as_integer(), Some(7));
    assert!(matches!(parse("2*3"), Ok(Number::Integer(_))));
    assert!(matches!(parse("1.0"), Ok(Number::Decimal(_))));
    assert!(matches!(parse("1+1.0"), Ok(Number::Decimal(_))));
    assert!(matches!(parse("6/3"), Ok(Number::Decimal(_))));
    assert_eq!(parse("6/3").unwrap(), Number::from(2));
    assert_eq!(parse("1+1.5").unwrap(), Number::from(2.5));
}

#[test]
fn integers_are_exact_at_any_size() {
    let nines = "9".repeat(400);

    assert_eq!(parse(&nines).unwrap().to_string(), nines);
    assert_eq!(parse(&format!("{nines}*0")).unwrap(), Number::from(0));
    assert_eq!(parse(&format!("{nines}-{nines}")).unwrap(), Number::from(0));
    assert!(matches!(parse(&format!("{nines}-{nines}")), Ok(Number::Integer(_))));

    assert_eq!(parse("9223372036854775807+1").unwrap().to_string(), "9223372036854775808");
    assert_eq!(parse("-(-9223372036854775807-1)").unwrap().to_string(),
               "9223372036854775808");
    assert_eq!(parse("99999999999999999999").unwrap().to_string(), "99999999999999999999");
}

#[test]
fn huge_integer_division_stays_finite() {
    let big = format!("1{}", "0".repeat(400));
    let smaller = format!("1{}", "0".repeat(399));

    assert_approx(&format!("{big}/{smaller}"), 10.0);
    assert_approx(&format!("{smaller}/{big}"), 0.1);
    assert!(!parse(&format!("{big}/{big}")).unwrap().is_nan());
}

#[test]
fn division_by_zero_is_nan() {
    assert!(parse("1/0").unwrap().is_nan());
    assert!(parse("0/0").unwrap().is_nan());
    assert!(parse("-1/0.0").unwrap().is_nan());
    assert!(parse("1/-0.0").unwrap().is_nan());
    assert!(parse("1/(2-2)").unwrap().is_nan());
}

#[test]
fn nan_propagates_through_enclosing_arithmetic() {
    assert!(parse("1/0+1").unwrap().is_nan());
    assert!(parse("2*(1/0)").unwrap().is_nan());
    assert!(parse("1/0*0").unwrap().is_nan());
    assert!(parse("-(1/0)").unwrap().is_nan());
    assert!(parse("5/(1/0)").unwrap().is_nan());
}

#[test]
fn invalid_inputs_are_syntax_errors() {
    for src in ["abc", "(42a", "1+a", "1a", "(1", "", "   ", "1+", "*2", "()", "1.", "1 2", "3)+1"] {
        assert_failure(src);
    }
}

#[test]
fn operand_errors_name_the_character_found() {
    assert_eq!(assert_failure("abc"),
               SyntaxError::ExpectedOperand { found: Some('a'), position: 0 });
    assert_eq!(assert_failure("1+a"),
               SyntaxError::ExpectedOperand { found: Some('a'), position: 2 });
    assert_eq!(assert_failure("1 +  "),
               SyntaxError::ExpectedOperand { found: None, position: 5 });
    assert_eq!(assert_failure(""),
               SyntaxError::ExpectedOperand { found: None, position: 0 });
    assert_eq!(assert_failure("  x"),
               SyntaxError::ExpectedOperand { found: Some('x'), position: 2 });
}

#[test]
fn missing_closing_parenthesis() {
    assert_eq!(assert_failure("(1"),
               SyntaxError::ExpectedClosingParen { found: None, position: 2 });
    assert_eq!(assert_failure("(42a"),
               SyntaxError::ExpectedClosingParen { found: Some('a'), position: 3 });
    assert_eq!(assert_failure("((1)"),
               SyntaxError::ExpectedClosingParen { found: None, position: 4 });
    assert_eq!(assert_failure("( 1 + 2 ]").position(), 8);
}

#[test]
fn trailing_input_is_rejected() {
    assert_eq!(assert_failure("1a"),
               SyntaxError::UnexpectedTrailing { found: 'a', position: 1 });
    assert_eq!(assert_failure("1 2"),
               SyntaxError::UnexpectedTrailing { found: '2', position: 2 });
    assert_eq!(assert_failure("1."),
               SyntaxError::UnexpectedTrailing { found: '.', position: 1 });
    assert_eq!(assert_failure("1.5.3"),
               SyntaxError::UnexpectedTrailing { found: '.', position: 3 });
    assert_eq!(assert_failure("(1))"),
               SyntaxError::UnexpectedTrailing { found: ')', position: 3 });
}

#[test]
fn error_messages() {
    assert_eq!(assert_failure("abc").to_string(),
               "Expected number or '(' but got 'a' at position 0");
    assert_eq!(assert_failure("").to_string(),
               "Expected number or '(' but got '<EOL>' at position 0");
    assert_eq!(assert_failure("(1").to_string(),
               "Expected ')' but got '<EOL>' at position 2");
    assert_eq!(assert_failure("1a").to_string(),
               "Unexpected character after expression: 'a' at position 1");
}

#[test]
fn deep_nesting_is_bounded() {
    let ok = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_value(&ok, 1);

    let minus = format!("{}1", "-".repeat(101));
    assert_value(&minus, -1);

    let too_deep = format!("{}1{}", "(".repeat(600), ")".repeat(600));
    assert!(matches!(assert_failure(&too_deep),
                     SyntaxError::NestingTooDeep { limit: 512, .. }));

    assert_eq!(assert_failure(&too_deep).position(), 513);
}

#[test]
fn any_number_of_minus_signs() {
    assert_value(&format!("{}1", "-".repeat(10_000)), 1);
    assert_value(&format!("{}1", "-".repeat(10_001)), -1);
    assert_value(&format!("2*{}(3)", "- ".repeat(513)), -6);
}

#[test]
fn repeated_calls_are_independent() {
    for src in ["(1-(2-3))*4", ".1*.1", "1/0", "1+a", "(1"] {
        let first = parse(src).map(|v| v.to_string());
        let second = parse(src).map(|v| v.to_string());
        assert_eq!(first, second, "{src:?} changed between calls");
    }

    assert!(parse("(1").is_err());
    assert_value("1", 1);
}

#[test]
fn results_display() {
    assert_eq!(parse("1+2").unwrap().to_string(), "3");
    assert_eq!(parse("6/3").unwrap().to_string(), "2.0");
    assert_eq!(parse(".5*3").unwrap().to_string(), "1.5");
    assert_eq!(parse("1/0").unwrap().to_string(), "NaN");
    assert_eq!(parse("20000000000000000.0").unwrap().to_string(), "20000000000000000.0");
    assert_eq!(parse("-0.0").unwrap().to_string(), "-0.0");
}
