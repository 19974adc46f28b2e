use std::fs;

use deskcalc::{
    config::Config,
    error::{CalcError, ParseError, RuntimeError},
    interpreter::{
        lexer::{Token, TokenStream},
        repl::evaluate_all,
        session::Session,
        variables::VariableTable,
    },
    run,
};
use walkdir::WalkDir;

#[test]
fn session_transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let input =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));

        count += 1;
        let (out, _) = transcript(&input);
        assert_eq!(out, expected, "transcript {} differs", path.display());
    }

    assert!(count > 0, "No transcripts found in tests/sessions");
}

/// Runs `input` through the REPL with prompts on and returns what was written
/// to stdout and stderr.
fn transcript(input: &str) -> (String, String) {
    transcript_bytes(input.as_bytes())
}

fn transcript_bytes(input: &[u8]) -> (String, String) {
    let mut out = Vec::new();
    let mut diagnostics = Vec::new();
    run(input, &mut out, &mut diagnostics, &Config::default())
        .unwrap_or_else(|e| panic!("Session failed: {e}"));
    (String::from_utf8(out).unwrap(), String::from_utf8(diagnostics).unwrap())
}

fn eval(src: &str) -> Result<Vec<f64>, CalcError> {
    evaluate_all(src, VariableTable::with_constants().unwrap())
}

fn assert_value(src: &str, expected: f64) {
    match eval(src) {
        Ok(values) => assert_eq!(values.last().copied(), Some(expected), "for {src:?}"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> CalcError {
    match eval(src) {
        Ok(values) => panic!("Script {src:?} succeeded with {values:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4;", 14.0);
    assert_value("(2 + 3) * 4;", 20.0);
    assert_value("10 - 4 - 3;", 3.0);
    assert_value("2 * (3 + (4 - 1)) / 4;", 3.0);
    assert_value("8 / 2 / 2;", 2.0);
}

#[test]
fn unary_operators_chain() {
    assert_value("- - - 3;", -3.0);
    assert_value("+-3;", -3.0);
    assert_value("2 * -3;", -6.0);
    assert_value("-(1 + 2) * 2;", -6.0);
}

#[test]
fn remainder_is_floating_point() {
    assert_value("7 % 3;", 1.0);
    assert_value("7.5 % 2;", 1.5);
    assert_value("-7 % 3;", -1.0);
}

#[test]
fn number_literals() {
    assert_value(".5 + 2.;", 2.5);
    assert_value("1.5e3;", 1500.0);
    assert_value("2.5E-1;", 0.25);
}

#[test]
fn statements_without_separator_at_end_of_input() {
    assert_value("1 + 1", 2.0);
}

#[test]
fn division_and_remainder_by_zero_fail() {
    for src in ["1 / 0;", "1 % 0;", "5 / (2 - 2);", "1 / -0;"] {
        assert!(matches!(assert_failure(src),
                         CalcError::Runtime(RuntimeError::DivisionByZero { .. })),
                "{src:?}");
    }
}

#[test]
fn constants_are_predefined() {
    assert_value("pi;", 3.141_592_653_5);
    assert_value("e;", 2.718_281_828_4);
}

#[test]
fn declarations_and_assignment() {
    assert_value("let x = 3; x * x;", 9.0);
    assert_value("let x = 1; x = x + 1; x;", 2.0);
    assert_value("let x = 0; let y = 0; x = y = 5;", 5.0);
    assert_value("let x = 0; let y = 0; x = y = 5; x + y;", 10.0);
    assert_value("let letter = 4; letter;", 4.0);
    assert_value("let x2 = 3; x2;", 3.0);
}

#[test]
fn duplicate_declaration_keeps_first_value() {
    let mut session = Session::new("let z = 1; let z = 2;".as_bytes(), VariableTable::new());

    assert_eq!(session.statement().unwrap(), 1.0);
    assert_eq!(session.tokens.get().unwrap(), Token::Print);
    assert!(matches!(session.statement(),
                     Err(CalcError::Runtime(RuntimeError::DuplicateDeclaration { ref name, .. }))
                     if name == "z"));
    assert_eq!(session.variables.lookup("z", 0).unwrap(), 1.0);
}

#[test]
fn undefined_variables_fail() {
    assert!(matches!(assert_failure("foo;"),
                     CalcError::Runtime(RuntimeError::UndefinedVariable { ref name, .. })
                     if name == "foo"));
    assert!(matches!(assert_failure("foo = 1;"),
                     CalcError::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn assignment_never_declares() {
    let mut session = Session::new("bar = 7;".as_bytes(), VariableTable::new());
    assert!(session.statement().is_err());
    assert!(!session.variables.is_declared("bar"));
}

#[test]
fn syntax_errors() {
    let messages = [("(1 + 2;", "')' expected"),
                    ("* 2;", "primary expected"),
                    ("let 3 = 4;", "name expected in declaration"),
                    ("let x 4;", "'=' missing in declaration of x")];

    for (src, expected) in messages {
        match assert_failure(src) {
            CalcError::Parse(ParseError::Syntax { message, line }) => {
                assert_eq!(message, expected);
                assert_eq!(line, 1);
            },
            e => panic!("{src:?} failed with {e:?}"),
        }
    }
}

#[test]
fn bad_tokens_fail() {
    for (src, bad) in [("2 # 3;", '#'), ("_x;", '_'), (". + 1;", '.'), ("3 ^ 2;", '^')] {
        assert!(matches!(assert_failure(src),
                         CalcError::Parse(ParseError::BadToken { token, .. }) if token == bad),
                "{src:?}");
    }
}

#[test]
fn unexpected_end_of_input() {
    assert!(matches!(assert_failure("1 +"),
                     CalcError::Parse(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn pure_expressions_are_idempotent() {
    let mut session = Session::new("2+2; 2+2; 2+2;".as_bytes(),
                                   VariableTable::with_constants().unwrap());
    let before: Vec<_> = session.variables.iter().cloned().collect();

    for _ in 0..3 {
        assert_eq!(session.statement().unwrap(), 4.0);
        assert_eq!(session.tokens.get().unwrap(), Token::Print);
    }

    let after: Vec<_> = session.variables.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn evaluator_uses_supplied_variables() {
    let mut variables = VariableTable::new();
    variables.define("width", 3.0, 0).unwrap();
    variables.define("height", 4.0, 0).unwrap();

    let mut session = Session::new("width * height".as_bytes(), variables);
    assert_eq!(session.expression().unwrap(), 12.0);
    assert!(!session.variables.is_declared("pi"));
}

#[test]
fn token_stream_reads_tokens() {
    let mut tokens = TokenStream::new("let rate = 1.5;\nq quit".as_bytes());
    let expected = [Token::Let,
                    Token::Name("rate".to_string()),
                    Token::Equals,
                    Token::Number(1.5),
                    Token::Print,
                    Token::Quit,
                    Token::Quit,
                    Token::Name("uit".to_string()),
                    Token::End];

    for token in expected {
        assert_eq!(tokens.get().unwrap(), token);
    }
    assert!(tokens.is_exhausted());
}

#[test]
fn token_stream_pushback_holds_one_token() {
    let mut tokens = TokenStream::new("1 2".as_bytes());
    let first = tokens.get().unwrap();

    tokens.putback(first.clone()).unwrap();
    assert!(matches!(tokens.putback(Token::Plus), Err(CalcError::Usage(_))));
    assert_eq!(tokens.get().unwrap(), first);
    assert_eq!(tokens.get().unwrap(), Token::Number(2.0));
}

#[test]
fn skip_to_uses_buffered_marker() {
    let mut tokens = TokenStream::new("; 1; 2;".as_bytes());
    let separator = tokens.get().unwrap();
    tokens.putback(separator).unwrap();

    tokens.skip_to(';').unwrap();
    assert_eq!(tokens.get().unwrap(), Token::Number(1.0));

    tokens.skip_to(';').unwrap();
    assert_eq!(tokens.get().unwrap(), Token::Number(2.0));
}

#[test]
fn skip_to_stops_at_end_of_input() {
    let mut tokens = TokenStream::new("1 2 3".as_bytes());
    tokens.skip_to(';').unwrap();
    assert_eq!(tokens.get().unwrap(), Token::End);
}

#[test]
fn errors_do_not_end_the_session() {
    let (out, diagnostics) = transcript("1 / 0; 2 + 2;\nq\n");
    assert_eq!(out, "> > = 4\n> ");
    assert_eq!(diagnostics, "Error on line 1: '/': division by zero.\n");
}

#[test]
fn errors_report_their_line() {
    let (_, diagnostics) = transcript("1;\n2;\nnope;\n");
    assert_eq!(diagnostics, "Error on line 3: Undefined variable 'nope'.\n");
}

#[test]
fn quit_prints_no_result() {
    let (out, diagnostics) = transcript("q\n1 + 1;\n");
    assert_eq!(out, "> ");
    assert!(diagnostics.is_empty());
}

#[test]
fn empty_statements_are_skipped() {
    let (out, _) = transcript(";;; 3;;\n");
    assert_eq!(out, "> = 3\n> ");
}

#[test]
fn quiet_mode_prints_no_prompts() {
    let config = Config { prompt: false,
                          ..Config::default() };
    let mut out = Vec::new();
    let mut diagnostics = Vec::new();

    run("1; 2;".as_bytes(), &mut out, &mut diagnostics, &config).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "= 1\n= 2\n");
}

#[test]
fn definitions_are_declared_at_startup() {
    let config = Config { prompt:      false,
                          definitions: vec![("rate".to_string(), 0.5)], };
    let mut out = Vec::new();
    let mut diagnostics = Vec::new();

    run("rate * 10;".as_bytes(), &mut out, &mut diagnostics, &config).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "= 5\n");
}

#[test]
fn duplicate_definition_fails_at_startup() {
    let config = Config { prompt:      false,
                          definitions: vec![("pi".to_string(), 3.0)], };
    let mut out = Vec::new();
    let mut diagnostics = Vec::new();

    let result = run("pi;".as_bytes(), &mut out, &mut diagnostics, &config);
    assert!(matches!(result,
                     Err(CalcError::Runtime(RuntimeError::DuplicateDeclaration { .. }))));
    assert!(out.is_empty());
}

#[test]
fn missing_paren_skips_to_following_separator() {
    // The `;` that ended the broken statement has already been read, so
    // recovery discards input up to the next one.
    let (out, diagnostics) = transcript("(3 + 4;\n5 * 5;\n6;\n");
    assert_eq!(out, "> > = 6\n> ");
    assert_eq!(diagnostics, "Error on line 1: ')' expected.\n");
}

#[test]
fn bad_token_does_not_end_the_session() {
    let (out, diagnostics) = transcript("2 # 3; 4;\n");
    assert_eq!(out, "> > = 4\n> ");
    assert_eq!(diagnostics, "Error on line 1: Bad token '#'.\n");
}

#[test]
fn invalid_utf8_is_a_bad_token() {
    let (out, diagnostics) = transcript_bytes(b"1;\n\xff;\n2 + 2;\n");
    assert_eq!(out, "> = 1\n> > = 4\n> ");
    assert_eq!(diagnostics.lines().count(), 1);
    assert!(diagnostics.starts_with("Error on line 2: Bad token"), "{diagnostics}");
}

#[test]
fn usage_errors_are_marked_internal() {
    let message = CalcError::Usage("putback() into a full buffer").to_string();
    assert_eq!(message, "internal error: putback() into a full buffer");
    assert!(CalcError::Usage("x").is_recoverable());
}
