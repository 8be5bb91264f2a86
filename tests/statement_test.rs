mod common;
use basic::mach::{Runtime, State, MAX_LINE_LEN};
use common::*;

#[test]
fn test_direct_statements() {
    let mut r = Runtime::new();
    assert_eq!(enter(&mut r, &["PRINT 6 * 7"]), "42\n");
    assert_eq!(enter(&mut r, &["REM nothing happens"]), "");
    assert_eq!(enter(&mut r, &["LET X = 9", "PRINT X"]), "9\n");
    assert_eq!(enter(&mut r, &["", "   "]), "");
}

#[test]
fn test_illegal_direct() {
    let mut r = Runtime::new();
    assert_eq!(enter(&mut r, &["GOTO 10"]), "?ILLEGAL DIRECT IN (0..4)\n");
    assert_eq!(enter(&mut r, &["END"]), "?ILLEGAL DIRECT IN (0..3)\n");
    assert_eq!(
        enter(&mut r, &["IF 1 < 2 THEN 10"]),
        "?ILLEGAL DIRECT IN (0..2)\n"
    );
}

#[test]
fn test_invalid_line_numbers() {
    let mut r = Runtime::new();
    assert_eq!(
        enter(&mut r, &["65530 PRINT 1"]),
        "?LINE NUMBER ERROR IN (0..5); INVALID LINE NUMBER\n"
    );
    assert_eq!(
        enter(&mut r, &["0 PRINT 1"]),
        "?LINE NUMBER ERROR IN (0..1); INVALID LINE NUMBER\n"
    );
    assert_eq!(enter(&mut r, &["65529 PRINT 1", "RUN"]), "1\n");
    assert_eq!(
        enter(&mut r, &["10 GOTO 70000"]),
        "?LINE NUMBER ERROR IN 10 (5..10); INVALID LINE NUMBER\n"
    );
}

#[test]
fn test_syntax_errors() {
    let mut r = Runtime::new();
    assert_eq!(
        enter(&mut r, &["10 LET = 5"]),
        "?SYNTAX ERROR IN 10 (4..5); EXPECTED IDENTIFIER\n"
    );
    assert_eq!(
        enter(&mut r, &["10 LET PRINT = 5"]),
        "?SYNTAX ERROR IN 10 (4..9); RESERVED WORD\n"
    );
    assert_eq!(
        enter(&mut r, &["10 PRINT 1 2"]),
        "?SYNTAX ERROR IN 10 (8..9); UNEXPECTED TOKEN\n"
    );
    assert_eq!(
        enter(&mut r, &["10 IF 1 < 2 GOTO 5"]),
        "?SYNTAX ERROR IN 10 (15..15); EXPECTED THEN\n"
    );
    assert_eq!(
        enter(&mut r, &["10 print 1"]),
        "?SYNTAX ERROR IN 10 (0..5); EXPECTED STATEMENT\n"
    );
    assert_eq!(
        enter(&mut r, &["RUN 10"]),
        "?SYNTAX ERROR IN (4..6); UNEXPECTED TOKEN\n"
    );
}

#[test]
fn test_line_buffer_overflow() {
    let mut r = Runtime::new();
    let long = format!("PRINT {}", "1".repeat(MAX_LINE_LEN));
    assert_eq!(enter(&mut r, &[&long]), "?LINE BUFFER OVERFLOW\n");
}

#[test]
fn test_input_in_program() {
    let mut r = Runtime::new();
    let s = enter(&mut r, &["10 INPUT N", "20 PRINT N * 2", "RUN"]);
    assert_eq!(s, " ? ");
    assert_eq!(enter(&mut r, &["21"]), "42\n");
    assert_eq!(r.state(), State::Idle);
}

#[test]
fn test_input_retries_bad_answers() {
    let mut r = Runtime::new();
    let s = enter(&mut r, &["10 INPUT N", "20 PRINT N", "RUN"]);
    assert_eq!(s, " ? ");
    assert_eq!(enter(&mut r, &["abc"]), "?INVALID NUMBER\n ? ");
    assert_eq!(enter(&mut r, &["3.5"]), "?INVALID NUMBER\n ? ");
    assert_eq!(enter(&mut r, &["  -8 "]), "-8\n");
}

#[test]
fn test_input_direct() {
    let mut r = Runtime::new();
    assert_eq!(enter(&mut r, &["INPUT Q"]), " ? ");
    assert_eq!(enter(&mut r, &["5", "PRINT Q + 1"]), "6\n");
}

#[test]
fn test_break_during_input() {
    let mut r = Runtime::new();
    assert_eq!(enter(&mut r, &["10 INPUT N", "20 PRINT 1", "RUN"]), " ? ");
    r.interrupt();
    assert_eq!(exec(&mut r), "?BREAK IN 10\n");
    assert_eq!(r.state(), State::Idle);
    assert_eq!(enter(&mut r, &["PRINT 2"]), "2\n");
}
