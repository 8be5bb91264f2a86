use super::Program;
use crate::error;
use crate::lang::ast::{Condition, Statement, Variable};
use crate::lang::{parse_condition, Error};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// What the machine must do after a statement ran.
#[derive(Debug, PartialEq)]
pub enum Effect {
    Continue,
    Print(i32),
    /// Solicit a line of input and store it in the named variable.
    Input(Rc<str>),
}

impl Statement {
    pub fn execute(&self, program: &mut Program) -> Result<Effect> {
        use Statement::*;
        match self {
            Rem(_) => Ok(Effect::Continue),
            Let(_, Variable(col, name), expr) => {
                let value = expr.evaluate(program.var())?;
                program
                    .var_mut()
                    .store(name, value)
                    .map_err(|e| e.in_column(col))?;
                Ok(Effect::Continue)
            }
            Print(_, expr) => Ok(Effect::Print(expr.evaluate(program.var())?)),
            Input(_, Variable(_, name)) => Ok(Effect::Input(name.clone())),
            End(_) => {
                program.end();
                Ok(Effect::Continue)
            }
            Goto(col, line_number) => {
                program
                    .goto(*line_number)
                    .map_err(|e| e.in_column(col))?;
                Ok(Effect::Continue)
            }
            If(col, Condition(text_col, text), line_number) => {
                let comparison = parse_condition(text, text_col.start)?;
                if comparison.evaluate(program.var())? {
                    program
                        .goto(*line_number)
                        .map_err(|e| e.in_column(col))?;
                } else {
                    program.fall_through();
                }
                Ok(Effect::Continue)
            }
        }
    }
}

/// Accepts an optional `-` followed by digits and nothing else.
pub fn input_value(s: &str) -> Result<i32> {
    let s = s.trim();
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(error!(InvalidNumber));
    }
    match s.parse::<i32>() {
        Ok(n) => Ok(n),
        Err(_) => Err(error!(InvalidNumber)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ErrorCode, Line};

    fn statement(s: &str) -> Statement {
        Line::new(s).ast().unwrap()
    }

    fn program(lines: &[&str]) -> Program {
        let mut p = Program::new();
        for s in lines {
            let line = Line::new(s);
            let number = line.number().unwrap();
            let ast = line.ast().unwrap();
            p.insert(line).unwrap();
            p.set_statement(number, ast).unwrap();
        }
        p.begin();
        p
    }

    #[test]
    fn test_let_then_fetch() {
        let mut p = Program::new();
        assert_eq!(statement("10 LET X = 5").execute(&mut p), Ok(Effect::Continue));
        assert_eq!(p.var().fetch("X", &(0..0)), Ok(5));
        let e = statement("10 PRINT Y").execute(&mut p).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndefinedVariable);
    }

    #[test]
    fn test_print_and_input() {
        let mut p = Program::new();
        assert_eq!(statement("10 PRINT 6 / 4").execute(&mut p), Ok(Effect::Print(1)));
        assert_eq!(
            statement("10 INPUT N").execute(&mut p),
            Ok(Effect::Input("N".into()))
        );
    }

    #[test]
    fn test_end_sets_terminated() {
        let mut p = program(&["10 END"]);
        statement("10 END").execute(&mut p).unwrap();
        assert!(p.is_terminated());
    }

    #[test]
    fn test_goto() {
        let mut p = program(&["10 GOTO 30", "20 REM", "30 REM"]);
        statement("10 GOTO 30").execute(&mut p).unwrap();
        assert_eq!(p.cursor().current, Some(30));
        assert!(p.cursor().jump);
        let before = p.cursor().clone();
        let e = statement("10 GOTO 40").execute(&mut p).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndefinedLine);
        assert_eq!(p.cursor(), &before);
    }

    #[test]
    fn test_if() {
        let mut p = program(&["10 REM", "20 REM", "30 REM"]);
        statement("10 IF 1 < 2 THEN 30").execute(&mut p).unwrap();
        assert_eq!(p.cursor().current, Some(30));
        assert!(p.cursor().jump);
        statement("10 IF 2 < 1 THEN 20").execute(&mut p).unwrap();
        assert_eq!(p.cursor().current, Some(30));
        assert!(!p.cursor().jump);
    }

    #[test]
    fn test_if_splits_at_first_comparison() {
        let mut p = program(&["10 REM", "20 REM"]);
        let e = statement("10 IF 1 = 1 = 1 THEN 20").execute(&mut p).unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
    }

    #[test]
    fn test_if_condition_errors() {
        let mut p = program(&["10 REM"]);
        let e = statement("10 IF 1 / 0 > 0 THEN 10").execute(&mut p).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DivisionByZero);
        let e = statement("10 IF 1 > 0 THEN 99").execute(&mut p).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndefinedLine);
    }

    #[test]
    fn test_input_value() {
        assert_eq!(input_value("42"), Ok(42));
        assert_eq!(input_value(" -17 \n"), Ok(-17));
        assert_eq!(input_value("-2147483648"), Ok(i32::min_value()));
        for bad in &["", "-", "+5", "1 2", "x", "3.5", "--1", "2147483648"] {
            assert_eq!(
                input_value(bad).map_err(|e| e.code()),
                Err(ErrorCode::InvalidNumber),
                "{:?}",
                bad
            );
        }
    }
}
