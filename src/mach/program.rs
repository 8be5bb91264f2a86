use super::Var;
use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{Error, Line, LineNumber, MaxValue};
use std::collections::{BTreeMap, HashMap};
use std::ops::RangeInclusive;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Program lines, variables and the execution cursor
///
/// Every line number has its source text. A parsed statement is optional:
/// it is missing until the line parses, and replacing the source drops it.

#[derive(Debug, Default)]
pub struct Program {
    source: BTreeMap<u16, Line>,
    statements: HashMap<u16, Rc<Statement>>,
    var: Var,
    cursor: Cursor,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cursor {
    pub current: LineNumber,
    pub jump: bool,
    pub terminated: bool,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Discards lines, variables and cursor together.
    pub fn clear(&mut self) {
        self.source.clear();
        self.statements.clear();
        self.var.clear();
        self.cursor = Cursor::default();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    pub fn var_mut(&mut self) -> &mut Var {
        &mut self.var
    }

    /// Adds or replaces a numbered line. Any previous parse is dropped.
    pub fn insert(&mut self, line: Line) -> Result<Option<Line>> {
        let number = match line.number() {
            Some(number) => number,
            None => return Err(error!(InternalError; "DIRECT LINE IN PROGRAM")),
        };
        self.statements.remove(&number);
        Ok(self.source.insert(number, line))
    }

    pub fn remove(&mut self, number: u16) -> Result<Line> {
        match self.source.remove(&number) {
            Some(line) => {
                self.statements.remove(&number);
                Ok(line)
            }
            None => Err(error!(LineNumberError)),
        }
    }

    pub fn line(&self, number: u16) -> Result<&Line> {
        match self.source.get(&number) {
            Some(line) => Ok(line),
            None => Err(error!(LineNumberError)),
        }
    }

    pub fn contains(&self, number: u16) -> bool {
        self.source.contains_key(&number)
    }

    pub fn set_statement(&mut self, number: u16, statement: Statement) -> Result<()> {
        if !self.source.contains_key(&number) {
            return Err(error!(LineNumberError));
        }
        self.statements.insert(number, Rc::new(statement));
        Ok(())
    }

    pub fn statement(&self, number: u16) -> Option<Rc<Statement>> {
        self.statements.get(&number).cloned()
    }

    pub fn first_line_number(&self) -> LineNumber {
        self.source.keys().next().copied()
    }

    pub fn next_line_number(&self, number: u16) -> LineNumber {
        if number >= LineNumber::max_value() {
            return None;
        }
        self.source.range(number + 1..).next().map(|(n, _)| *n)
    }

    /// Returns the next line within `range` and narrows `range` past it.
    pub fn list_line(&self, range: &mut RangeInclusive<u16>) -> Option<String> {
        let (number, line) = self.source.range(range.clone()).next()?;
        if *number < *range.end() {
            *range = number + 1..=*range.end();
        } else {
            let past_end = LineNumber::max_value() + 1;
            *range = past_end..=past_end;
        }
        Some(line.to_string())
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Positions the cursor on the first line for a new run.
    pub fn begin(&mut self) -> LineNumber {
        self.cursor = Cursor {
            current: self.first_line_number(),
            jump: false,
            terminated: false,
        };
        self.cursor.current
    }

    /// Transfers control to `number` on behalf of the statement running now.
    /// The cursor is untouched when the line does not exist.
    pub fn goto(&mut self, number: u16) -> Result<()> {
        if !self.contains(number) {
            return Err(error!(UndefinedLine));
        }
        self.cursor.current = Some(number);
        self.cursor.jump = true;
        Ok(())
    }

    pub fn fall_through(&mut self) {
        self.cursor.jump = false;
    }

    pub fn end(&mut self) {
        self.cursor.terminated = true;
    }

    pub fn is_terminated(&self) -> bool {
        self.cursor.terminated
    }

    /// Honors a pending jump or moves to the next higher line number.
    pub fn advance(&mut self) -> LineNumber {
        if self.cursor.jump {
            self.cursor.jump = false;
        } else {
            self.cursor.current = match self.cursor.current {
                Some(number) => self.next_line_number(number),
                None => None,
            };
        }
        self.cursor.current
    }

    pub fn stop(&mut self) {
        self.cursor.current = None;
        self.cursor.jump = false;
    }
}
