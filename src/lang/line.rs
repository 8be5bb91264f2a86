use super::ast::*;
use super::lex::*;
use super::parse::*;
use super::token::*;
use super::{Error, LineNumber};

/// One line of text as typed by the user, scanned but not yet parsed.
#[derive(Debug, PartialEq)]
pub struct Line {
    number: LineNumber,
    source: String,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let source = s.trim().to_string();
        let (line_number, tokens) = lex(&source);
        Line {
            number: line_number,
            source,
            tokens,
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn ast(&self) -> Result<Statement, Error> {
        parse(self.number, &self.tokens)
    }

    pub fn command(&self) -> Result<Command, Error> {
        parse_command(&self.tokens)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
