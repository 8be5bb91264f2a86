use super::exec::input_value;
use super::{Effect, Program};
use crate::error;
use crate::lang::ast::{Command, Statement};
use crate::lang::{Error, ErrorCode, Line, LineNumber, MaxValue};
use std::ops::RangeInclusive;
use std::rc::Rc;
use tracing::{debug, trace};

pub const INPUT_PROMPT: &str = " ? ";
pub const MAX_LINE_LEN: usize = 255;

const HELP: &str = "\
COMMANDS: RUN LIST CLEAR QUIT HELP
STATEMENTS: REM LET PRINT INPUT END GOTO IF...THEN
ENTER A NUMBERED LINE TO STORE IT, A NUMBER ALONE TO DELETE IT.
";

/// ## Events
///
/// `Runtime::execute` reports what happened with one of these.
/// The terminal displays output and supplies lines of input.
#[derive(Debug, PartialEq)]
pub enum Event {
    Errors(Vec<Error>),
    Input(String),
    List(String),
    Print(String),
    Quit,
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Running,
    Terminated,
}

impl Default for State {
    fn default() -> State {
        State::Idle
    }
}

/// ## The interpreter
///
/// Lines are given to `enter`. The machine advances only inside
/// `execute`, at most `cycles` statements per call.
#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
    state: State,
    line: LineNumber,
    direct: Option<Command>,
    input: Option<Rc<str>>,
    list: Option<RangeInclusive<u16>>,
    errors: Vec<Error>,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Enters a line typed by the user. While an `INPUT` is waiting the
    /// line is its answer. Returns true when the line belongs in history.
    pub fn enter(&mut self, s: &str) -> bool {
        if let Some(var_name) = self.input.take() {
            self.answer(var_name, s);
            return false;
        }
        if s.len() > MAX_LINE_LEN {
            self.errors.push(error!(LineBufferOverflow));
            return false;
        }
        let line = Line::new(s);
        if line.is_direct() {
            if line.is_empty() {
                return false;
            }
            match line.command() {
                Ok(command) => self.direct = Some(command),
                Err(error) => self.errors.push(error),
            }
        } else {
            self.enter_indirect(line);
        }
        true
    }

    /// Used for loading a program from a file. Only numbered lines are accepted.
    pub fn load_str(&mut self, s: &str) -> Result<(), Error> {
        if s.len() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        let line = Line::new(s);
        if line.is_direct() {
            if line.is_empty() {
                return Ok(());
            }
            return Err(error!(DirectStatementInFile));
        }
        self.enter_indirect(line);
        Ok(())
    }

    pub fn interrupt(&mut self) {
        self.list = None;
        if self.state == State::Running || self.input.is_some() {
            let line = match self.state {
                State::Running => self.line,
                _ => None,
            };
            debug!(?line, "interrupted");
            self.errors.push(error!(Break, line));
            self.stop();
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        loop {
            if !self.errors.is_empty() {
                return Event::Errors(std::mem::take(&mut self.errors));
            }
            if self.input.is_some() {
                return Event::Input(INPUT_PROMPT.to_string());
            }
            if let Some(range) = &mut self.list {
                match self.program.list_line(range) {
                    Some(s) => return Event::List(s),
                    None => self.list = None,
                }
                continue;
            }
            if let Some(command) = self.direct.take() {
                if let Some(event) = self.command(command) {
                    return event;
                }
                continue;
            }
            return match self.state {
                State::Running => self.run(cycles),
                State::Idle | State::Terminated => Event::Stopped,
            };
        }
    }

    fn enter_indirect(&mut self, line: Line) {
        let number = match line.number() {
            Some(number) => number,
            None => return,
        };
        if line.is_empty() {
            if let Err(error) = self.program.remove(number) {
                self.errors.push(error.in_line_number(Some(number)));
            }
            return;
        }
        let ast = line.ast();
        if let Err(error) = self.program.insert(line) {
            self.errors.push(error);
            return;
        }
        match ast {
            Ok(statement) => {
                trace!(number, "line stored");
                if let Err(error) = self.program.set_statement(number, statement) {
                    self.errors.push(error.in_line_number(Some(number)));
                }
            }
            Err(error) => {
                debug!(number, %error, "line stored without statement");
                self.errors.push(error);
            }
        }
    }

    fn answer(&mut self, var_name: Rc<str>, s: &str) {
        match input_value(s) {
            Ok(value) => {
                if let Err(error) = self.program.var_mut().store(&var_name, value) {
                    let line = match self.state {
                        State::Running => self.line,
                        _ => None,
                    };
                    self.errors.push(error.in_line_number(line));
                    self.stop();
                }
            }
            Err(error) => {
                self.errors.push(error);
                self.input = Some(var_name);
            }
        }
    }

    fn command(&mut self, command: Command) -> Option<Event> {
        match command {
            Command::Run => {
                self.state = match self.program.begin() {
                    Some(first) => {
                        debug!(first, "run");
                        State::Running
                    }
                    None => State::Idle,
                };
                None
            }
            Command::List => {
                self.list = Some(1..=LineNumber::max_value());
                None
            }
            Command::Clear => {
                debug!("clear");
                self.program.clear();
                self.state = State::Idle;
                None
            }
            Command::Quit => Some(Event::Quit),
            Command::Help => Some(Event::Print(HELP.to_string())),
            Command::Statement(statement) => self.immediate(statement),
        }
    }

    fn immediate(&mut self, statement: Statement) -> Option<Event> {
        match statement.execute(&mut self.program) {
            Ok(effect) => self.effect(effect),
            Err(error) => {
                self.errors.push(error);
                None
            }
        }
    }

    fn effect(&mut self, effect: Effect) -> Option<Event> {
        match effect {
            Effect::Continue => None,
            Effect::Print(value) => Some(Event::Print(format!("{}\n", value))),
            Effect::Input(var_name) => {
                self.input = Some(var_name);
                Some(Event::Input(INPUT_PROMPT.to_string()))
            }
        }
    }

    fn run(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            let line_number = match self.program.cursor().current {
                Some(number) => number,
                None => {
                    debug!("program finished");
                    self.state = State::Idle;
                    return Event::Stopped;
                }
            };
            if let Some(event) = self.step(line_number) {
                return event;
            }
            if !self.errors.is_empty() {
                return Event::Errors(std::mem::take(&mut self.errors));
            }
        }
        Event::Running
    }

    /// Executes the statement on one line then moves the cursor.
    fn step(&mut self, line_number: u16) -> Option<Event> {
        trace!(line_number, "execute");
        self.line = Some(line_number);
        let statement = match self.program.statement(line_number) {
            Some(statement) => statement,
            None => {
                self.program.advance();
                return None;
            }
        };
        let effect = match statement.execute(&mut self.program) {
            Ok(effect) => effect,
            Err(error) => {
                let error = error.in_line_number(Some(line_number));
                if error.code() != ErrorCode::UndefinedLine {
                    debug!(%error, "run stopped");
                    self.stop();
                    return Some(Event::Errors(vec![error]));
                }
                self.errors.push(error);
                Effect::Continue
            }
        };
        if self.program.is_terminated() {
            debug!(line_number, "program ended");
            self.state = State::Terminated;
            return Some(Event::Stopped);
        }
        self.program.advance();
        self.effect(effect)
    }

    fn stop(&mut self) {
        self.state = State::Idle;
        self.input = None;
        self.program.stop();
    }
}
