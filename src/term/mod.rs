/*!
## Terminal Module

Connects a `Runtime` to a line editor on the controlling terminal.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

pub fn main(file: Option<&Path>, cycles: usize) -> io::Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .map_err(|error| io::Error::new(ErrorKind::Other, error.to_string()))?;
    let mut runtime = Runtime::new();
    if let Some(path) = file {
        load(&mut runtime, path)?;
    }
    main_loop(&mut runtime, interrupted, cycles)
}

fn main_loop(
    runtime: &mut Runtime,
    interrupted: Arc<AtomicBool>,
    cycles: usize,
) -> io::Result<()> {
    let command = Interface::new("BASIC")?;
    command.set_prompt("> ")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(cycles) {
            Event::Stopped => match command.read_line()? {
                ReadResult::Input(string) => {
                    if runtime.enter(&string) {
                        command.add_history_unique(string);
                    }
                }
                ReadResult::Signal(_) | ReadResult::Eof => break,
            },
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        runtime.enter(&string);
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                }
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    write_error(&command, &error.to_string())?;
                }
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::List(s) => {
                command.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Quit => break,
        }
    }
    debug!("session ended");
    Ok(())
}

fn write_error<T: Terminal>(interface: &Interface<T>, s: &str) -> io::Result<()> {
    interface.write_fmt(format_args!("{}\n", Style::new().bold().paint(format!("?{}", s))))
}

/// Stores every numbered line of a program file. Lines that fail to parse
/// are kept and their errors are reported at the first prompt.
fn load(runtime: &mut Runtime, path: &Path) -> io::Result<()> {
    let reader = BufReader::new(File::open(path)?);
    let mut count = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Err(error) = runtime.load_str(&line) {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!(
                    "?{}; in line {} of {} (not BASIC line number)",
                    error,
                    index + 1,
                    path.display()
                ),
            ));
        }
        count += 1;
    }
    info!(path = %path.display(), count, "program loaded");
    Ok(())
}
