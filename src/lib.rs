//! # Line BASIC
//!
//! A small BASIC with numbered lines and integer arithmetic.
//!
//! Start the executable to get a `>` prompt. Numbered lines are stored
//! as a program, anything else runs right away.
//! ```text
//! > 10 LET A = 1
//! > 20 PRINT A
//! > 30 LET A = A + 1
//! > 40 IF A < 4 THEN 20
//! > RUN
//! 1
//! 2
//! 3
//! ```
//!
//! A program file can be named on the command line to load it before
//! the first prompt.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod lang;
pub mod mach;
pub mod term;
