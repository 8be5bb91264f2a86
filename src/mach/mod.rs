/*!
## Rust Machine Module

This Rust module stores and runs BASIC programs.

*/

mod eval;
mod exec;
mod program;
mod runtime;
mod var;

pub use exec::input_value;
pub use exec::Effect;
pub use program::Cursor;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::State;
pub use runtime::{INPUT_PROMPT, MAX_LINE_LEN};
pub use var::Var;
