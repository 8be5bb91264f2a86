use crate::error;
use crate::lang::{Column, Error};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Names are case-sensitive. There is no implicit zero:
/// fetching a name that was never stored is an error.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, i32>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn fetch(&self, var_name: &str, col: &Column) -> Result<i32> {
        match self.vars.get(var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(UndefinedVariable, ..col)),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: i32) -> Result<()> {
        if let Some(var) = self.vars.get_mut(var_name) {
            *var = value;
            return Ok(());
        }
        if self.vars.len() > u16::max_value() as usize {
            return Err(error!(OutOfMemory));
        }
        self.vars.insert(var_name.clone(), value);
        Ok(())
    }
}
