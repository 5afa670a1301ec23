//! Explicit context threading instead of ambient globals
//!
//! The original formulation of pipe/cond/branch/while sequencing parked its
//! scratch state in process-wide variables, which couples every call site to
//! every other one. Here the same operations hang off a [`Context`] value
//! that the caller owns and threads through explicitly: two contexts share
//! nothing, and dropping one drops all of its state.

use std::collections::HashMap;

pub use value::Value;

mod value;

/// The scratch state the sequencing operations read and write.
///
/// `pipe` is the single anonymous data slot, `cond` the condition flag for
/// [`Context::branch`], and `slots` the named bindings (`bind`/`get`).
#[derive(Debug, Clone, Default)]
pub struct Context {
    pipe: Value,
    cond: bool,
    slots: HashMap<Box<str>, Value>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SlotError {
    #[error("no slot named `{0}` is bound")]
    Unbound(Box<str>),
    #[error("slot `{0}` is not a table")]
    NotATable(Box<str>),
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the pipe slot.
    pub fn pipe(&self) -> &Value {
        &self.pipe
    }

    /// Replace the pipe slot, returning a borrow of the new value so the
    /// call composes like the get-or-set original did.
    pub fn set_pipe(&mut self, value: impl Into<Value>) -> &Value {
        self.pipe = value.into();
        &self.pipe
    }

    /// Read the condition flag.
    pub fn test(&self) -> bool {
        self.cond
    }

    /// Set the condition flag by coercing a value through its truthiness.
    pub fn set_cond(&mut self, value: impl Into<Value>) -> bool {
        self.cond = value.into().truthy();
        self.cond
    }

    /// Create or overwrite a named slot.
    pub fn bind(&mut self, name: impl AsRef<str>, value: impl Into<Value>) {
        self.slots.insert(Box::from(name.as_ref()), value.into());
    }

    /// Set one key inside a table slot.
    ///
    /// Keyed and attribute assignment both land here: without reflective
    /// field access an "object attribute" is just a table key.
    pub fn bind_key(
        &mut self,
        name: impl AsRef<str>,
        key: impl AsRef<str>,
        value: impl Into<Value>,
    ) -> Result<(), SlotError> {
        let name = name.as_ref();
        let slot = self
            .slots
            .get_mut(name)
            .ok_or_else(|| SlotError::Unbound(Box::from(name)))?;
        match slot {
            Value::Table(entries) => {
                entries.insert(Box::from(key.as_ref()), value.into());
                Ok(())
            }
            _ => Err(SlotError::NotATable(Box::from(name))),
        }
    }

    /// Read a named slot.
    pub fn get(&self, name: impl AsRef<str>) -> Result<&Value, SlotError> {
        let name = name.as_ref();
        self.slots
            .get(name)
            .ok_or_else(|| SlotError::Unbound(Box::from(name)))
    }

    /// Run exactly one of the two closures, chosen by the condition flag.
    ///
    /// Both arms must be lambda-lifted for the same reason as ever: so the
    /// untaken one is never evaluated.
    pub fn branch<T>(
        &mut self,
        on_true: impl FnOnce(&mut Self) -> T,
        on_false: impl FnOnce(&mut Self) -> T,
    ) -> T {
        if self.cond {
            on_true(self)
        } else {
            on_false(self)
        }
    }

    /// While `cond` holds, run `body`; yield the last body result, or `None`
    /// if the body never ran.
    pub fn whi<T>(
        &mut self,
        mut cond: impl FnMut(&mut Self) -> bool,
        mut body: impl FnMut(&mut Self) -> T,
    ) -> Option<T> {
        let mut result = None;
        while cond(self) {
            result = Some(body(self));
        }
        result
    }
}
