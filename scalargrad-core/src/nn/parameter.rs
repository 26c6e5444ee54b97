use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A wrapper around a leaf [`Value`] indicating it is a learnable parameter of a Module.
///
/// Parameters are the only nodes that outlive a forward pass. An external optimizer reads
/// their `grad()`, writes a new value with `set_data()` and resets them with `zero_grad()`,
/// all reachable through `Deref`.
pub struct Parameter(Value);

impl Parameter {
    /// Creates a new Parameter holding a fresh leaf initialized to `data`.
    pub fn new(data: f64) -> Self {
        Parameter(Value::new(data))
    }

    /// The graph node of this parameter; use it as an operand to build expressions.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Consumes the Parameter and returns the underlying Value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

// Allow accessing the underlying Value immutably via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
