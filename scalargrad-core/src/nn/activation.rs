use crate::ops::activation::relu_op;
use crate::ops::math_elem::tanh_op;
use crate::value::Value;

/// Non-linearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Relu,
    Tanh,
}

impl Activation {
    pub fn apply(self, x: &Value) -> Value {
        match self {
            Activation::Relu => relu_op(x),
            Activation::Tanh => tanh_op(x),
        }
    }
}
