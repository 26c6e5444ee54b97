use crate::value::Value;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Any operation that creates a non-leaf [`Value`] must have an associated `BackwardOp`
/// implementation. It is stored in the output node's `grad_fn` field and used during
/// [`backward`](crate::autograd::backward) to propagate gradients according to the chain rule.
///
/// Implementations capture everything they need at creation time (the operand handles and
/// the local values the derivative depends on), so a later `set_data` on a leaf does not
/// change the derivative of a graph that was already built.
pub trait BackwardOp: Debug {
    /// Computes the contribution to each input's gradient, given the gradient of the
    /// backward root with respect to this operation's output (`grad_output`).
    ///
    /// For an operation `out = f(x_1, ..., x_n)` this returns
    /// `grad_output * d(out)/d(x_i)` for every input `i`.
    ///
    /// # Returns
    /// One contribution per input. The order **must** strictly match the order of
    /// [`inputs()`](BackwardOp::inputs); the driver adds each contribution (`+=`) into the
    /// corresponding input's `grad`. Returning more or fewer contributions than there are
    /// inputs is a broken implementation and makes the backward pass panic.
    fn backward(&self, grad_output: f64) -> Vec<f64>;

    /// Returns the nodes that participated in the forward operation (the parents of the
    /// output node). An input may appear more than once (e.g. `a * a`).
    fn inputs(&self) -> Vec<Value>;

    /// Short operation name, used for debugging and logging.
    fn name(&self) -> &'static str;
}
