use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};

#[test]
fn test_relu_forward() {
    assert_eq!(relu_op(&Value::new(-1.0)).data(), 0.0);
    assert_eq!(relu_op(&Value::new(0.0)).data(), 0.0);
    assert_eq!(relu_op(&Value::new(2.0)).data(), 2.0);
}

#[test]
fn test_relu_negative_blocks_gradient() {
    let a = Value::new(-1.0);
    let b = relu_op(&a);
    let c = &b * 7.0;
    c.backward();
    assert_eq!(b.grad(), 7.0);
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_relu_positive_passes_gradient_unchanged() {
    let a = Value::new(2.0);
    let b = relu_op(&a);
    let c = &b * 7.0;
    c.backward();
    assert_eq!(a.grad(), 7.0);
}

#[test]
fn test_relu_at_zero_has_zero_gradient() {
    let a = Value::new(0.0);
    relu_op(&a).backward();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_relu_backward_grad_check() -> Result<(), GradCheckError> {
    // Away from the kink on both sides.
    check_grad(|v| Ok(relu_op(&v[0])), &[0.5], 1e-6, 1e-6)?;
    check_grad(|v| Ok(relu_op(&v[0])), &[-0.5], 1e-6, 1e-6)
}
