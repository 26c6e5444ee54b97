use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};

#[test]
fn test_add_forward_exact() {
    let a = Value::new(0.1);
    let b = Value::new(0.2);
    let c = add_op(&a, &b);
    assert_eq!(c.data(), 0.1 + 0.2);
    assert_eq!(c.op_name(), Some("add"));
}

#[test]
fn test_add_backward_passes_gradient_through() {
    let a = Value::new(1.0);
    let b = Value::new(-4.0);
    let c = add_op(&a, &b);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn test_add_same_operand_twice() {
    let a = Value::new(5.0);
    let c = add_op(&a, &a);
    c.backward();
    assert_eq!(c.data(), 10.0);
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn test_add_backward_grad_check() -> Result<(), GradCheckError> {
    check_grad(|v| Ok(add_op(&v[0], &v[1])), &[0.3, -1.7], 1e-6, 1e-6)
}
