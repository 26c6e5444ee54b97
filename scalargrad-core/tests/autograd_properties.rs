use approx::assert_relative_eq;
use scalargrad_core::autograd::grad_check::check_grad;
use scalargrad_core::{topological_sort, Value};

mod common;
use common::init_logger;

#[test]
fn known_expression_regression() {
    init_logger();
    let a = Value::new(-4.0);
    let b = Value::new(2.0);
    let mut c = &a + &b;
    let mut d = &(&a * &b) + &b.pow(3.0).unwrap();
    c = &c + &(&c + 1.0);
    c = &c + &(&(1.0 + &c) + &(-&a));
    d = &d + &(&(&d * 2.0) + &(&b + &a).relu());
    d = &d + &(&(3.0 * &d) + &(&b - &a).relu());
    let e = &c - &d;
    let f = e.pow(2.0).unwrap();
    let mut g = &f / 2.0;
    g = &g + &(10.0 / &f);
    g.backward();

    assert_relative_eq!(g.data(), 24.70408163265306, epsilon = 1e-9);
    assert_relative_eq!(a.grad(), 138.83381924198252, epsilon = 1e-9);
    assert_relative_eq!(b.grad(), 645.5772594752186, epsilon = 1e-9);
}

#[test]
fn composite_expression_matches_finite_differences() {
    init_logger();
    check_grad(
        |v| {
            let (x, y, z) = (&v[0], &v[1], &v[2]);
            let num = &(x * y).tanh() + &z.exp();
            let den = &y.pow(2.0)? + 1.0;
            Ok(&(&num / &den) - &(x - z).relu())
        },
        &[0.3, -1.2, 0.7],
        1e-6,
        1e-5,
    )
    .expect("gradients should match");
}

#[test]
fn reused_value_accumulates() {
    let a = Value::new(3.0);
    let b = &a + &a;
    b.backward();
    assert_eq!(a.grad(), 2.0);

    let x = Value::new(3.0);
    let y = &x * &x;
    y.backward();
    assert_eq!(x.grad(), 6.0);
}

#[test]
fn topological_order_ends_with_root() {
    let a = Value::new(1.0);
    let b = Value::new(2.0);
    let c = &(&a * &b) + &a;
    let order = topological_sort(&c);
    assert_eq!(order.len(), 4);
    assert_eq!(order.last().map(Value::id), Some(c.id()));
}

#[test]
fn intermediate_values_are_captured_at_creation() {
    let a = Value::new(2.0);
    let b = Value::new(5.0);
    let c = &a * &b;
    a.set_data(100.0).expect("leaf");
    c.backward();
    assert_eq!(c.data(), 10.0);
    assert_eq!(a.grad(), 5.0);
    assert_eq!(b.grad(), 2.0);
}
