use super::*;

#[test]
fn test_neg_forward() {
    assert_eq!(neg_op(&Value::new(2.5)).data(), -2.5);
    assert_eq!(neg_op(&Value::new(-1.0)).data(), 1.0);
}

#[test]
fn test_neg_is_mul_by_minus_one() {
    let a = Value::new(4.0);
    let b = neg_op(&a);
    assert_eq!(b.op_name(), Some("mul"));
    assert_eq!(b.parents()[1].data(), -1.0);

    b.backward();
    assert_eq!(a.grad(), -1.0);
}
