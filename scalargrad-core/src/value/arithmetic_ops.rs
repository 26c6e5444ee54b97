// src/value/arithmetic_ops.rs
//
// std::ops overloads for `Value`, in every owned/borrowed combination and with raw `f64`
// on either side. Raw numbers are wrapped as fresh leaves.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &Value::new(rhs))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &Value::new(rhs))
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Value::new(self), rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::new(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}
