// Declare the element-wise math modules
pub mod exp;
pub mod tanh;

// Re-export the public functions
pub use exp::exp_op;
pub use tanh::tanh_op;
