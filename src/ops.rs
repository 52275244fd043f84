//! Operator utility families.
//!
//! Free-function factories producing concrete expression nodes per scalar
//! pairing. Each family is independent of the others and usable standalone.

pub mod abs;
pub mod arith;
pub mod cast;
pub mod divide;
pub mod negate;
pub mod pow;
pub mod sign;

pub use abs::{abs, abs_nullable};
pub use arith::{minus, minus_const, multiply, multiply_const, plus, plus_const};
pub use cast::{cast, cast_nullable};
pub use divide::{divide, divide_const};
pub use negate::{negate, negate_bool, negate_bool_nullable, negate_nullable};
pub use pow::{pow, pow_const, pow_f, pow_f_const};
pub use sign::{sign, sign_nullable};
