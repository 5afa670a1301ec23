//! Lambda-lifted conditionals and sequencing
//!
//! These exist to show the trick, not because Rust needs it: a native `if`
//! already evaluates exactly one branch, and a block already sequences its
//! statements. Wrapping a branch in a zero-argument closure ("lambda
//! lifting") is how you recover those guarantees in a setting where all you
//! have is function application.

/// Lambda-lifted `if`: exactly one of the two closures is invoked.
pub fn iff<T>(cond: bool, on_true: impl FnOnce() -> T, on_false: impl FnOnce() -> T) -> T {
    if cond {
        on_true()
    } else {
        on_false()
    }
}

/// Sequence two expressions through argument position, yielding the second.
///
/// This leans on Rust's guarantee that function arguments are evaluated left
/// to right, so `first` has run to completion (side effects and all) before
/// `second` starts. Neither argument should be lambda-lifted; pass the
/// expressions themselves.
pub fn seq2<A, T>(first: A, second: T) -> T {
    drop(first);
    second
}

/// Sequence any number of expressions, yielding the last.
///
/// Rust has no variadic functions, so unlike `seq2` this is a block
/// expansion; the ordering is structural rather than an evaluation-order
/// convention.
#[macro_export]
macro_rules! seq {
    ($last:expr $(,)?) => { $last };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let _ = $first;
        $crate::seq!($($rest),+)
    }};
}
