//! Fake tail recursion: run a logically recursive function on a flat loop
//!
//! Instead of making its recursive call directly, a step function returns the
//! call packaged as a zero-argument closure. The driver unwraps one closure
//! per loop iteration, so the native call stack stays at a constant depth no
//! matter how many logical steps the computation takes. (This is trampolining;
//! it rhymes with continuation-passing style but the continuations here only
//! ever point "forward" down a single linear chain.)

/// A deferred step: invoking it produces the next [`Step`].
///
/// The closure owns whatever remaining input and accumulator state the step
/// needs. Nothing else holds that state; each thunk hands it off wholesale to
/// the one it returns.
pub type Thunk<T> = Box<dyn FnOnce() -> Step<T>>;

/// The tagged outcome of one trampoline iteration.
pub enum Step<T> {
    /// Terminal: the final value of the whole computation.
    Done(T),
    /// There is more work; the thunk produces the next step.
    More(Thunk<T>),
}

impl<T> Step<T> {
    /// Defer `next` as the following step, boxing it in place.
    pub fn more(next: impl FnOnce() -> Step<T> + 'static) -> Self {
        Self::More(Box::new(next))
    }
}

/// Drive a step function to completion and return its final value.
///
/// Calls `step(arg)` for the first [`Step`], then keeps invoking returned
/// thunks until one yields [`Step::Done`]. Stack depth is O(1) in the number
/// of logical steps; every step result is consumed and dropped within the
/// iteration that produced it. The driver itself cannot fail. If a thunk
/// panics, the panic propagates to the caller untouched.
pub fn run<A, T>(step: impl FnOnce(A) -> Step<T>, arg: A) -> T {
    let mut current = step(arg);
    loop {
        match current {
            Step::Done(value) => return value,
            Step::More(thunk) => current = thunk(),
        }
    }
}

fn sum_step(mut items: Vec<i64>, total: i64) -> Step<i64> {
    match items.pop() {
        None => Step::Done(total),
        // For a sum the end we consume from is immaterial; pop the back
        // because it is the cheap end of a Vec.
        Some(item) => Step::more(move || sum_step(items, total + item)),
    }
}

/// Sum a list through the trampoline.
///
/// Safe for arbitrarily long input; see [`sum_list_recursive`] for the
/// version that is not.
pub fn sum_list(items: Vec<i64>) -> i64 {
    run(|items| sum_step(items, 0), items)
}

/// The naive direct-recursion sum that [`sum_list`] exists to replace.
///
/// Correct, but every element deepens the call stack, so a long enough input
/// blows it. Kept as the contrast case for the demos and tests.
pub fn sum_list_recursive(items: Vec<i64>) -> i64 {
    fn aux(mut items: Vec<i64>, total: i64) -> i64 {
        match items.pop() {
            None => total,
            Some(item) => aux(items, total + item),
        }
    }
    aux(items, 0)
}

#[cfg(test)]
mod tests {
    use super::{run, sum_list, sum_list_recursive, Step};
    use arbtest::arbtest;
    use assert2::check;

    #[test]
    fn empty_list_sums_to_zero() {
        check!(sum_list(vec![]) == 0);
    }

    #[test]
    fn single_element() {
        check!(sum_list(vec![5]) == 5);
    }

    #[test]
    fn driver_runs_are_independent() {
        // Two fresh instances of the same logical computation; nothing is
        // shared between them, so both must agree.
        check!(sum_list(vec![1, 2, 3]) == 6);
        check!(sum_list(vec![1, 2, 3]) == 6);
    }

    #[test]
    fn front_and_back_consumption_agree() {
        // A step function that eats the *front* instead. O(n) per step, but
        // the lists here are four elements long.
        fn front_step(mut items: Vec<i64>, total: i64) -> Step<i64> {
            if items.is_empty() {
                Step::Done(total)
            } else {
                let item = items.remove(0);
                Step::more(move || front_step(items, total + item))
            }
        }
        let front = run(|items| front_step(items, 0), vec![1, 2, 3, 4]);
        check!(front == 10);
        check!(sum_list(vec![1, 2, 3, 4]) == 10);
    }

    #[test]
    fn agrees_with_recursive_baseline() {
        let items: Vec<i64> = (0..100).collect();
        check!(sum_list(items.clone()) == sum_list_recursive(items));
    }

    #[test]
    fn sum_arbtest() {
        arbtest(|u| {
            // i32 inputs widened to i64 so the total cannot overflow
            let raw: Vec<i32> = u.arbitrary()?;
            let items: Vec<i64> = raw.iter().map(|&x| i64::from(x)).collect();
            let expected: i64 = items.iter().sum();
            check!(
                sum_list(items.clone()) == expected,
                "{items:?} does not sum like Iterator::sum"
            );
            Ok(())
        });
    }

    #[test]
    fn driver_is_generic_over_the_step_function() {
        // countdown: not a sum, just a different linear chain
        fn count(n: u32) -> Step<u32> {
            if n == 0 {
                Step::Done(0)
            } else {
                Step::more(move || count(n - 1))
            }
        }
        check!(run(count, 10_000) == 0);
    }
}
