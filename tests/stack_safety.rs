//! The property the trampoline exists for: summing a long list must not
//! deepen the call stack. We run it on a thread with a deliberately tiny
//! stack, where the equivalent direct recursion could not survive.

use assert2::check;
use bounce::sum_list;

#[test]
fn long_sum_completes_on_a_tiny_stack() {
    let items: Vec<i64> = (0..200_000).collect();
    let expected: i64 = items.iter().sum();

    // 64 KiB would be a few thousand recursive frames at most
    let handle = std::thread::Builder::new()
        .stack_size(64 * 1024)
        .spawn(move || sum_list(items))
        .expect("spawning the small-stack thread");
    let total = handle.join().expect("trampolined sum must not crash");

    check!(total == expected);
}
