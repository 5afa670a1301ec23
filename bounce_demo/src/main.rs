use std::time::Instant;

use anyhow::ensure;
use bounce::{iff, seq, seq2, sum_list, sum_list_recursive, Context, Value};
use clap::{Parser, Subcommand};
use yansi::Paint;

/// Console walkthroughs of control flow built from zero-argument closures
#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    demo: Demo,
}

#[derive(Subcommand)]
enum Demo {
    /// Trampolined list sum checked against a loop and Iterator::sum
    Sum,
    /// Average wall time of the trampolined, hand-looped, and iterator sums
    Bench,
    /// Lambda-lifted iff and seq in action
    Combinators,
    /// Pipe, cond, branch, and while threaded through an explicit context
    Pipeline,
}

fn heading(text: &str) {
    println!("\n{}", text.bold().blue());
}

fn loop_sum(items: &[i64]) -> i64 {
    let mut total = 0;
    for item in items {
        total += item;
    }
    total
}

fn long_list() -> Vec<i64> {
    (0..10_000).collect()
}

fn sum_demo() -> anyhow::Result<()> {
    let items = long_list();
    let expected: i64 = items.iter().sum();

    heading("trampolined sum");
    let total = sum_list(items.clone());
    println!("sum of 0..10000 = {total}");
    ensure!(total == expected, "trampolined sum is incorrect");

    heading("naive loop");
    let total = loop_sum(&items);
    println!("sum of 0..10000 = {total}");
    ensure!(total == expected, "loop sum is incorrect");

    // The direct recursion handles this length on a default main-thread
    // stack; push it much past ~100k elements and it won't.
    heading("direct recursion (same length, default stack)");
    let total = sum_list_recursive(items);
    println!("sum of 0..10000 = {total}");
    ensure!(total == expected, "recursive sum is incorrect");

    println!("\nall three agree: {}", "ok".green());
    Ok(())
}

fn average_secs(mut run: impl FnMut() -> i64, expected: i64) -> anyhow::Result<f64> {
    const ROUNDS: u32 = 20;
    let mut total = 0.0;
    for _ in 0..ROUNDS {
        let start = Instant::now();
        let result = run();
        total += start.elapsed().as_secs_f64();
        ensure!(result == expected, "benchmarked sum is incorrect");
    }
    Ok(total / f64::from(ROUNDS))
}

fn bench_demo() -> anyhow::Result<()> {
    let items = long_list();
    let expected: i64 = items.iter().sum();

    heading("running each sum 20 times");
    let tramp = average_secs(|| sum_list(items.clone()), expected)?;
    let looped = average_secs(|| loop_sum(&items), expected)?;
    let iterator = average_secs(|| items.iter().sum(), expected)?;

    println!("avg time, trampolined sum:  {tramp:.9}s");
    println!("avg time, hand-rolled loop: {looped:.9}s");
    println!("avg time, Iterator::sum:    {iterator:.9}s");
    Ok(())
}

fn combinators_demo() {
    heading("seq: three prints, left to right");
    seq!(println!("A"), println!("B"), println!("C"));

    heading("seq2: first for effect, second for value");
    let gift10 = |msg: &str| seq2(println!("{msg}"), 10);
    let gift20 = |msg: &str| seq2(println!("{msg}"), 20);
    let result = seq2(
        gift10("Hi. Throwing away 10."),
        gift20("Bye. Returning 20."),
    );
    println!("seq2 result: {result}");

    heading("iff: only the taken branch evaluates");
    iff(
        5 > 2,
        || println!("true branch, this prints"),
        || println!("false branch, this never runs"),
    );

    heading("ten or twenty");
    let ten_or_twenty = |b: bool| {
        iff(
            b,
            || seq2(println!("true branch!"), gift10("Returning 10.")),
            || seq2(println!("false branch!"), gift20("Returning 20.")),
        )
    };
    println!("passing true:  got {}", ten_or_twenty(true));
    println!("passing false: got {}", ten_or_twenty(false));
}

fn pipeline_demo() -> anyhow::Result<()> {
    let mut ctx = Context::new();

    heading("countdown through the pipe slot");
    ctx.set_pipe(10);
    ctx.whi(
        |c| c.pipe().as_number().is_some_and(|n| n > 0),
        |c| {
            println!("running body because >0: {}", c.pipe());
            let n = c.pipe().as_number().unwrap_or(0);
            c.set_pipe(n - 1);
        },
    );
    println!("final: {}", ctx.pipe());

    heading("math lesson");
    ctx.set_cond(2 + 2 == 4);
    ctx.branch(
        |_| println!("yeah, 2+2==4"),
        |_| println!("no, 2+2==5"),
    );
    println!("now you know!");

    heading("named slots instead of ambient globals");
    println!("setting x to 7");
    ctx.bind("x", 7);
    println!("setting y to 9");
    ctx.bind("y", 9);
    println!("setting z to the sum");
    let x = ctx.get("x")?.as_number().unwrap_or(0);
    let y = ctx.get("y")?.as_number().unwrap_or(0);
    ctx.bind("z", x + y);
    println!("value of z: {}", ctx.get("z")?);

    heading("keyed slots");
    ctx.bind("car", Value::Table(Default::default()));
    ctx.bind_key("car", "color", "blue")?;
    println!("car is now: {}", ctx.get("car")?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().demo {
        Demo::Sum => sum_demo(),
        Demo::Bench => bench_demo(),
        Demo::Combinators => {
            combinators_demo();
            Ok(())
        }
        Demo::Pipeline => pipeline_demo(),
    }
}
