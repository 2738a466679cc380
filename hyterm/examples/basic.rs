use std::io::Write;

use clap::{Parser, ValueEnum};
use hyterm::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Exhaustive,
    Dispatch,
}

/// Build a random expression, infer its type and reduce it
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Reduction strategy to use
    #[arg(short, long, value_enum, default_value_t = Strategy::Dispatch)]
    strategy: Strategy,

    /// Maximum nesting depth of the generated expression
    #[arg(short, long, default_value_t = 4)]
    depth: usize,

    /// Seed of the generator
    #[arg(long, default_value_t = 0x42)]
    seed: u64,

    /// Check right operands of every operator against number literals (legacy behavior)
    #[arg(long, default_value_t = false)]
    legacy_guard: bool,
}

fn random_tree(budget: usize, rng: &mut impl Rng) -> Node {
    if budget == 0 || rng.random_bool(0.25) {
        return if rng.random_bool(0.6) {
            number(rng.random_range(-9..=9))
        } else {
            boolean(rng.random_bool(0.5))
        };
    }

    let choice = rng.random_range(0..7);
    let mut next = || random_tree(budget - 1, &mut *rng);
    match choice {
        0 => add(next(), next()),
        1 => subtract(next(), next()),
        2 => less_than(next(), next()),
        3 => greater_than(next(), next()),
        4 => and(next(), next()),
        5 => or(next(), next()),
        _ => branch(next(), next(), next()),
    }
}

fn main() {
    let args = Args::parse();

    let config = ReducerConfig::new()
        .with_strategy(match args.strategy {
            Strategy::Exhaustive => StrategyKind::Exhaustive,
            Strategy::Dispatch => StrategyKind::Dispatch,
        })
        .with_right_operand_guard(if args.legacy_guard {
            RightOperandGuard::NumberLiteral
        } else {
            RightOperandGuard::OperandKind
        });
    let reducer = config.build();

    let mut rng = ChaCha20Rng::seed_from_u64(args.seed);
    let mut expr = random_tree(args.depth, &mut rng);

    let mut error_color = ColorSpec::new();
    error_color.set_fg(Some(termcolor::Color::Red));
    error_color.set_intense(true);

    let mut ok_color = ColorSpec::new();
    ok_color.set_fg(Some(termcolor::Color::Green));
    ok_color.set_intense(true);

    let stdout = StandardStream::stdout(ColorChoice::Auto);
    let mut stdout = stdout.lock();

    expr.pretty_print().unwrap();
    println!();

    match check_types(&mut expr) {
        Ok(ty) => writeln!(stdout, "type: {ty}").unwrap(),
        Err(e) => writeln!(stdout, "type: {e}").unwrap(),
    }

    match reducer.normalize(&mut expr) {
        Ok(value) => {
            stdout.set_color(&ok_color).unwrap();
            writeln!(stdout, "{} strategy reduced it to {value}", reducer.name()).unwrap();
            stdout.reset().unwrap();
        }
        Err(e) => {
            stdout.set_color(&error_color).unwrap();
            writeln!(stdout, "{e}").unwrap();
            stdout.reset().unwrap();
            writeln!(stdout, "stuck at:").unwrap();
            expr.pretty_render_to(80, &mut stdout).unwrap();
            writeln!(stdout).unwrap();
        }
    }
}
