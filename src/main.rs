use std::io::{self, BufRead, Write};

use clap::Parser;
use polish::{Environment, evaluate};
use tracing_subscriber::EnvFilter;

/// polish is a reverse Polish notation calculator with session variables.
///
/// Without arguments it starts an interactive prompt where every line is
/// evaluated in the same session, so variables assigned on one line can be
/// used on the next.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single expression, prints the result and exits.
    #[arg(short, long)]
    expr: Option<String>,

    /// Evaluates the built-in sample expressions, prints the expected and
    /// actual result of each, then the bindings left in the session.
    #[arg(short, long, conflicts_with = "expr")]
    self_test: bool,
}

/// Sample expressions and the results they are expected to print. They run in
/// one session, so the last sample sees the variable bound by the one before.
const SELF_TEST_SAMPLES: &[(&str, f64)] = &[("3 5 * 2 + 7 -", 10.0),
                                            ("3 5 10 + *", 45.0),
                                            ("1 3.14 sin +", 1.0),
                                            ("1", 1.0),
                                            ("2 pi *", 6.28),
                                            ("x 3 =", 3.0),
                                            ("x", 3.0)];

fn main() {
    init_tracing();

    let args = Args::parse();
    let mut env = Environment::new();

    if args.self_test {
        run_self_test(&mut env);
        return;
    }

    if let Some(expr) = args.expr {
        match evaluate(expr.trim(), &mut env) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = run_prompt(&mut env) {
        eprintln!("Failed to read input: {e}");
        std::process::exit(1);
    }
}

/// Installs a stderr subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=polish=trace`.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                                 .with_target(true)
                                 .with_writer(io::stderr)
                                 .init();
    }
}

fn run_self_test(env: &mut Environment) {
    for &(expr, expected) in SELF_TEST_SAMPLES {
        match evaluate(expr, env) {
            Ok(actual) => println!("Test \"{expr}\", expected: {expected}, actual: {actual}"),
            Err(e) => println!("Test \"{expr}\", expected: {expected}, actual: {e}"),
        }
    }

    let bindings = env.bindings()
                      .iter()
                      .map(|(name, value)| format!("{name} = {value}"))
                      .collect::<Vec<_>>();
    println!("Bindings: {}", bindings.join(", "));
}

/// Reads lines until end of input, printing each result or error.
fn run_prompt(env: &mut Environment) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        let expr = line.trim();
        if expr.is_empty() {
            continue;
        }

        match evaluate(expr, env) {
            Ok(value) => writeln!(stdout, "{value}")?,
            Err(e) => writeln!(stdout, "{e}")?,
        }
    }
}
