use std::env;
use std::io::{self, Read};
use std::process;

use textbook_algorithms::parse::{
    SolveError, run_fraction, run_range_sum, run_sliding_window, run_traversal,
};

type Runner = fn(&str) -> Result<String, SolveError>;

const EXERCISES: &[(&str, Runner)] = &[
    ("range-sum", run_range_sum),
    ("traversal", run_traversal),
    ("sliding-window", run_sliding_window),
    ("fraction", run_fraction),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = program_name(&args);

    if args.len() != 2 {
        print_usage(&program);
        process::exit(2);
    }

    let runner = match lookup(&args[1]) {
        Some(runner) => runner,
        None => {
            eprintln!("error: unknown exercise `{}`", args[1]);
            print_usage(&program);
            process::exit(2);
        }
    };

    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        eprintln!("error: {err}");
        process::exit(1);
    }

    match runner(&input) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn lookup(name: &str) -> Option<Runner> {
    EXERCISES
        .iter()
        .find(|(label, _)| *label == name)
        .map(|&(_, runner)| runner)
}

fn program_name(args: &[String]) -> String {
    args.first()
        .map(|s| s.as_str())
        .unwrap_or("solve")
        .to_string()
}

fn print_usage(program: &str) {
    eprintln!("usage: {program} <exercise>");
    eprintln!();
    eprintln!("Reads the exercise's judge-format input from stdin and prints");
    eprintln!("the answer lines to stdout. Exercises:");
    for (label, _) in EXERCISES {
        eprintln!("  {label}");
    }
}
