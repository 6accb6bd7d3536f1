use anyhow::{Context, Result};
use colored::*;
use optional_value::comparison::{functional, imperative, EMPTY_MESSAGE, NO_RESULT_MESSAGE};
use std::env;

mod build_info {
    include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
}

const DEFAULT_INPUTS: [&[f64]; 3] = [&[1.0, 2.0, 3.0], &[], &[0.0]];

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!(
            "{} {} ({} {}, built {})",
            build_info::PKG_NAME,
            build_info::VERSION,
            build_info::GIT_HASH,
            build_info::PROFILE,
            build_info::BUILD_TIME
        );
        return Ok(());
    }

    if args.is_empty() {
        for input in DEFAULT_INPUTS {
            compare(input);
        }
        return Ok(());
    }

    let input = parse_inputs(&args)?;
    compare(&input);
    Ok(())
}

fn parse_inputs(args: &[String]) -> Result<Vec<f64>> {
    args.iter()
        .map(|arg| {
            arg.parse::<f64>()
                .with_context(|| format!("'{}' is not a number", arg))
        })
        .collect()
}

fn compare(input: &[f64]) {
    println!("{}", format!("{:?}", input).blue());

    let functional = functional(input);
    if functional == EMPTY_MESSAGE {
        println!("  functional: {}", functional.yellow());
    } else {
        println!("  functional: {}", functional.green());
    }

    let imperative = imperative(input);
    if imperative == NO_RESULT_MESSAGE {
        println!("  imperative: {}", imperative.yellow());
    } else {
        println!("  imperative: {}", imperative.green());
    }
}
