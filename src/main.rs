use std::{env, process};

use rand::rngs::StdRng;
use rand::SeedableRng;
use regexgen::flags::Flags;
use regexgen::{Args, Generator};

fn print_usage() {
    eprintln!(
        "Usage: regexgen-cli <pattern> [--n N] [--seed S] [--min-unbounded M] \
         [--max-unbounded M] [--perl] [--perlx] [-v|-vv]"
    );
}

fn main() {
    let mut args = env::args().skip(1);
    let pattern = match args.next() {
        Some(p) => p,
        None => {
            print_usage();
            process::exit(2);
        }
    };

    // Defaults
    let mut n: usize = 1;
    let mut seed: Option<u64> = None;
    let mut min_unbounded: Option<u32> = None;
    let mut max_unbounded: Option<u32> = None;
    let mut flags = Flags::empty();
    let mut verbosity: u8 = 0;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--n" => {
                if let Some(v) = args.next() {
                    n = v.parse().unwrap_or(1);
                }
            }
            "--seed" => {
                if let Some(v) = args.next() {
                    seed = v.parse().ok();
                }
            }
            "--min-unbounded" => {
                if let Some(v) = args.next() {
                    min_unbounded = v.parse().ok();
                }
            }
            "--max-unbounded" => {
                if let Some(v) = args.next() {
                    max_unbounded = v.parse().ok();
                }
            }
            "--perl" => flags |= Flags::PERL,
            "--perlx" => flags |= Flags::PERLX,
            "-v" => verbosity = verbosity.max(1),
            "-vv" => verbosity = verbosity.max(2),
            _ => {
                eprintln!("Unknown arg: {}", arg);
                print_usage();
                process::exit(2);
            }
        }
    }

    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut gen_args = Args::new().with_flags(flags);
    if let Some(min) = min_unbounded {
        gen_args = gen_args.with_min_unbounded_repeat_count(min);
    }
    if let Some(max) = max_unbounded {
        gen_args = gen_args.with_max_unbounded_repeat_count(max);
    }
    if let Some(s) = seed {
        gen_args = gen_args.with_rng_source(StdRng::seed_from_u64(s));
    }

    let generator = match Generator::new(&pattern, gen_args) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Failed to build generator: {e}");
            process::exit(1);
        }
    };

    for _ in 0..n {
        match generator.generate() {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Generation error: {e}");
                process::exit(1);
            }
        }
    }
}
