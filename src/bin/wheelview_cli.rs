//! CLI tool for wheelview - renders a lottery wheel to SVG or scene JSON
//!
//! Usage:
//!   wheelview_cli lotofacil 1,5,25 --strategy hot_numbers   # SVG to stdout
//!   wheelview_cli megasena 4,8,15 -o wheel.svg              # SVG to file
//!   wheelview_cli quina --json                              # Scene as JSON
//!   wheelview_cli bingo 1,2 --profiles table.json           # Custom profiles

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use wheelview::render::write_svg;
use wheelview::wheel::scene_for;
use wheelview::{ProfileTable, Strategy, WheelConfig};

const USAGE: &str = "Usage: wheelview_cli <lotteryType> [numbers] [--strategy s] [--profiles table.json] [--json] [-o output]";

struct Args {
    lottery_type: String,
    numbers: Vec<i64>,
    strategy: Strategy,
    profiles_path: Option<String>,
    json: bool,
    output_path: Option<String>,
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn parse_numbers(list: &str) -> Vec<i64> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse()
                .unwrap_or_else(|_| fail(&format!("Invalid number: {s}")))
        })
        .collect()
}

fn parse_args(args: &[String]) -> Args {
    if args.len() < 2 {
        fail(USAGE);
    }

    let mut parsed = Args {
        lottery_type: args[1].clone(),
        numbers: Vec::new(),
        strategy: Strategy::default(),
        profiles_path: None,
        json: false,
        output_path: None,
    };

    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--strategy" => {
                let value = rest.next().unwrap_or_else(|| fail(USAGE));
                parsed.strategy = Strategy::from_key(value);
            }
            "--profiles" => parsed.profiles_path = Some(rest.next().unwrap_or_else(|| fail(USAGE)).clone()),
            "-o" => parsed.output_path = Some(rest.next().unwrap_or_else(|| fail(USAGE)).clone()),
            "--json" => parsed.json = true,
            other if other.starts_with('-') => fail(&format!("Unknown option: {other}\n{USAGE}")),
            list => parsed.numbers.extend(parse_numbers(list)),
        }
    }
    parsed
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let args = parse_args(&args);

    // Profile table
    let profiles = match &args.profiles_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .unwrap_or_else(|e| fail(&format!("Error reading {path}: {e}")));
            ProfileTable::from_json(&json)
                .unwrap_or_else(|e| fail(&format!("Error loading profiles: {e}")))
        }
        None => ProfileTable::builtin(),
    };

    let config = WheelConfig::new(&args.lottery_type, args.numbers, args.strategy);
    if let Some(profile) = profiles.get(&config.lottery_type) {
        let stray = config.out_of_range(profile);
        if !stray.is_empty() {
            eprintln!(
                "Warning: {stray:?} outside {}-{}, not highlighted",
                profile.min(),
                profile.max()
            );
        }
    }

    let scene = scene_for(&profiles, &config).unwrap_or_else(|e| fail(&e.to_string()));

    let output = if args.json {
        serde_json::to_string_pretty(&scene)
            .unwrap_or_else(|e| fail(&format!("Error serializing JSON: {e}")))
    } else {
        write_svg(&scene).unwrap_or_else(|e| fail(&format!("Error writing SVG: {e}")))
    };

    // Output
    match args.output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &output) {
                fail(&format!("Error writing {path}: {e}"));
            }
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(output.as_bytes()).unwrap();
            println!();
        }
    }
}
