use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use matcalc_core::math::Matrix;
use matcalc_core::operation::Operation;
use matcalc_cli::calculator::{describe_operands, run_calculation};
use matcalc_cli::config::CalculationConfig;
use matcalc_cli::display::render_failure;
use matcalc_cli::presets::Preset;

fn parameter_args() -> [Arg; 3] {
    [
        Arg::new("scalar")
            .short('s')
            .long("scalar")
            .help("Multiplier for scalar multiplication")
            .value_parser(clap::value_parser!(f64))
            .allow_negative_numbers(true),
        Arg::new("exponent")
            .short('e')
            .long("exponent")
            .help("Integer exponent for matrix power; negative values invert first")
            .value_parser(clap::value_parser!(i32))
            .allow_negative_numbers(true),
        Arg::new("det_method")
            .long("det-method")
            .help("Determinant algorithm: exact cofactor expansion or LU factorisation")
            .value_parser(["cofactor", "lu"]),
    ]
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATCALC_LOG", "error,matcalc=info"))
        .init();

    let matches = Command::new("matcalc")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Matrix calculator: arithmetic, transpose, determinant, inverse, power and trace")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("calc")
                .about("Run one operation on matrices given on the command line")
                .arg(
                    Arg::new("operation")
                        .help("Operation to run, e.g. add, multiply, inverse, det, power")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("a")
                        .short('a')
                        .long("a")
                        .help("Matrix A as JSON rows, e.g. '[[1,2],[3,4]]', or @file")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("b")
                        .short('b')
                        .long("b")
                        .help("Matrix B as JSON rows or @file, for two-operand operations")
                        .allow_hyphen_values(true),
                )
                .args(parameter_args()),
        )
        .subcommand(
            Command::new("run")
                .about("Run the calculation described by a JSON configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to calculation configuration file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("operation")
                        .short('o')
                        .long("operation")
                        .help("Operation to run. Overrides the operation in the configuration file."),
                )
                .args(parameter_args()),
        )
        .subcommand(
            Command::new("example")
                .about("Show an example operand pair, optionally running an operation on it")
                .arg(
                    Arg::new("name")
                        .help("Example to load")
                        .required(true)
                        .value_parser(["identity2x2", "random3x3", "system"]),
                )
                .arg(
                    Arg::new("operation")
                        .short('o')
                        .long("operation")
                        .help("Operation to run on the example operands"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for the random example")
                        .value_parser(clap::value_parser!(u64)),
                )
                .args(parameter_args()),
        )
        .subcommand(
            Command::new("random")
                .about("Print a matrix with elements drawn uniformly from [min, max)")
                .arg(
                    Arg::new("rows")
                        .short('r')
                        .long("rows")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("cols")
                        .short('c')
                        .long("cols")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("min")
                        .long("min")
                        .default_value("-5")
                        .value_parser(clap::value_parser!(f64))
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("max")
                        .long("max")
                        .default_value("5")
                        .value_parser(clap::value_parser!(f64))
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(Command::new("operations").about("List the supported operations"))
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("calc", sub_m)) => {
            let config = CalculationConfig::from_matches(sub_m)?;
            calculate(&config)
        }
        Some(("run", sub_m)) => {
            let config_path: &PathBuf = sub_m.get_one("config").unwrap();
            log::info!("[matcalc] Running calculation from config: {:?}", config_path);
            let config = CalculationConfig::from_arguments(config_path, sub_m)?;
            calculate(&config)
        }
        Some(("example", sub_m)) => handle_example(sub_m),
        Some(("random", sub_m)) => handle_random(sub_m),
        Some(("operations", _)) => {
            for op in Operation::ALL {
                println!("{:<16}{}", op.name(), op);
            }
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn calculate(config: &CalculationConfig) -> Result<()> {
    match run_calculation(config) {
        Ok(text) => {
            print!("{}", text);
            Ok(())
        }
        Err(e) => {
            print!("{}", render_failure(config.operation, &e));
            std::process::exit(1)
        }
    }
}

fn handle_example(matches: &ArgMatches) -> Result<()> {
    let name: &String = matches.get_one("name").unwrap();
    let preset = Preset::from_str(name).map_err(anyhow::Error::msg)?;
    let seed = matches.get_one::<u64>("seed").copied();
    let (a, b) = preset.operands(seed)?;

    if matches.get_one::<String>("operation").is_none() {
        print!("{}", describe_operands(&a, &b));
        return Ok(());
    }

    let mut config = CalculationConfig {
        a: a.to_rows(),
        b: Some(b.to_rows()),
        ..CalculationConfig::default()
    };
    config.apply_overrides(matches)?;
    log::info!("[matcalc] Example {} with {}", preset, config.operation);
    calculate(&config)
}

fn handle_random(matches: &ArgMatches) -> Result<()> {
    let rows = *matches.get_one::<usize>("rows").unwrap();
    let cols = *matches.get_one::<usize>("cols").unwrap();
    let min = *matches.get_one::<f64>("min").unwrap();
    let max = *matches.get_one::<f64>("max").unwrap();

    let m = match matches.get_one::<u64>("seed") {
        Some(seed) => Matrix::random_seeded(rows, cols, min, max, *seed)?,
        None => Matrix::random(rows, cols, min, max, &mut rand::thread_rng())?,
    };
    print!("{}", m);
    Ok(())
}
