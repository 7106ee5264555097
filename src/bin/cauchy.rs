//! cauchy binary - command-line front end for the field, matrix and erasure-code library
//!
//! Byte lists are either contiguous hex (`dadb0d`) or comma separated hex
//! bytes (`da,db,0d`); a run of `?` marks an unknown byte.

use anyhow::{anyhow, bail, Context, Result};
use cauchy_erasure::carryless::{
    carryless_div_big, carryless_mul_big, compute_intermediates, ArithmeticType,
};
use cauchy_erasure::{
    compute_parity, compute_parity_matrix, compute_reconstruction_intermediates, reconstruct_data,
    row_reduce_states, BigRational, Field, Field256Element, Field257Element, Matrix, OutputConfig,
    RowReduceState,
};
use clap::{Arg, ArgAction, ArgMatches, Command};
use num_bigint::{BigInt, BigUint};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let format_arg = Arg::new("format")
        .short('f')
        .long("format")
        .help("Byte output format: hex or dec")
        .value_name("FORMAT")
        .value_parser(["hex", "dec", "decimal"])
        .default_value("hex");
    let latex_arg = Arg::new("latex")
        .long("latex")
        .help("Print matrices as LaTeX")
        .action(ArgAction::SetTrue);

    let matches = Command::new("cauchy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finite-field arithmetic, matrix inversion and Cauchy erasure coding")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parity")
                .visible_alias("p")
                .about("Compute parity bytes over GF(2^8)")
                .arg(
                    Arg::new("data")
                        .help("Data bytes in hex")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("parity_count")
                        .short('m')
                        .long("parity-count")
                        .help("Number of parity bytes")
                        .value_name("M")
                        .default_value("2"),
                )
                .arg(format_arg.clone())
                .arg(latex_arg.clone()),
        )
        .subcommand(
            Command::new("reconstruct")
                .visible_alias("r")
                .about("Reconstruct data bytes from any n known data or parity bytes")
                .arg(
                    Arg::new("data")
                        .help("Data bytes in hex, '?' for unknown")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("parity")
                        .help("Parity bytes in hex, '?' for unknown")
                        .required(true)
                        .index(2),
                )
                .arg(format_arg.clone())
                .arg(latex_arg.clone()),
        )
        .subcommand(
            Command::new("invert")
                .visible_alias("i")
                .about("Invert a square matrix")
                .arg(
                    Arg::new("rows")
                        .help("Rows separated by ';', elements by ','")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("field")
                        .long("field")
                        .help("Field: gf256, gf257 or rational")
                        .value_name("FIELD")
                        .default_value("gf257"),
                )
                .arg(
                    Arg::new("steps")
                        .long("steps")
                        .help("Print every row operation")
                        .action(ArgAction::SetTrue),
                )
                .arg(latex_arg.clone()),
        )
        .subcommand(
            Command::new("carryless")
                .visible_alias("c")
                .about("Carry-less multiplication or division of two integers")
                .arg(
                    Arg::new("op")
                        .help("mul or div")
                        .required(true)
                        .value_parser(["mul", "div"])
                        .index(1),
                )
                .arg(Arg::new("a").required(true).index(2))
                .arg(Arg::new("b").required(true).index(3))
                .arg(
                    Arg::new("trace")
                        .long("trace")
                        .help("Show the long-division steps")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parity", sub)) => run_parity(sub),
        Some(("reconstruct", sub)) => run_reconstruct(sub),
        Some(("invert", sub)) => run_invert(sub),
        Some(("carryless", sub)) => run_carryless(sub),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn run_parity(matches: &ArgMatches) -> Result<()> {
    let config = OutputConfig::from_args(matches);
    let data = parse_bytes(required(matches, "data")?)?;
    let m: usize = required(matches, "parity_count")?
        .parse()
        .context("parity count must be a non-negative integer")?;

    let parity = compute_parity(&data, m).context("Failed to compute parity")?;

    if config.latex {
        let p = compute_parity_matrix::<Field256Element>(data.len(), m)?;
        println!("{}", p.to_latex_string(&config.byte_latex_options("pmatrix")));
    }
    println!("p = [{}]", config.format_bytes(&parity));
    Ok(())
}

fn run_reconstruct(matches: &ArgMatches) -> Result<()> {
    let config = OutputConfig::from_args(matches);
    let partial_d = parse_maybe_bytes(required(matches, "data")?)?;
    let partial_p = parse_maybe_bytes(required(matches, "parity")?)?;

    if config.latex {
        let intermediates = compute_reconstruction_intermediates(&partial_d, &partial_p)?;
        let options = config.byte_latex_options("pmatrix");
        println!("M = {}", intermediates.matrix.to_latex_string(&options));
        println!(
            "M^{{-1}} = {}",
            intermediates.matrix.inverse()?.to_latex_string(&options)
        );
    }

    let d = reconstruct_data(&partial_d, &partial_p).context("Failed to reconstruct data")?;
    println!("d = [{}]", config.format_bytes(&d));
    Ok(())
}

fn run_invert(matches: &ArgMatches) -> Result<()> {
    let rows = required(matches, "rows")?;
    match required(matches, "field")? {
        "gf256" => invert_in::<Field256Element>(matches, rows),
        "gf257" => invert_in::<Field257Element>(matches, rows),
        "rational" => invert_in::<BigRational>(matches, rows),
        other => bail!("unknown field: {}", other),
    }
}

fn invert_in<F: ParseElement>(matches: &ArgMatches, rows: &str) -> Result<()> {
    let config = OutputConfig::from_args(matches);
    let m = parse_matrix::<F>(rows)?;
    log::debug!("Inverting {}x{} matrix over {}", m.rows(), m.columns(), F::NAME);

    if matches.get_flag("steps") {
        for state in row_reduce_states(&m)? {
            println!("{}:", state);
            println!("{}", config.render_matrix(state.a_left()));
            println!("{}", config.render_matrix(state.a_right()));
            println!();
            if let RowReduceState::Singular { .. } = state {
                bail!("matrix is singular");
            }
        }
        return Ok(());
    }

    let inverse = m.inverse().context("Failed to invert matrix")?;
    println!("{}", config.render_matrix(&inverse));
    Ok(())
}

fn run_carryless(matches: &ArgMatches) -> Result<()> {
    let a = parse_biguint(required(matches, "a")?)?;
    let b = parse_biguint(required(matches, "b")?)?;

    match required(matches, "op")? {
        "mul" => println!("{}", carryless_mul_big(&a, &b)),
        "div" => {
            if matches.get_flag("trace") {
                for step in compute_intermediates(&a, &b, ArithmeticType::CarryLess)? {
                    let indent = " ".repeat(step.offset as usize);
                    println!("{}{}", indent, step.intermediate.to_str_radix(2));
                }
            }
            let (q, r) = carryless_div_big(&a, &b)?;
            println!("q = {}, r = {}", q, r);
        }
        other => bail!("unknown operation: {}", other),
    }
    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing argument: {}", name))
}

fn parse_bytes(s: &str) -> Result<Vec<Field256Element>> {
    parse_maybe_bytes(s)?
        .into_iter()
        .enumerate()
        .map(|(i, b)| b.ok_or_else(|| anyhow!("byte {} is unknown", i)))
        .collect()
}

fn parse_maybe_bytes(s: &str) -> Result<Vec<Option<Field256Element>>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    if !s.contains(',') && !s.contains('?') {
        let bytes = hex::decode(s).with_context(|| format!("invalid hex bytes: {}", s))?;
        return Ok(bytes.into_iter().map(|b| Some(Field256Element::from(b))).collect());
    }
    s.split(',').map(|t| parse_maybe_byte(t.trim())).collect()
}

fn parse_maybe_byte(t: &str) -> Result<Option<Field256Element>> {
    if t.contains('?') {
        if !t.chars().all(|c| c == '?') {
            bail!("{} must be a run of question marks or a hex byte", t);
        }
        return Ok(None);
    }
    let b = u8::from_str_radix(t, 16).with_context(|| format!("invalid hex byte: {}", t))?;
    Ok(Some(Field256Element::from(b)))
}

fn parse_biguint(s: &str) -> Result<BigUint> {
    s.parse()
        .with_context(|| format!("{} is not a non-negative integer", s))
}

fn parse_matrix<F: ParseElement>(s: &str) -> Result<Matrix<F>> {
    let rows: Vec<Vec<F>> = s
        .split(';')
        .map(|row| row.split(',').map(|e| F::parse(e.trim())).collect::<Result<Vec<F>>>())
        .collect::<Result<_>>()?;
    let columns = rows.first().map(|r| r.len()).unwrap_or(0);
    if rows.iter().any(|r| r.len() != columns) {
        bail!("all rows must have {} elements", columns);
    }
    let row_count = rows.len();
    Ok(Matrix::new(
        row_count,
        columns,
        rows.into_iter().flatten().collect(),
    )?)
}

/// Parsing of matrix elements from decimal text
trait ParseElement: Field {
    fn parse(s: &str) -> Result<Self>;
}

impl ParseElement for Field256Element {
    fn parse(s: &str) -> Result<Self> {
        let n: usize = s.parse().with_context(|| format!("invalid element: {}", s))?;
        Ok(Field256Element::new(n)?)
    }
}

impl ParseElement for Field257Element {
    fn parse(s: &str) -> Result<Self> {
        let n: usize = s.parse().with_context(|| format!("invalid element: {}", s))?;
        Ok(Field257Element::new(n)?)
    }
}

impl ParseElement for BigRational {
    fn parse(s: &str) -> Result<Self> {
        let (n, d) = match s.split_once('/') {
            Some((n, d)) => (n.trim(), d.trim()),
            None => (s, "1"),
        };
        let n: BigInt = n.parse().with_context(|| format!("invalid numerator: {}", n))?;
        let d: BigInt = d.parse().with_context(|| format!("invalid denominator: {}", d))?;
        Ok(BigRational::new(n, d)?)
    }
}
