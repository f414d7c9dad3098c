use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use ini2json::{
    to_json_writer, to_json_writer_pretty, Casing, Error, RawValues, Reader, ReaderOptions,
    Recorder, Result, TypedValues,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "ini2json")]
#[command(version, about = "Convert INI files to typed JSON")]
#[command(
    after_help = "If no files are passed or \"-\" is passed, input is read from standard input."
)]
struct Cli {
    /// Input files; "-" reads standard input
    paths: Vec<String>,

    /// Separator for [prefix] and field names
    #[arg(short, long, default_value = ".", value_name = "SEP")]
    separator: String,

    /// Case transformation: l lowercases all keys, u uppercases, - does nothing
    #[arg(short = 'C', long, default_value = "-", value_name = "TFORM")]
    casing: String,

    /// Any field without a value is assigned this value
    #[arg(short = 't', long, default_value = "true", value_name = "TRUE")]
    true_value: String,

    /// Merge all input files into a single JSON output
    #[arg(short, long)]
    merge: bool,

    /// Print compact JSON output
    #[arg(short, long)]
    compact: bool,

    /// Do not parse values (integers, floats, bools, JSON)
    #[arg(short, long)]
    raw: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let casing = match cli.casing.as_str() {
        "l" => Casing::Lower,
        "u" => Casing::Upper,
        "-" => Casing::Preserve,
        other => {
            eprintln!("ini2json: invalid case value {other:?}: must be one of l, u, or -");
            return ExitCode::from(2);
        }
    };

    let options = ReaderOptions::new()
        .with_separator(&cli.separator)
        .with_casing(casing)
        .with_true_value(&cli.true_value);
    let reader = Reader::with_options(options);

    // Mode selection happens exactly once; everything downstream is
    // generic over the recorder.
    let result = if cli.raw {
        run::<RawValues>(&cli, &reader)
    } else {
        run::<TypedValues>(&cli, &reader)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ini2json: {e}");
            ExitCode::from(1)
        }
    }
}

/// Reads every input into a recorder of type `V`, emitting one JSON
/// document per input, or a single document at the end under `--merge`.
fn run<V>(cli: &Cli, reader: &Reader) -> Result<()>
where
    V: Recorder + Serialize + Default,
{
    let paths = if cli.paths.is_empty() {
        vec!["-".to_string()]
    } else {
        cli.paths.clone()
    };

    let mut values = V::default();
    for path in &paths {
        read_into(reader, &mut values, path)
            .map_err(|e| Error::message(format!("unable to parse {path}: {e}")))?;

        if cli.merge {
            continue;
        }
        emit(&values, cli.compact)?;
        values = V::default();
    }

    if cli.merge {
        emit(&values, cli.compact)?;
    }
    Ok(())
}

fn read_into<V>(reader: &Reader, dest: &mut V, path: &str) -> Result<()>
where
    V: Recorder,
{
    match path {
        "-" => reader.read(io::stdin().lock(), dest),
        path => {
            let file = File::open(path).map_err(|e| Error::io(&e.to_string()))?;
            reader.read(file, dest)
        }
    }
}

fn emit<V>(values: &V, compact: bool) -> Result<()>
where
    V: Serialize,
{
    let mut stdout = io::stdout().lock();
    if compact {
        to_json_writer(&mut stdout, values)?;
    } else {
        to_json_writer_pretty(&mut stdout, values)?;
    }
    stdout
        .write_all(b"\n")
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
