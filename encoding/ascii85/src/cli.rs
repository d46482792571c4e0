// Command line front-end: `ascii85 encode` / `ascii85 decode` over files or
// stdin/stdout.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::{decode, encode_with, EncodeOptions, DEFAULT_LINE_WIDTH};

/// ASCII85 (btoa / Adobe) encoder/decoder.
#[derive(Parser, Debug)]
#[command(
    name = "ascii85",
    version,
    about = "ASCII85 encoder/decoder",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Encode binary input as ASCII85.
    Encode(EncodeArgs),
    /// Decode ASCII85 input back to binary.
    Decode(IoArgs),
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Input file, stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Output file, stdout when omitted.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Do not wrap the output in `<~` and `~>`.
    #[arg(long)]
    no_delimiters: bool,

    /// Characters per line, 0 disables line breaks.
    #[arg(short = 'w', long, default_value_t = DEFAULT_LINE_WIDTH)]
    wrap: usize,
}

impl EncodeArgs {
    fn options(&self) -> EncodeOptions {
        EncodeOptions {
            use_delimiters: !self.no_delimiters,
            line_width: self.wrap,
        }
    }
}

fn log_level(cli: &Cli) -> &'static str {
    match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    match path {
        Some(path) if path != Path::new("-") => {
            File::open(path)?.read_to_end(&mut data)?;
        }
        _ => {
            io::stdin().lock().read_to_end(&mut data)?;
        }
    }
    Ok(data)
}

fn write_output(path: Option<&Path>, data: &[u8]) -> io::Result<()> {
    let mut writer: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    writer.write_all(data)?;
    writer.flush()
}

fn describe(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "stdin".to_string(),
    }
}

fn cmd_encode(args: &EncodeArgs) -> i32 {
    let input = args.io.input.as_deref();
    let data = match read_input(input) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("ascii85: input: {}: {e}", describe(input));
            return 1;
        }
    };

    let encoded = encode_with(&data, &args.options());
    log::info!("encoded {} bytes into {} characters", data.len(), encoded.len());

    if let Err(e) = write_output(args.io.output.as_deref(), &encoded) {
        eprintln!("ascii85: write error: {e}");
        return 1;
    }
    0
}

fn cmd_decode(args: &IoArgs) -> i32 {
    let input = args.input.as_deref();
    let data = match read_input(input) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("ascii85: input: {}: {e}", describe(input));
            return 1;
        }
    };

    let decoded = match decode(&data) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("ascii85: {}: {e}", describe(input));
            return 1;
        }
    };
    log::info!("decoded {} characters into {} bytes", data.len(), decoded.len());

    if let Err(e) = write_output(args.output.as_deref(), &decoded) {
        eprintln!("ascii85: write error: {e}");
        return 1;
    }
    0
}

pub fn run() -> ! {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(&cli)))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let exit_code = match &cli.command {
        Cmd::Encode(args) => cmd_encode(args),
        Cmd::Decode(args) => cmd_decode(args),
    };

    process::exit(exit_code);
}
