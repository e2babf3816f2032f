use clap::Parser;
use std::ffi::OsString;
use std::io::Write;

mod dumper;
mod error;
mod input;
mod output;
mod request;

/// Print raw little-endian float32 dump files as indexed complex rows
#[derive(Parser, Debug)]
#[command(name = "iq-dump")]
#[command(version, about, long_about = None)]
struct Args {
    /// Exit with a non-zero status if any file could not be read
    #[arg(long)]
    strict: bool,

    /// Files to dump. A leading `-1` and any `V`/`NV` tokens are ignored;
    /// with no files, bitrev_output.hex and fft_output.hex are dumped.
    /// Options must come before the first file
    #[arg(value_name = "TOKENS", trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<OsString>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let paths = request::normalize_request(&args.tokens);
    log::debug!("Dumping {:?}", paths);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = dumper::dump_files(&mut out, &paths)?;
    out.flush()?;

    if args.strict && summary.any_failed() {
        std::process::exit(1);
    }

    Ok(())
}
