use clap::Parser;
use numconv::Base;
use numconv::core::config::{self, CliOverrides, ConfigNotes};
use numconv::shell;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "numconv", about = "Convert integers between binary, octal, decimal and hexadecimal")]
struct Args {
    /// Base of the input value
    #[arg(short, long, value_enum)]
    from: Option<Base>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Don't show 0b / 0o / 0x in front of results
    #[arg(long)]
    no_prefix: bool,

    /// Value to convert. Starts an interactive prompt when omitted.
    value: Option<String>,
}

fn main() -> io::Result<ExitCode> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config decides where logs go, so its messages wait until the logger exists
    let mut notes = ConfigNotes::default();
    let (file_config, load_error) = match config::load_config(&mut notes) {
        Ok(c) => (c, None),
        Err(e) => (Default::default(), Some(e)),
    };
    let cli = CliOverrides {
        base: args.from,
        no_prefix: args.no_prefix,
    };
    let config = config::resolve(&file_config, &cli, &mut notes);

    // File logger: stdout belongs to the conversion output
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
    notes.flush();

    if let Some(e) = load_error {
        log::warn!("Falling back to default config: {}", e);
        eprintln!("warning: {e}; using defaults");
    }

    log::info!("numconv starting with input base {}", config.base.radix());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.value {
        Some(value) => {
            let ok = shell::run_once(&config, &value, args.json, &mut out, &mut io::stderr())?;
            Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        None => {
            shell::run_interactive(&config, io::stdin().lock(), &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
