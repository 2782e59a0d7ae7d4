use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::PathBuf;
use vcsdis::bus::{CartBus, SimBus, peek_word};
use vcsdis::dis::{DisasmOptions, disassemble};
use vcsdis::parse::CartConfigAst;

//===========================================================================//

macro_rules! invalid_data {
    ($e:expr) => {
        return Err(::std::io::Error::new(::std::io::ErrorKind::InvalidData,
                                         $e))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err(::std::io::Error::new(::std::io::ErrorKind::InvalidData,
                                         format!($fmt, $($arg)+)))
    };
}

//===========================================================================//

/// The address of the 6507 reset vector.
const RESET_VECTOR: u32 = 0xfffc;

#[derive(Parser)]
#[clap(author, about, long_about = None, version)]
struct Cli {
    /// Log more detail to stderr (repeat for even more).
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Disassembles one bank of a cartridge image.
    Dis {
        /// The cartridge image to disassemble.
        rom: PathBuf,
        /// The address to start from; defaults to the reset vector.
        #[clap(long, value_parser = parse_addr)]
        entry: Option<u16>,
        /// The 4kB bank to disassemble.
        #[clap(long, default_value_t = 0)]
        bank: usize,
        /// A directive file naming extra entry points, graphics and data.
        #[clap(long)]
        config: Option<PathBuf>,
        /// List every byte not marked otherwise as code, without following
        /// control flow.
        #[clap(long)]
        no_autocode: bool,
    },
}

fn parse_addr(arg: &str) -> Result<u16, String> {
    let result = if let Some(hex) = arg.strip_prefix('$') {
        u16::from_str_radix(hex, 16)
    } else if let Some(hex) =
        arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X"))
    {
        u16::from_str_radix(hex, 16)
    } else {
        arg.parse::<u16>()
    };
    result.map_err(|error| format!("invalid address {arg:?}: {error}"))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

//===========================================================================//

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Command::Dis { rom, entry, bank, config, no_autocode } => {
            let bus = match CartBus::new(fs::read(&rom)?.into(), bank) {
                Ok(bus) => bus,
                Err(error) => invalid_data!("{}: {}", rom.display(), error),
            };
            let entry =
                entry.unwrap_or_else(|| peek_word(&bus, RESET_VECTOR));
            let mut options = DisasmOptions::new(entry);
            options.autocode = !no_autocode;
            options.bank_size = bus.bank_size();
            if let Some(path) = config {
                let source = fs::read_to_string(&path)?;
                match CartConfigAst::parse_source(&source) {
                    Ok(ast) => ast.apply(&mut options),
                    Err(errors) => {
                        for error in errors.iter() {
                            let (line, column) =
                                error.span.line_and_column(&source);
                            eprintln!(
                                "{}:{line}:{column}: {error}",
                                path.display()
                            );
                        }
                        invalid_data!(
                            "{}: {} error(s) in directive file",
                            path.display(),
                            errors.len()
                        );
                    }
                }
            }
            let listing = match disassemble(&bus, &options) {
                Ok(listing) => listing,
                Err(error) => invalid_data!(error.to_string()),
            };
            println!("; {}", bus.description());
            print!("{listing}");
        }
    }
    Ok(())
}

//===========================================================================//


//===========================================================================//
