mod args;
mod value_enum;

pub use args::Args;
use clap::Parser;
pub use value_enum::CliLogLevel;

pub fn parse() -> Args {
    Args::parse()
}
