// src/logging.rs
use std::io::Write;

use log::LevelFilter;

/// Initializes env_logger. `RUST_LOG`, when set, overrides `log_level`.
/// The format is `<level> <target> <HH:MM:SS> <message>`.
pub fn init_logging(log_level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format(|buf, record| {
            let time = chrono::Local::now().format("%H:%M:%S");
            writeln!(buf, "{:7}{:24} {time} {}", record.level(), record.target(), record.args())
        })
        .target(env_logger::Target::Stderr)
        .try_init();
}
