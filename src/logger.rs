//! Logger setup for programs embedding the refinement routines
//!

use crate::PROGRAM_NAME;

fn get_level_filter(debug: bool) -> log::LevelFilter {
    if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Build the stderr log dispatcher without installing it
///
fn get_logger(debug: bool) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                PROGRAM_NAME,
                record.level(),
                message
            ))
        })
        .level(get_level_filter(debug))
        .chain(std::io::stderr())
}

/// Install the global logger, writing to stderr
///
/// If debug is true set the logger to the more verbose debug level
///
/// This fails if a global logger has already been installed.
///
pub fn setup_logger(debug: bool) -> Result<(), log::SetLoggerError> {
    get_logger(debug).apply()
}
