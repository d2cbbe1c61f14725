//! A minimal `log` backend which writes each record to stderr.

use std::io;
use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: SimpleLogger = SimpleLogger;

pub struct SimpleLogger;

impl SimpleLogger {
    /// Installs the logger for the whole process. Fails if a logger is already installed.
    pub fn init(max_log_level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER).map(|()| log::set_max_level(max_log_level))
    }
}

fn format_record(record: &Record) -> String {
    format!("[{}] [{}] {}", record.metadata().target(), record.level(), record.args())
}

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use log::Level;

    #[test]
    fn test_format_record() {
        assert_eq!(format_record(&Record::builder()
                                     .args(format_args!("built field descriptor {}", "[I"))
                                     .level(Level::Debug)
                                     .target("jvm_descriptor::builder")
                                     .build()),
                   "[jvm_descriptor::builder] [DEBUG] built field descriptor [I");
    }
}
