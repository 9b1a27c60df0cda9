#![allow(dead_code)]

use std::io::Write;
use tradeclock::domain::error::TradeclockError;
use tradeclock::domain::schedule::Window;
use tradeclock::ports::window_port::WindowPort;

/// Collects windows in memory.
#[derive(Default)]
pub struct MemoryWindowPort {
    pub windows: Vec<Window>,
    pub flushed: bool,
}

impl WindowPort for MemoryWindowPort {
    fn write_window(&mut self, window: &Window) -> Result<(), TradeclockError> {
        self.windows.push(window.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TradeclockError> {
        self.flushed = true;
        Ok(())
    }
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Every interval token in both tables.
pub const ALL_TOKENS: [&str; 16] = [
    "1m", "2m", "5m", "15m", "30m", "60m", "90m", "1h", "2h", "4h", "12h", "1d", "5d", "1wk",
    "1mo", "3mo",
];
