//! CSV schedule window adapter.

use crate::domain::error::TradeclockError;
use crate::domain::schedule::Window;
use crate::ports::window_port::WindowPort;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 3] = ["begin", "end", "interval"];

/// Writes windows as `begin,end,interval` rows after a header line.
pub struct CsvAdapter<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvAdapter<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, TradeclockError> {
        let file = File::create(path.as_ref())?;
        log::debug!("writing windows to {}", path.as_ref().display());
        Self::new(file)
    }
}

impl<W: Write> CsvAdapter<W> {
    pub fn new(inner: W) -> Result<Self, TradeclockError> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(HEADER)?;
        Ok(Self { writer })
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W, TradeclockError> {
        self.writer
            .into_inner()
            .map_err(|e| TradeclockError::Io(e.into_error()))
    }
}

impl<W: Write> WindowPort for CsvAdapter<W> {
    fn write_window(&mut self, window: &Window) -> Result<(), TradeclockError> {
        self.writer
            .write_record([&window.begin, &window.end, &window.interval])?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TradeclockError> {
        self.writer.flush()?;
        Ok(())
    }
}
