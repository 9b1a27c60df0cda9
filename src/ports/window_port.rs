//! Schedule window output port trait.

use crate::domain::error::TradeclockError;
use crate::domain::schedule::Window;

/// Port for emitting schedule windows.
pub trait WindowPort {
    fn write_window(&mut self, window: &Window) -> Result<(), TradeclockError>;

    fn flush(&mut self) -> Result<(), TradeclockError>;
}
