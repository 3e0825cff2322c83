//! Control sequences emitted to the rendering surface

pub const CLEAR_SCREEN: &str = "\x1b[2J";
pub const CURSOR_HOME: &str = "\x1b[H";
/// Erase the whole line and return to column 0
pub const CLEAR_LINE: &str = "\x1b[2K\r";
pub const ITALIC: &str = "\x1b[3m";
pub const GREEN: &str = "\x1b[32m";
pub const RESET: &str = "\x1b[0m";
pub const CRLF: &str = "\r\n";
/// Echoed on Ctrl+C
pub const INTERRUPT_MARKER: &str = "^C";
