//! Audible feedback through the terminal bell

use crate::engine::{Feedback, Output};

/// BEL control character
const BEL: &str = "\x07";

/// Rings the bell when a command runs and when the session opens or closes
pub struct Bell {
    output: Output,
    enabled: bool,
}

impl Bell {
    pub fn new(output: Output, enabled: bool) -> Self {
        Self { output, enabled }
    }

    fn ring(&self) {
        if self.enabled {
            self.output.write(BEL);
        }
    }
}

impl Feedback for Bell {
    fn command_executed(&self) {
        self.ring();
    }

    fn session_opened(&self) {
        self.ring();
    }

    fn session_closed(&self) {
        self.ring();
    }
}
