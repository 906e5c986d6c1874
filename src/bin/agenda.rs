//! Interactive task tracker entry point.
//!
//! Wires locked stdin/stdout into the menu shell and runs until the user
//! selects exit from the main menu. Exits 0 on that path; any non-zero exit
//! comes from I/O failure or the input stream closing mid-prompt.

use agenda::logging;
use agenda::shell::{self, Console};
use agenda::task::services::TaskTracker;
use mockable::DefaultClock;
use std::io;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    logging::init_default()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut tracker = TaskTracker::new(DefaultClock);
    shell::run(&mut tracker, &mut console)?;
    Ok(())
}
