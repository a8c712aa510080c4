use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use signal_hook::consts::TERM_SIGNALS;
use signal_hook::flag;

use super::EXIT_INTERRUPTED;

/// Install SIGINT/SIGTERM handlers. The first signal sets the returned flag so
/// the driver stops before the next file; a second one exits immediately.
pub fn install() -> std::io::Result<Arc<AtomicBool>> {
    let interrupted = Arc::new(AtomicBool::new(false));
    for &signal in TERM_SIGNALS {
        // Order matters: the shutdown check must see the flag as set by a previous signal.
        flag::register_conditional_shutdown(signal, i32::from(EXIT_INTERRUPTED), Arc::clone(&interrupted))?;
        flag::register(signal, Arc::clone(&interrupted))?;
    }
    Ok(interrupted)
}
