//! Logging Setup

/// Install the fmt subscriber on stderr when verbose output is requested.
/// Quiet runs stay silent so stdout carries nothing but the prompts.
pub fn init(verbose: bool) {
    if !verbose {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
