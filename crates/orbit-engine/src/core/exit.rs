use std::io::BufRead;

/// Process exit code after a failed initialization.
pub const INIT_FAILURE_EXIT_CODE: i32 = -1;

/// Reports a fatal startup error and terminates the process.
///
/// The full context chain goes to stderr, then the process waits for Enter so
/// the message stays visible when launched from a file manager.
pub fn exit_with_error(err: &anyhow::Error) -> ! {
    log::error!("{err:#}");
    eprintln!("Error: {err:?}");
    eprintln!("Press Enter to exit.");

    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);

    std::process::exit(INIT_FAILURE_EXIT_CODE);
}
