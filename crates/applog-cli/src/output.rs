/// Prints the failure to stderr and terminates the process.
///
/// The library never exits on its own; this is the one place a logging
/// failure becomes fatal, with exit code 1 for shell scripts and CI.
pub fn fatal(err: &anyhow::Error) -> ! {
    eprintln!("fatal: {:#}", err);
    std::process::exit(1);
}
