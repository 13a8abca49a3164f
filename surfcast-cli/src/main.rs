//! Binary entry point for the Surfcast CLI.
#![forbid(unsafe_code)]

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = surfcast_cli::run() {
        report(&err);
        std::process::exit(1);
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn report(err: &surfcast_cli::CliError) {
    eprintln!("surfcast: {err}");
}
