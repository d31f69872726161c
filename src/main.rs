//! tplt's main application entry point.

use tplt::{
    cli::get_args, commands::run, error::default_error_handler, logger::init_logger,
    prompt::terminal_prompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let prompt = terminal_prompter();
    if let Err(err) = run(args, &*prompt) {
        default_error_handler(err);
    }
}
