use std::io;

fn main() {
    sequence_cli::logging::init_logging();
    let code = sequence_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
