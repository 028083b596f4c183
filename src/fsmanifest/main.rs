use clap::Parser;

mod cli;
use cli::Cli;

fn main() {
    let args = Cli::parse();
    cli::init_logging(args.verbose);

    if let Err(e) = cli::run(&args) {
        eprintln!("Application failed: {}", e);
        std::process::exit(1);
    }
}
