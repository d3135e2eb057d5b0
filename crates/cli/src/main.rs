use extls_cli::args::Args;
use extls_cli::error::Result;
use extls_cli::presentation;
use extls_engine::options::ListOptions;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse_from(std::env::args().skip(1))?;

    let options = ListOptions {
        root: args.dir,
        show_hidden: args.hidden,
    };

    let groups = extls_engine::run(&options)?;
    presentation::print_groups(&groups)?;
    Ok(())
}
