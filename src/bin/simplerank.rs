use clap::Parser;
use simplerank_core::cli::{handlers, Cli};
use simplerank_core::exit::RankExit;
use simplerank_core::reporting;

fn main() -> RankExit {
    let cli = Cli::parse();

    match handlers::handle_rank(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            reporting::print_error(&e);
            RankExit::for_error(&e)
        }
    }
}
