// src/main.rs

use script_runner::cli::{self, ParseExit};
use script_runner::{logging, run};

#[tokio::main]
async fn main() {
    let args = match cli::parse() {
        Ok(args) => args,
        Err(ParseExit::Info(err)) => {
            let _ = err.print();
            return;
        }
        Err(ParseExit::Usage(_)) => {
            println!("{}", cli::USAGE);
            std::process::exit(1);
        }
    };

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("script_runner error: {err:?}");
        std::process::exit(1);
    }

    run(args).await;
}
