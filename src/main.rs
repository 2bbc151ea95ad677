use actiontime::app::{handle_fatal_error, init_logging, AppConfig};
use actiontime::cli::{execute_command, Cli};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let config = match AppConfig::resolve(verbose, cli.config.as_deref(), cli.max_action_len) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&AppConfig::new(verbose));
            handle_fatal_error(e.into(), verbose)
        }
    };
    init_logging(&config);

    if let Err(e) = execute_command(cli.command, &config).await {
        handle_fatal_error(e, verbose);
    }
}
