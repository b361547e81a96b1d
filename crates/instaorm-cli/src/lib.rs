mod catalog;
mod check;
mod cli;
mod config;
mod logging;

pub async fn run(args: Vec<String>) -> anyhow::Result<()> {
    let cmd = cli::parse_args(&args)?;
    dotenvy::dotenv().ok();
    if let Some(verbosity) = cmd.verbosity() {
        logging::init(verbosity);
    }

    match cmd {
        cli::Command::Help => {
            cli::print_help();
            Ok(())
        }
        cli::Command::List(args) => catalog::list(args),
        cli::Command::Render(args) => catalog::render(args),
        cli::Command::Check(args) => check::run(args).await,
    }
}
