use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Create the configuration file and the bucket directory.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.bucket.clone(), cli.test)?;
    Ok(())
}
