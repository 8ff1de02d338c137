mod assess;
mod catalog;
mod cli;
mod infra;

use grant_match::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
