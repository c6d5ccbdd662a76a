use log::info;
use monthly_balance_sheet::{run, RunConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let config = RunConfig::default();
    match run(&config) {
        Ok(sheet) => {
            info!(
                "Balance sheet with {} months written to {}",
                sheet.len(),
                config.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
