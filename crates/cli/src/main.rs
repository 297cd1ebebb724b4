use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    dircontainer_cli::run()
}
