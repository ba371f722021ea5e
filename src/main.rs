use anyhow::Result;
use taskman::commands::Cli;

fn main() -> Result<()> {
    Cli::menu()
}
