//! Shell completions generation.

use std::io::Write;

use clap::Args;
use clap_complete::Shell;

/// Generate shell completions
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> crate::error::Result<()> {
    write_completions(args.shell, &mut std::io::stdout());
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = <super::Cli as clap::CommandFactory>::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}
