//! Shell completions generation.

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
    let mut cmd = <super::Cli as clap::CommandFactory>::command();
    clap_complete::generate(args.shell, &mut cmd, "bsp-loader", &mut std::io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        super::super::Cli::command().debug_assert();
    }

    #[test]
    fn test_bash_completions_name_subcommands() {
        let mut cmd = super::super::Cli::command();
        let mut out = Vec::new();

        clap_complete::generate(Shell::Bash, &mut cmd, "bsp-loader", &mut out);

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("generate"));
        assert!(script.contains("missions"));
    }
}
