use clap::{Parser, Subcommand};

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Do not ask before changing the relay list
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show connected relays
    List,
    /// Show suggested relays from the directory (`*` marks connected ones)
    Suggest,
    /// Add a relay
    Add { url: String },
    /// Remove a relay
    Remove { url: String },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case(&["relayman", "list"], Command::List, false)]
    #[case(&["relayman", "suggest"], Command::Suggest, false)]
    #[case(&["relayman", "add", "wss://a"], Command::Add { url: String::from("wss://a") }, false)]
    #[case(&["relayman", "remove", "wss://a", "--yes"], Command::Remove { url: String::from("wss://a") }, true)]
    #[case(&["relayman", "-y", "add", "wss://a"], Command::Add { url: String::from("wss://a") }, true)]
    fn test_parse(#[case] args: &[&str], #[case] command: Command, #[case] yes: bool) {
        let cli = Cli::try_parse_from(args).expect("arguments parse");
        assert_eq!(cli.command, command);
        assert_eq!(cli.yes, yes);
    }

    #[test]
    fn test_add_requires_url() {
        assert!(Cli::try_parse_from(["relayman", "add"]).is_err());
    }
}
