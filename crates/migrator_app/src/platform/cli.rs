use std::path::PathBuf;

use clap::Parser;

/// Rewrite legacy IDWS forum links in BBCode posts.
#[derive(Debug, Parser)]
#[command(name = "idws-migrator", version)]
pub struct Cli {
    /// File holding the post markup. Reads stdin when omitted or `-`.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the converted post here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// RON file overriding the source and target hosts.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write logs to this file.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log debug details.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&std::path::Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_stdin() {
        let cli = Cli::parse_from(["idws-migrator", "--input", "-"]);
        assert!(cli.input_path().is_none());

        let cli = Cli::parse_from(["idws-migrator", "-i", "post.txt", "-v"]);
        assert_eq!(cli.input_path(), Some(std::path::Path::new("post.txt")));
        assert!(cli.verbose);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
