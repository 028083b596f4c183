use clap::Parser;
use std::sync::OnceLock;

/// `--version` text: the bare package version for release builds, otherwise
/// the version stamped with the commit it was built from.
fn version() -> &'static str {
    static STAMPED: OnceLock<String> = OnceLock::new();
    STAMPED.get_or_init(|| {
        stamp_version(
            env!("CARGO_PKG_VERSION"),
            env!("GIT_HASH"),
            env!("GIT_COMMIT_DATE"),
            env!("IS_RELEASE") == "true",
        )
    })
}

fn stamp_version(version: &str, hash: &str, date: &str, release: bool) -> String {
    match (release, hash) {
        (true, _) | (false, "") => version.to_owned(),
        (false, hash) => format!("{version}@{hash} {date}"),
    }
}

#[derive(Parser, Debug)]
#[command(name = "fsmanifest", bin_name = "fsmanifest", version = version())]
#[command(
    about = "Process a message using data files located through runfiles",
    after_help = "Examples:\n  fsmanifest --message \"Hello World\"\n  fsmanifest --json\n  fsmanifest --reverse --message \"One Two Three\"\n  fsmanifest --test-request"
)]
pub struct Cli {
    /// Message to process (defaults to the configured greeting)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Reverse word order
    #[arg(short, long)]
    pub reverse: bool,

    /// Test HTTP request capability
    #[arg(short, long)]
    pub test_request: bool,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["fsmanifest"]).unwrap();
        assert_eq!(cli.message, None);
        assert!(!cli.json && !cli.reverse && !cli.test_request);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["fsmanifest", "-m", "hi there", "-j", "-r", "-t", "-vv"])
            .unwrap();
        assert_eq!(cli.message.as_deref(), Some("hi there"));
        assert!(cli.json && cli.reverse && cli.test_request);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "fsmanifest",
            "--message",
            "x",
            "--json",
            "--reverse",
            "--test-request",
        ])
        .unwrap();
        assert_eq!(cli.message.as_deref(), Some("x"));
        assert!(cli.json && cli.reverse && cli.test_request);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["fsmanifest", "--nope"]).is_err());
    }

    #[test]
    fn test_stamp_version_release() {
        assert_eq!(stamp_version("1.2.0", "abc1234", "2025-03-01 10:00", true), "1.2.0");
    }

    #[test]
    fn test_stamp_version_dev_build() {
        assert_eq!(
            stamp_version("1.2.0", "abc1234", "2025-03-01 10:00", false),
            "1.2.0@abc1234 2025-03-01 10:00"
        );
    }

    #[test]
    fn test_stamp_version_outside_git() {
        assert_eq!(stamp_version("1.2.0", "", "", false), "1.2.0");
    }

    #[test]
    fn test_version_starts_with_package_version() {
        assert!(version().starts_with(env!("CARGO_PKG_VERSION")));
    }
}
