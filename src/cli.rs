//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use url::Url;

use lecture_mirror_core::MirrorConfig;
use lecture_mirror_core::config::{
    DEFAULT_BASE_URL, DEFAULT_FIRST_LECTURE, DEFAULT_LAST_LECTURE, DEFAULT_OUTPUT_DIR,
};

/// Mirror course lecture slide PDFs into numbered local directories.
///
/// For each lecture index the tool fetches the full slide deck and the
/// reduced handout variant, skipping files already present locally.
#[derive(Parser, Debug)]
#[command(name = "lecture-mirror")]
#[command(author, version, about)]
pub struct Args {
    /// Base URL of the remote lecture tree
    #[arg(short = 'u', long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output directory for the mirrored tree
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// First lecture index to mirror
    #[arg(long, default_value_t = DEFAULT_FIRST_LECTURE)]
    pub first: u32,

    /// Last lecture index to mirror (inclusive)
    #[arg(long, default_value_t = DEFAULT_LAST_LECTURE)]
    pub last: u32,

    /// HEAD probe timeout in seconds (1-600)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=600))]
    pub probe_timeout: u64,

    /// Transfer timeout in seconds, 0 leaves downloads unbounded (0-86400)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u64).range(0..=86400))]
    pub transfer_timeout: u64,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output and the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Builds the run configuration from the parsed arguments.
    pub fn mirror_config(&self) -> anyhow::Result<MirrorConfig> {
        anyhow::ensure!(
            self.first <= self.last,
            "--first ({}) must not exceed --last ({})",
            self.first,
            self.last
        );

        let base_url = Url::parse(&self.base_url)
            .with_context(|| format!("invalid base URL: {}", self.base_url))?;

        let mut config = MirrorConfig::new(base_url, self.output.clone());
        config.lectures = self.first..=self.last;
        config.probe_timeout = Duration::from_secs(self.probe_timeout);
        config.transfer_timeout = match self.transfer_timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["lecture-mirror"]).unwrap();
        assert_eq!(args.base_url, DEFAULT_BASE_URL);
        assert_eq!(args.output, PathBuf::from("cs166_lectures"));
        assert_eq!(args.first, 0);
        assert_eq!(args.last, 18);
        assert_eq!(args.probe_timeout, 10);
        assert_eq!(args.transfer_timeout, 0);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_defaults_build_original_config() {
        let args = Args::try_parse_from(["lecture-mirror"]).unwrap();
        let config = args.mirror_config().unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.lectures, 0..=18);
        assert_eq!(config.probe_timeout, Duration::from_secs(10));
        assert!(config.transfer_timeout.is_none());
    }

    #[test]
    fn test_cli_base_url_and_output_flags() {
        let args = Args::try_parse_from([
            "lecture-mirror",
            "--base-url",
            "http://127.0.0.1:9000/lectures/",
            "--output",
            "/tmp/slides",
        ])
        .unwrap();
        assert_eq!(args.base_url, "http://127.0.0.1:9000/lectures/");
        assert_eq!(args.output, PathBuf::from("/tmp/slides"));
    }

    #[test]
    fn test_cli_lecture_range_flags() {
        let args =
            Args::try_parse_from(["lecture-mirror", "--first", "3", "--last", "7"]).unwrap();
        let config = args.mirror_config().unwrap();
        assert_eq!(config.lectures, 3..=7);
    }

    #[test]
    fn test_cli_inverted_range_rejected() {
        let args =
            Args::try_parse_from(["lecture-mirror", "--first", "7", "--last", "3"]).unwrap();
        assert!(args.mirror_config().is_err());
    }

    #[test]
    fn test_cli_invalid_base_url_rejected() {
        let args =
            Args::try_parse_from(["lecture-mirror", "--base-url", "not a url"]).unwrap();
        assert!(args.mirror_config().is_err());
    }

    #[test]
    fn test_cli_transfer_timeout_zero_means_unbounded() {
        let args = Args::try_parse_from(["lecture-mirror", "--transfer-timeout", "0"]).unwrap();
        let config = args.mirror_config().unwrap();
        assert!(config.transfer_timeout.is_none());
    }

    #[test]
    fn test_cli_transfer_timeout_nonzero_is_bounded() {
        let args = Args::try_parse_from(["lecture-mirror", "--transfer-timeout", "120"]).unwrap();
        let config = args.mirror_config().unwrap();
        assert_eq!(config.transfer_timeout, Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_cli_probe_timeout_zero_rejected() {
        let result = Args::try_parse_from(["lecture-mirror", "--probe-timeout", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["lecture-mirror", "-v"]).unwrap();
        assert_eq!(args.verbose, 1);

        let args = Args::try_parse_from(["lecture-mirror", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_flag_sets_quiet() {
        let args = Args::try_parse_from(["lecture-mirror", "-q"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let result = Args::try_parse_from(["lecture-mirror", "--invalid-flag"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
