//! Clap argument types and validation.

use clap::Parser;
use std::path::PathBuf;

use classdivider::config::Config;
use classdivider::divider::GroupPartitioner;
use classdivider::output::OutputFormat;

/// Divide a class of students into groups.
#[derive(Parser, Debug)]
#[command(
    name = classdivider::constants::APP_NAME,
    version = classdivider::constants::VERSION,
    about = "Divide a class of students into groups."
)]
pub struct Cli {
    /// Path to file with students data in CSV format.
    #[arg(value_name = "STUDENTS_FILE")]
    pub students_file: PathBuf,

    /// Target group size.
    #[arg(short = 'g', long, allow_negative_numbers = true)]
    pub group_size: i64,

    /// Permitted difference in number of students in a group and the target
    /// group size. Defaults to 1, or the configured value.
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    pub deviation: Option<i64>,

    /// Output format (defaults to the configured format, else terminal).
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Suppress the summary line on stderr.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,

    /// Enable debug logging on stderr.
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Deviation from the CLI, falling back to config.
    pub fn resolved_deviation(&self, config: &Config) -> i64 {
        self.deviation
            .unwrap_or_else(|| i64::try_from(config.divide.deviation).unwrap_or(i64::MAX))
    }

    /// Output format from the CLI, falling back to config.
    pub fn resolved_format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or(config.output.format)
    }

    /// Validate group size and deviation and build the partitioner.
    pub fn partitioner(&self, config: &Config) -> Result<GroupPartitioner, String> {
        let deviation = self.resolved_deviation(config);

        let group_size = usize::try_from(self.group_size)
            .ok()
            .filter(|&g| g > 0)
            .ok_or_else(|| "Group size must be a positive integer.".to_string())?;

        let deviation = usize::try_from(deviation)
            .ok()
            .filter(|&d| d < group_size)
            .ok_or_else(|| {
                "Deviation must be a positive number smaller than group size.".to_string()
            })?;

        Ok(GroupPartitioner::new(group_size, deviation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["classdivider"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn group_size_is_required() {
        assert!(Cli::try_parse_from(["classdivider", "class.csv"]).is_err());
    }

    #[test]
    fn students_file_is_required() {
        assert!(Cli::try_parse_from(["classdivider", "-g", "3"]).is_err());
    }

    #[test]
    fn parses_short_flags() {
        let cli = parse(&["class.csv", "-g", "4", "-d", "0", "-q"]);
        assert_eq!(cli.students_file, PathBuf::from("class.csv"));
        assert_eq!(cli.group_size, 4);
        assert_eq!(cli.deviation, Some(0));
        assert!(cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_long_flags() {
        let cli = parse(&["--group-size", "5", "--deviation", "2", "--format", "json", "class.csv"]);
        assert_eq!(cli.group_size, 5);
        assert_eq!(cli.deviation, Some(2));
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn accepts_negative_numbers_for_validation() {
        let cli = parse(&["class.csv", "-g", "-3"]);
        assert_eq!(cli.group_size, -3);
    }

    #[test]
    fn deviation_defaults_to_config() {
        let cli = parse(&["class.csv", "-g", "4"]);
        let mut config = Config::default();
        assert_eq!(cli.resolved_deviation(&config), 1);
        config.divide.deviation = 2;
        assert_eq!(cli.resolved_deviation(&config), 2);
    }

    #[test]
    fn cli_deviation_overrides_config() {
        let cli = parse(&["class.csv", "-g", "4", "-d", "0"]);
        let mut config = Config::default();
        config.divide.deviation = 2;
        assert_eq!(cli.resolved_deviation(&config), 0);
    }

    #[test]
    fn format_defaults_to_config() {
        let cli = parse(&["class.csv", "-g", "4"]);
        let mut config = Config::default();
        assert_eq!(cli.resolved_format(&config), OutputFormat::Terminal);
        config.output.format = OutputFormat::Json;
        assert_eq!(cli.resolved_format(&config), OutputFormat::Json);
    }

    #[test]
    fn partitioner_rejects_non_positive_group_size() {
        let config = Config::default();
        for g in ["0", "-2"] {
            let err = parse(&["class.csv", "-g", g]).partitioner(&config).unwrap_err();
            assert_eq!(err, "Group size must be a positive integer.");
        }
    }

    #[test]
    fn partitioner_rejects_bad_deviation() {
        let config = Config::default();
        for d in ["-1", "3", "7"] {
            let err = parse(&["class.csv", "-g", "3", "-d", d])
                .partitioner(&config)
                .unwrap_err();
            assert_eq!(err, "Deviation must be a positive number smaller than group size.");
        }
    }

    #[test]
    fn partitioner_with_default_deviation() {
        let p = parse(&["class.csv", "-g", "3"])
            .partitioner(&Config::default())
            .unwrap();
        assert_eq!(p.group_size(), 3);
        assert_eq!(p.deviation(), 1);
    }

    #[test]
    fn group_size_one_rejects_default_deviation() {
        // The default deviation of 1 is not smaller than a group size of 1.
        let err = parse(&["class.csv", "-g", "1"])
            .partitioner(&Config::default())
            .unwrap_err();
        assert!(err.starts_with("Deviation"));
    }
}
