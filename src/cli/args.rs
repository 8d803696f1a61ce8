use clap::Parser;
use std::path::PathBuf;

/// Default stock file, looked up in the working directory
pub const DEFAULT_STOCK_FILE: &str = "data.csv";

/// Run the retail market simulator
#[derive(Parser, Debug)]
#[command(name = "retail-market")]
#[command(about = "Single-terminal retail store simulator", long_about = None)]
pub struct CliArgs {
    /// Stock file with one `'name', quantity, price` record per line
    #[arg(
        value_name = "STOCK_FILE",
        default_value = DEFAULT_STOCK_FILE,
        help = "Path to the stock file"
    )]
    pub stock_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Diagnostic log level written to stderr (error, warn, info, debug, trace)"
    )]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_file(&["program"], "data.csv")]
    #[case::explicit_file(&["program", "stock/today.csv"], "stock/today.csv")]
    fn test_stock_file_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.stock_file, PathBuf::from(expected));
    }

    #[rstest]
    #[case::default_level(&["program"], "warn")]
    #[case::explicit_level(&["program", "--log-level", "debug"], "debug")]
    #[case::with_file(&["program", "--log-level", "info", "data.csv"], "info")]
    fn test_log_level_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_level, expected);
    }

    #[rstest]
    #[case::unknown_flag(&["program", "--verbose"])]
    #[case::missing_level_value(&["program", "--log-level"])]
    #[case::extra_positional(&["program", "a.csv", "b.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
