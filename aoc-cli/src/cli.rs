//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers on local inputs", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding puzzle inputs named `{year}_day{day:02}.txt`
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "~/.config/aoc/inputs")]
    pub input_dir: PathBuf,

    /// Read the input from this file instead (requires exactly one selected solver)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// List registered solvers and exit
    #[arg(short, long)]
    pub list: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert!(args.year.is_none());
        assert!(args.day.is_none());
        assert!(args.tags.is_empty());
        assert!(args.input.is_none());
        assert!(!args.list);
        assert!(!args.quiet);
    }

    #[test]
    fn test_tags_are_comma_separated() {
        let args = Args::try_parse_from(["aoc", "--tags", "graph,dp"]).unwrap();
        assert_eq!(args.tags, vec!["graph".to_string(), "dp".to_string()]);
    }

    #[test]
    fn test_day_range_is_validated() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--day", "0"]).is_err());
        assert_eq!(
            Args::try_parse_from(["aoc", "-d", "11"]).unwrap().day,
            Some(11)
        );
    }

    #[test]
    fn test_part_range_is_validated() {
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
        assert_eq!(
            Args::try_parse_from(["aoc", "-p", "2"]).unwrap().part,
            Some(2)
        );
    }

    #[test]
    fn test_explicit_input_dir() {
        let args = Args::try_parse_from(["aoc", "--input-dir", "/tmp/inputs"]).unwrap();
        assert_eq!(args.input_dir, PathBuf::from("/tmp/inputs"));
    }

    #[test]
    fn test_input_dir_from_env() {
        // No other test reads AOC_INPUT_DIR from the process environment
        unsafe { std::env::set_var("AOC_INPUT_DIR", "/srv/aoc/inputs") };
        let from_env = Args::try_parse_from(["aoc"]).map(|args| args.input_dir);
        let flag_wins = Args::try_parse_from(["aoc", "--input-dir", "/tmp/inputs"])
            .map(|args| args.input_dir);
        unsafe { std::env::remove_var("AOC_INPUT_DIR") };

        assert_eq!(from_env.unwrap(), PathBuf::from("/srv/aoc/inputs"));
        assert_eq!(flag_wins.unwrap(), PathBuf::from("/tmp/inputs"));
    }
}
