use crate::constants::{DEFAULT_DIR, DEFAULT_JOBS, DEFAULT_QUALITY};
use crate::validation::{parse_dimension, parse_quality, resolve_directory};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jpg-resize",
    about = "Resize every JPEG in a directory",
    long_about = "jpg-resize converts each .jpg in the input directory to a lossless PNG, \
                  resizes it, and writes it back as <name>-converted.jpg in the output directory. \
                  Intermediate files live in a temporary directory that is always removed.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    jpg-resize --input_dir ./photos --output_dir ./small --resize_width 800\n  \
    jpg-resize -i ./photos -o ./thumbs -w 200 -H 200\n  \
    jpg-resize -i ./photos -H 1080 -j 4"
)]
pub struct Args {
    #[arg(
        short = 'i',
        long = "input_dir",
        default_value = DEFAULT_DIR,
        value_parser = resolve_directory,
        help = "Input directory (default: current directory)",
        long_help = "Directory scanned for .jpg files. Relative paths are resolved against \
                     the current directory; a missing directory is created."
    )]
    pub input_dir: PathBuf,

    #[arg(
        short = 'o',
        long = "output_dir",
        default_value = DEFAULT_DIR,
        value_parser = resolve_directory,
        help = "Output directory (default: current directory)",
        long_help = "Directory that receives the converted files. Created if missing."
    )]
    pub output_dir: PathBuf,

    #[arg(
        short = 'w',
        long = "resize_width",
        value_parser = parse_dimension,
        help = "Resize width (min: 1, max: 10000)",
        long_help = "Target width in pixels. Without --resize_height the height follows \
                     the aspect ratio."
    )]
    pub resize_width: Option<u32>,

    #[arg(
        short = 'H',
        long = "resize_height",
        value_parser = parse_dimension,
        help = "Resize height (min: 1, max: 10000)",
        long_help = "Target height in pixels. Together with --resize_width the image is \
                     fitted inside the box, keeping its aspect ratio."
    )]
    pub resize_height: Option<u32>,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        value_parser = parse_quality,
        help = "JPEG output quality (1-100, default: 92)"
    )]
    pub quality: u8,

    #[arg(
        short = 'j',
        long,
        default_value_t = DEFAULT_JOBS,
        help = "Files processed at once (default: 1, 0 = one per CPU)",
        long_help = "Number of files converted concurrently. The default of 1 processes files \
                     strictly one after another. With more than one worker a failure still \
                     stops the run, but other files in flight may already be written."
    )]
    pub jobs: usize,

    #[arg(long, conflicts_with = "verbose", help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print each stage as it runs")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_full_arguments() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in");
        let output = temp_dir.path().join("out");

        let args = Args::try_parse_from([
            "jpg-resize",
            "--input_dir",
            &input.to_string_lossy(),
            "--output_dir",
            &output.to_string_lossy(),
            "--resize_width",
            "400",
            "--resize_height",
            "300",
        ])
        .unwrap();

        assert_eq!(args.input_dir, input);
        assert_eq!(args.output_dir, output);
        assert!(input.is_dir());
        assert!(output.is_dir());
        assert_eq!(args.resize_width, Some(400));
        assert_eq!(args.resize_height, Some(300));
        assert_eq!(args.quality, DEFAULT_QUALITY);
        assert_eq!(args.jobs, 1);
    }

    #[test]
    fn test_directories_default_to_current_dir() {
        let args = Args::try_parse_from(["jpg-resize", "-w", "10"]).unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(args.input_dir, cwd);
        assert!(args.input_dir.is_absolute());
        assert!(args.output_dir.is_absolute());
    }

    #[test]
    fn test_dimensions_are_optional() {
        let args = Args::try_parse_from(["jpg-resize"]).unwrap();
        assert_eq!(args.resize_width, None);
        assert_eq!(args.resize_height, None);
    }

    #[test]
    fn test_rejects_invalid_dimensions() {
        assert!(Args::try_parse_from(["jpg-resize", "-w", "0"]).is_err());
        assert!(Args::try_parse_from(["jpg-resize", "-w", "10001"]).is_err());
        assert!(Args::try_parse_from(["jpg-resize", "-H", "tall"]).is_err());
    }

    #[test]
    fn test_rejects_invalid_quality() {
        assert!(Args::try_parse_from(["jpg-resize", "-w", "10", "-q", "0"]).is_err());
        assert!(Args::try_parse_from(["jpg-resize", "-w", "10", "-q", "101"]).is_err());
    }
}
