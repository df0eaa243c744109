use clap::{CommandFactory, Parser};
use jpg_resize::cli::Args;
use jpg_resize::constants::ERROR_BANNER;
use jpg_resize::error::Result;
use jpg_resize::logger::{set_quiet_mode, set_verbose_mode};
use jpg_resize::{error, run, ImageCrateBackend, ResizeJob, ResizeMode, RunOutcome};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    set_quiet_mode(args.quiet);
    set_verbose_mode(args.verbose);

    let Some(mode) = ResizeMode::from_dimensions(args.resize_width, args.resize_height) else {
        // Nothing to resize to: show usage and leave every directory alone.
        let _ = Args::command().print_help();
        return ExitCode::SUCCESS;
    };

    match resize_directory(args, mode) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", ERROR_BANNER);
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn resize_directory(args: Args, mode: ResizeMode) -> Result<RunOutcome> {
    let job = ResizeJob::new(args.input_dir, args.output_dir, mode)?
        .with_quality(args.quality)
        .with_jobs(args.jobs);

    run(&job, &ImageCrateBackend)
}
