pub mod backend;
pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod logger;
pub mod naming;
pub mod processing;
pub mod validation;

pub use backend::{BackendError, ImageBackend, ImageCrateBackend, ResizeMode};
pub use batch::{collect_jpg_files, is_jpg_file, run, ResizeJob, RunOutcome, TempWorkspace};
pub use error::{ResizeError, Result, Stage};
pub use naming::{final_name, output_name, stage1_name, stage2_name};
pub use processing::{
    convert_back, convert_to_lossless, process_single_image, resize_lossless, StageOptions,
};
pub use validation::{parse_dimension, parse_quality, resolve_directory};
