pub const ORIGINAL_FILE_EXTENSION: &str = ".jpg";
pub const TEMP_FILE_EXTENSION: &str = ".png";

pub const TEMP_FIRST_FILE_SUFFIX: &str = "-samesize";
pub const TEMP_SECOND_FILE_SUFFIX: &str = "-newsize";
pub const CONVERTED_FILE_SUFFIX: &str = "-converted";

pub const MIN_DIMENSION: u32 = 1;
pub const MAX_DIMENSION: u32 = 10000;

pub const DEFAULT_QUALITY: u8 = 92;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

pub const DEFAULT_JOBS: usize = 1;

// Working directory lives inside the output dir for the length of one run.
pub const TEMP_DIR_PREFIX: &str = "jpg-resize-";
pub const TEMP_DIR_RAND_LEN: usize = 32;

pub const DEFAULT_DIR: &str = ".";

pub const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}";
pub const PROGRESS_BAR_CHARS: &str = "=> ";

pub const ERROR_BANNER: &str = "!!! ERROR !!!";
