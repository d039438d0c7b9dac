use std::path::PathBuf;

/// Folder scanned when no input is given.
pub const DEFAULT_INPUT_DIR: &str = "spare_parts_feed";
/// Feed written when no output is given.
pub const DEFAULT_OUTPUT_FILE: &str = "output.xml";
/// Item ceiling applied in test mode.
pub const DEFAULT_MAX_ITEMS: usize = 10;

/// What to do when an input file cannot be read or is not valid JSON.
///
/// Files that parse but have the wrong shape are always skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseErrorPolicy {
    /// Stop the run with the error.
    #[default]
    Abort,
    /// Log the error and continue with the next file.
    Skip,
}

/// Options for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    /// Item ceiling; `Some` only in test mode.
    pub limit: Option<usize>,
    pub on_parse_error: ParseErrorPolicy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            limit: None,
            on_parse_error: ParseErrorPolicy::default(),
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Enables test mode with the given item ceiling.
    pub fn test_mode(mut self, max_items: usize) -> Self {
        self.limit = Some(max_items);
        self
    }

    pub fn on_parse_error(mut self, policy: ParseErrorPolicy) -> Self {
        self.on_parse_error = policy;
        self
    }
}
