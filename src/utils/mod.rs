pub mod fs;

pub use fs::{ensure_parent_dir, validate_output_path, write_file};
