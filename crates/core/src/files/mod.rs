//! Local source files as the workflow sees them.

mod local_file;

pub use local_file::LocalFile;
