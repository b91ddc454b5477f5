//! Request parsing helpers shared by handlers.

pub mod path;
pub mod upload;

pub use path::parse_file_id;
pub use upload::{UploadForm, read_upload_form};
