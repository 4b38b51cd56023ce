pub mod error;
pub mod hash;
pub mod hex;
pub mod listing;
pub mod path;
pub mod resource;

pub use error::{FileToolsError, Result};

pub use hash::{md5_bytes, md5_file, md5_string};
pub use hex::{bytes_to_hex, hex_to_bytes};
pub use listing::{list_files_deep, list_files_shallow};
pub use path::{file_extension, file_name, file_stem};
pub use resource::{load_resource_as_string, ResourceAnchor};

pub mod prelude {
    pub use crate::error::{FileToolsError, Result};
    pub use crate::hash::{md5_file, md5_string};
    pub use crate::listing::{list_files_deep, list_files_shallow};
    pub use crate::path::file_extension;
    pub use crate::resource::{load_resource_as_string, ResourceAnchor};
}
