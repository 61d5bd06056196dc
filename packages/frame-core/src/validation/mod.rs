pub mod params;

pub use params::{check_upload, validate_compose_params, UploadCheck};
