mod types;

pub use types::{AssetError, DataUrlError, MediaError, TransformError};
