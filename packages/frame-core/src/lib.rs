pub mod constants;
pub mod data_url;
pub mod errors;
pub mod language;
pub mod transform;
pub mod uploader;
pub mod validation;

// 公開API
pub use constants::{
    DOWNLOAD_FILENAME, MAX_BODY_BYTES, MAX_DIMENSION, MAX_PIXELS, MAX_UPLOAD_MB, OUTPUT_DIMENSION,
};
pub use data_url::DataUrl;
pub use errors::{AssetError, DataUrlError, MediaError, TransformError};
pub use language::{BannerLanguage, BANNER_LANGUAGE_HEADER};
pub use transform::{compose_banner, decode_image, encode_png, ComposeParams, Orientation};
pub use uploader::{UploadRequest, UploaderAction, UploaderState};
pub use validation::{check_upload, validate_compose_params, UploadCheck};
