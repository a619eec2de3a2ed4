pub mod compression;
pub mod error;
pub mod formats;
pub mod hooks;
pub mod introspector;
pub mod io;
pub mod types;

pub use error::{CompressionError, HeaderError, ImageError, Result};
pub use formats::detect;
pub use hooks::{ExtensionPoint, HookEvent, HookRegistry};
pub use introspector::{ImageIntrospector, IntrospectorConfig, parse_image};
pub use types::{HeaderFields, ImageFormat, ImageMetadata, LegacyImageInfo};
