use std::path::Path;

use tracing::debug;

use crate::error::{ImageError, Result};
use crate::formats::{self, png};
use crate::hooks::{HookEvent, HookRegistry};
use crate::io::read_binary_file;
use crate::types::{ImageFormat, ImageMetadata};

#[derive(Debug, Clone, Copy, Default)]
pub struct IntrospectorConfig {
    /// Reject PNG files whose IHDR CRC does not match its contents.
    pub verify_png_crc: bool,
}

/// Reads an image, detects its container and extracts header metadata.
///
/// Each call owns its buffer from read to return; on success the buffer is
/// moved into the [`ImageMetadata`], on failure it is dropped.
#[derive(Debug, Default)]
pub struct ImageIntrospector {
    config: IntrospectorConfig,
    hooks: HookRegistry,
}

impl ImageIntrospector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IntrospectorConfig) -> Self {
        Self {
            config,
            hooks: HookRegistry::default(),
        }
    }

    pub fn with_hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    pub fn parse_image(&self, path: impl AsRef<Path>) -> Result<ImageMetadata> {
        let path = path.as_ref();

        let result = read_binary_file(path).and_then(|data| {
            self.hooks.dispatch(&HookEvent::Loaded {
                path,
                size_bytes: data.len(),
            });
            self.parse_buffer(data)
        });

        self.notify(Some(path), &result);
        result
    }

    /// Same as [`parse_image`](Self::parse_image) for bytes already in memory.
    pub fn parse_bytes(&self, data: Vec<u8>) -> Result<ImageMetadata> {
        let result = self.parse_buffer(data);
        self.notify(None, &result);
        result
    }

    fn parse_buffer(&self, data: Vec<u8>) -> Result<ImageMetadata> {
        let format = formats::detect(&data)?;

        let fields = formats::scan_header(format, &data)
            .map_err(|source| ImageError::malformed(format, source))?;

        if format == ImageFormat::Png && self.config.verify_png_crc {
            png::verify_ihdr_crc(&data).map_err(|source| ImageError::malformed(format, source))?;
        }

        debug!(
            %format,
            width = fields.width(),
            height = fields.height(),
            bit_depth = fields.bit_depth(),
            channels = fields.channel_count(),
            "parsed image header"
        );

        Ok(ImageMetadata::new(format, fields, data))
    }

    fn notify(&self, path: Option<&Path>, result: &Result<ImageMetadata>) {
        if self.hooks.is_empty() {
            return;
        }
        let event = match result {
            Ok(metadata) => HookEvent::Parsed { path, metadata },
            Err(error) => HookEvent::Failed { path, error },
        };
        self.hooks.dispatch(&event);
    }
}

/// Parses `path` with a default [`ImageIntrospector`].
pub fn parse_image(path: impl AsRef<Path>) -> Result<ImageMetadata> {
    ImageIntrospector::new().parse_image(path)
}
