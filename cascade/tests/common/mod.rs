#![allow(dead_code)]

use cascade::{Configurable, Logger};
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Test Argument Types
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Png,
    Gif,
    Jpeg,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub name: String,
    pub format: Format,
    pub width: u32,
    pub height: u32,
}

impl Image {
    pub fn new(name: &str, format: Format, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            format,
            width,
            height,
        }
    }
}

pub type ResizeArgs = (Image, u32, u32);

pub fn resize_args(format: Format) -> ResizeArgs {
    (Image::new("cat", format, 640, 480), 100, 100)
}

// ============================================================================
// Test Extensions
// ============================================================================

/// Resizes anything.
#[derive(Default)]
pub struct GenericResizer {
    pub calls: AtomicUsize,
}

#[cascade::extension(args = ResizeArgs, output = Image)]
impl GenericResizer {
    pub fn resize(&self, (image, width, height): &ResizeArgs) -> Option<Image> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Some(Image {
            name: format!("{}-generic", image.name),
            width: *width,
            height: *height,
            ..image.clone()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Resizes PNGs only, with a configurable quality.
pub struct PngResizer {
    quality: u8,
    logger: Option<Logger>,
    pub calls: AtomicUsize,
}

#[cascade::extension(args = ResizeArgs, output = Image, configurable, loggable)]
impl PngResizer {
    pub fn new() -> Self {
        Self {
            quality: 80,
            logger: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn resize(&self, (image, width, height): &ResizeArgs) -> Option<Image> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (image.format == Format::Png).then(|| Image {
            name: format!("{}-png-q{}", image.name, self.quality),
            width: *width,
            height: *height,
            ..image.clone()
        })
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    pub fn set_quality(&mut self, quality: u8) {
        self.quality = quality;
    }

    pub fn logger(&self) -> Option<&Logger> {
        self.logger.as_ref()
    }

    fn adopt_logger(&mut self, logger: &Logger) {
        self.logger = Some(logger.clone());
    }
}

impl Configurable for PngResizer {
    fn configuration_methods(&self) -> &'static [&'static str] {
        &["quality", "set_quality"]
    }
}
