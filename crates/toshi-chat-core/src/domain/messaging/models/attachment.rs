// toshi-chat/toshi-chat-core
//
// Copyright: 2026, The toshi-chat authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::io::Cursor;

use anyhow::{anyhow, bail, Result};
use image::io::Reader as ImageReader;
use image::ImageFormat;
use mime::Mime;

use crate::domain::shared::models::AttachmentId;

/// Attachment content as stored by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub id: AttachmentId,
    pub media_type: Mime,
    pub file_name: Option<String>,
    pub data: Vec<u8>,
}

/// An attachment whose data could be read as an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl Attachment {
    pub fn new(id: impl Into<AttachmentId>, media_type: Mime, data: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            media_type,
            file_name: None,
            data: data.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.media_type.type_() == mime::IMAGE
    }

    /// Reads the image header of the attachment's data. Fails if the media type is not an
    /// image type or the data is not in a supported image format.
    pub fn image(&self) -> Result<Image> {
        if !self.is_image() {
            bail!("Attachment {} has media type {}", self.id, self.media_type);
        }

        let reader = ImageReader::new(Cursor::new(&self.data)).with_guessed_format()?;
        let format = reader
            .format()
            .ok_or(anyhow!("Unrecognized image format in attachment {}", self.id))?;
        let (width, height) = reader.into_dimensions()?;

        Ok(Image {
            format,
            width,
            height,
        })
    }
}
