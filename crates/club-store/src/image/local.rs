//! Local image picker
//!
//! Stands in for the device photo library. Each call to `pick_image` takes
//! the next queued outcome; an empty queue behaves like a cancelled picker.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use club_common::UploadConfig;
use club_core::{DomainError, ImagePickOptions, ImagePicker, UploadError};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::PathBuf;
use tracing::{debug, instrument};

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47];

/// What the user does the next time the picker opens
#[derive(Debug, Clone)]
pub enum PickOutcome {
    /// Choose an image file from disk
    File(PathBuf),
    /// Choose an image already in memory
    Bytes(Vec<u8>),
    /// Dismiss the picker
    Cancel,
}

pub struct LocalImagePicker {
    max_bytes: u64,
    queue: Mutex<VecDeque<PickOutcome>>,
}

impl LocalImagePicker {
    #[must_use]
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            max_bytes: config.max_image_bytes(),
            queue: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue the outcome of the next pick
    pub fn push(&self, outcome: PickOutcome) {
        self.queue.lock().push_back(outcome);
    }

    fn encode(&self, bytes: &[u8]) -> Result<String, UploadError> {
        let size = bytes.len() as u64;
        if size > self.max_bytes {
            return Err(UploadError::ImageTooLarge {
                size,
                max: self.max_bytes,
            });
        }
        if !(bytes.starts_with(JPEG_MAGIC) || bytes.starts_with(PNG_MAGIC)) {
            return Err(UploadError::InvalidFormat);
        }
        Ok(STANDARD.encode(bytes))
    }
}

#[async_trait]
impl ImagePicker for LocalImagePicker {
    #[instrument(skip(self))]
    async fn pick_image(&self, options: &ImagePickOptions) -> Result<Option<String>, DomainError> {
        let outcome = self.queue.lock().pop_front();

        let bytes = match outcome {
            None | Some(PickOutcome::Cancel) => {
                debug!("Image picker dismissed");
                return Ok(None);
            }
            Some(PickOutcome::Bytes(bytes)) => bytes,
            Some(PickOutcome::File(path)) => tokio::fs::read(&path)
                .await
                .map_err(|e| UploadError::Unreadable(format!("{}: {e}", path.display())))?,
        };

        let payload = self.encode(&bytes)?;
        debug!(size = bytes.len(), "Image picked");
        Ok(Some(payload))
    }
}
