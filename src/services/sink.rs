use inky_palette::IndexedImage;

use crate::error::Result;
use crate::models::NamedImage;

/// Destination for converted images
pub trait ImageSink {
    /// Store an image under `name`, replacing any previous image with that name.
    fn store(&mut self, name: &str, image: &IndexedImage) -> Result<()>;
}

/// Collects images in memory, in the order they were stored.
impl ImageSink for Vec<NamedImage> {
    fn store(&mut self, name: &str, image: &IndexedImage) -> Result<()> {
        match self.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.image = image.clone(),
            None => self.push(NamedImage::new(name, image.clone())),
        }
        Ok(())
    }
}
