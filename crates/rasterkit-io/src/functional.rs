use std::path::Path;

use rasterkit_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path as RGBA8.
///
/// The method tries to read from any image format supported by the image crate
/// and converts the decoded pixels to four 8 bit channels. Gray inputs are
/// replicated into the color channels and inputs without alpha become opaque.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGBA8 image containing the image data.
///
/// # Errors
///
/// [`IoError::FileDoesNotExist`] if the path does not exist and
/// [`IoError::ImageDecodeError`] if the content cannot be decoded.
pub fn read_image_any_rgba8(file_path: impl AsRef<Path>) -> Result<Image<u8, 4>, IoError> {
    // resolve the file path correctly
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(&file_path)?;
    // SAFETY: the mapping is read only and dropped before returning
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    // decode the data directly from memory
    let img = image::ImageReader::new(std::io::Cursor::new(&mmap))
        .with_guessed_format()?
        .decode()?;

    log::debug!(
        "decoded {} ({}x{}, {:?})",
        file_path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_rgba8().into_raw())?)
}
