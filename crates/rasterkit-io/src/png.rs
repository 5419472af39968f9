use std::{fs::File, io::BufWriter, path::Path};

use png::{BitDepth, ColorType, Encoder};
use rasterkit_image::{Image, ImageSize};

use crate::error::IoError;

/// Writes the given PNG _(rgba8)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The image containing the PNG image data.
pub fn write_image_png_rgba8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 4>,
) -> Result<(), IoError> {
    write_png_impl(
        file_path,
        image.as_slice(),
        image.size(),
        BitDepth::Eight,
        ColorType::Rgba,
    )
}

/// Writes the given PNG _(grayscale 8-bit)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The image containing the PNG image data.
pub fn write_image_png_gray8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 1>,
) -> Result<(), IoError> {
    write_png_impl(
        file_path,
        image.as_slice(),
        image.size(),
        BitDepth::Eight,
        ColorType::Grayscale,
    )
}

fn write_png_impl(
    file_path: impl AsRef<Path>,
    image_data: &[u8],
    image_size: ImageSize,
    depth: BitDepth,
    color_type: ColorType,
) -> Result<(), IoError> {
    let file = File::create(file_path.as_ref())?;

    let mut encoder = Encoder::new(
        BufWriter::new(file),
        image_size.width as u32,
        image_size.height as u32,
    );
    encoder.set_color(color_type);
    encoder.set_depth(depth);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(image_data)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

    log::debug!("wrote {}", file_path.as_ref().display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::read;

    #[test]
    fn write_png_gray8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray8.png");

        let image = Image::<u8, 1>::from_size_val([4, 3].into(), 128)?;
        write_image_png_gray8(&file_path, &image)?;

        assert!(file_path.exists(), "File does not exist: {:?}", file_path);
        let bytes = read(&file_path)?;
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        Ok(())
    }

    #[test]
    fn write_png_to_missing_directory() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("missing").join("gray8.png");

        let image = Image::<u8, 1>::from_size_val([1, 1].into(), 0)?;
        let res = write_image_png_gray8(&file_path, &image);
        assert!(matches!(res, Err(IoError::FileError(_))));

        Ok(())
    }
}
