use crate::parallel;
use rasterkit_image::{Image, ImageError};

/// Fixed point (16.16) ITU-R BT.601 luma weights. They sum to 65536.
const RW: u32 = 19595;
const GW: u32 = 38470;
const BW: u32 = 7471;

#[inline]
fn average3(r: u8, g: u8, b: u8) -> u8 {
    ((r as i16 + g as i16 + b as i16) / 3) as u8
}

/// Convert an RGBA8 image to grayscale by averaging the color channels:
///
/// Y = (R + G + B) / 3
///
/// The division truncates and the alpha channel is dropped.
///
/// # Arguments
///
/// * `src` - The input RGBA8 image.
///
/// # Returns
///
/// A new single channel image with the same size as `src`.
///
/// # Example
///
/// ```
/// use rasterkit_image::{Image, ImageSize};
/// use rasterkit_imgproc::color::gray_from_rgba8;
///
/// let image = Image::<u8, 4>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![255, 0, 0, 255, 10, 20, 30, 0],
/// )
/// .unwrap();
///
/// let gray = gray_from_rgba8(&image).unwrap();
/// assert_eq!(gray.as_slice(), &[85, 20]);
/// ```
pub fn gray_from_rgba8(src: &Image<u8, 4>) -> Result<Image<u8, 1>, ImageError> {
    let mut dst = Image::<u8, 1>::zeros(src.size())?;

    // parallelize the grayscale conversion by rows
    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = average3(src_pixel[0], src_pixel[1], src_pixel[2]);
    });

    Ok(dst)
}

/// Convert an RGB8 image to grayscale by averaging the color channels.
///
/// Same formula as [`gray_from_rgba8`] for images without alpha channel.
pub fn gray_from_rgb8(src: &Image<u8, 3>) -> Result<Image<u8, 1>, ImageError> {
    let mut dst = Image::<u8, 1>::zeros(src.size())?;

    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = average3(src_pixel[0], src_pixel[1], src_pixel[2]);
    });

    Ok(dst)
}

/// Convert an RGBA8 image to grayscale using the weighted luma formula.
///
/// Samples are widened to 16 bits (`v * 257`) and weighted in 16.16 fixed point:
///
/// Y = ((19595 * R + 38470 * G + 7471 * B) * 257 + 2^15) >> 24
///
/// which approximates `0.299 R + 0.587 G + 0.114 B` rounded down, e.g. a pure
/// blue of 5 maps to 0. The alpha channel is dropped.
pub fn gray_from_rgba8_luma(src: &Image<u8, 4>) -> Result<Image<u8, 1>, ImageError> {
    let mut dst = Image::<u8, 1>::zeros(src.size())?;

    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        let r = src_pixel[0] as u32;
        let g = src_pixel[1] as u32;
        let b = src_pixel[2] as u32;
        // at most 65536 * 65535 + 2^15, fits u32
        dst_pixel[0] = (((RW * r + GW * g + BW * b) * 257 + (1 << 15)) >> 24) as u8;
    });

    Ok(dst)
}

/// Convert a grayscale image to an RGBA8 image.
///
/// The gray value is replicated into the three color channels and the alpha
/// channel is set to fully opaque.
///
/// # Example
///
/// ```
/// use rasterkit_image::Image;
/// use rasterkit_imgproc::color::rgba_from_gray;
///
/// let gray = Image::<u8, 1>::new([1, 1].into(), vec![42]).unwrap();
/// let rgba = rgba_from_gray(&gray).unwrap();
///
/// assert_eq!(rgba.as_slice(), &[42, 42, 42, 255]);
/// ```
pub fn rgba_from_gray(src: &Image<u8, 1>) -> Result<Image<u8, 4>, ImageError> {
    let mut dst = Image::<u8, 4>::zeros(src.size())?;

    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = src_pixel[0];
        dst_pixel[1] = src_pixel[0];
        dst_pixel[2] = src_pixel[0];
        dst_pixel[3] = u8::MAX;
    });

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use rasterkit_image::{Image, ImageError, ImageSize};

    #[test]
    fn gray_from_rgba8_literals() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![
                255, 0, 0, 255,
                0, 255, 0, 255,
                0, 0, 255, 0,
                255, 255, 255, 255,
                10, 20, 30, 255,
                0, 0, 0, 17,
            ],
        )?;

        let gray = super::gray_from_rgba8(&image)?;

        assert_eq!(gray.num_channels(), 1);
        assert_eq!(gray.size(), image.size());
        assert_eq!(gray.as_slice(), &[85, 85, 85, 255, 20, 0]);

        Ok(())
    }

    #[test]
    fn gray_from_rgba8_floors() -> Result<(), ImageError> {
        // (1 + 1 + 0) / 3 = 0.66 and (254 + 255 + 255) / 3 = 254.66
        let image = Image::new([2, 1].into(), vec![1, 1, 0, 0, 254, 255, 255, 0])?;
        let gray = super::gray_from_rgba8(&image)?;
        assert_eq!(gray.as_slice(), &[0, 254]);
        Ok(())
    }

    #[test]
    fn gray_from_rgb8_literals() -> Result<(), ImageError> {
        let image = Image::new([2, 1].into(), vec![0, 255, 0, 10, 20, 30])?;
        let gray = super::gray_from_rgb8(&image)?;
        assert_eq!(gray.as_slice(), &[85, 20]);
        Ok(())
    }

    #[test]
    fn gray_from_rgba8_luma_literals() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::new(
            [7, 1].into(),
            vec![
                255, 0, 0, 255,
                0, 255, 0, 255,
                0, 0, 255, 255,
                255, 255, 255, 255,
                0, 0, 5, 255,
                128, 128, 128, 0,
                10, 200, 30, 255,
            ],
        )?;
        let gray = super::gray_from_rgba8_luma(&image)?;
        assert_eq!(gray.as_slice(), &[76, 150, 29, 255, 0, 128, 124]);
        Ok(())
    }

    #[test]
    fn gray_from_rgba8_luma_keeps_gray_levels() -> Result<(), ImageError> {
        let data = (0..=255u8).flat_map(|v| [v, v, v, 255]).collect();
        let image = Image::new([256, 1].into(), data)?;

        let gray = super::gray_from_rgba8_luma(&image)?;

        let expected = (0..=255u8).collect::<Vec<_>>();
        assert_eq!(gray.as_slice(), expected.as_slice());
        Ok(())
    }

    #[test]
    fn rgba_from_grayscale() -> Result<(), ImageError> {
        let image = Image::new([3, 1].into(), vec![0, 128, 255])?;

        let rgba = super::rgba_from_gray(&image)?;

        #[rustfmt::skip]
        assert_eq!(
            rgba.as_slice(),
            &[
                0, 0, 0, 255,
                128, 128, 128, 255,
                255, 255, 255, 255,
            ]
        );

        // and back again
        assert_eq!(super::gray_from_rgba8(&rgba)?, image);

        Ok(())
    }

    #[test]
    fn gray_from_empty_image() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::zeros([0, 0].into())?;
        let gray = super::gray_from_rgba8(&image)?;
        assert!(gray.is_empty());
        Ok(())
    }
}
