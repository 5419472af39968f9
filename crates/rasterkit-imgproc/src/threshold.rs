use rasterkit_image::{Image, ImageError};

use crate::parallel;

/// Apply a binary threshold to an image.
///
/// Every sample strictly greater than `threshold` becomes 255, every other sample
/// (including `threshold` itself) becomes 0.
///
/// # Arguments
///
/// * `src` - The input image with an arbitrary number of channels.
/// * `threshold` - The threshold value.
///
/// # Returns
///
/// The binarized image with the same size and number of channels as the input image.
///
/// # Examples
///
/// ```
/// use rasterkit_image::{Image, ImageSize};
/// use rasterkit_imgproc::threshold::threshold_binary;
///
/// let data = vec![100u8, 200, 50, 150, 128, 129];
/// let image = Image::<_, 1>::new(ImageSize { width: 2, height: 3 }, data).unwrap();
///
/// let thresholded = threshold_binary(&image, 128).unwrap();
/// assert_eq!(thresholded.as_slice(), &[0, 255, 0, 255, 0, 255]);
/// ```
pub fn threshold_binary<const C: usize>(
    src: &Image<u8, C>,
    threshold: u8,
) -> Result<Image<u8, C>, ImageError> {
    let mut dst = Image::<u8, C>::zeros(src.size())?;

    // run the thresholding operation in parallel
    parallel::par_iter_rows_val(src, &mut dst, |src_pixel, dst_pixel| {
        *dst_pixel = if *src_pixel > threshold { u8::MAX } else { 0 };
    });

    Ok(dst)
}
