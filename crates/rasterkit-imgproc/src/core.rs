use rasterkit_image::{Image, ImageError};

use crate::parallel;

/// Offset added to the difference so that equal samples land in mid gray.
const DIFF_OFFSET: i16 = 128;

/// Subtract two gray images and shift the result to mid gray.
///
/// Computes `a - b + 128` for every sample in a signed 16 bit type and keeps the
/// low 8 bits of the result. Out of range differences wrap modulo 256; they are
/// not saturated.
///
/// # Arguments
///
/// * `src1` - The minuend image.
/// * `src2` - The subtrahend image.
///
/// # Errors
///
/// [`ImageError::InvalidImageSize`] if the images do not have the same size. The
/// check happens before any pixel is read.
///
/// # Example
///
/// ```
/// use rasterkit_image::Image;
/// use rasterkit_imgproc::core::sub_with_offset;
///
/// let a = Image::<u8, 1>::new([3, 1].into(), vec![10, 200, 0]).unwrap();
/// let b = Image::<u8, 1>::new([3, 1].into(), vec![10, 0, 255]).unwrap();
///
/// let diff = sub_with_offset(&a, &b).unwrap();
///
/// // 200 + 128 = 328 wraps to 72, 0 - 255 + 128 = -127 wraps to 129
/// assert_eq!(diff.as_slice(), &[128, 72, 129]);
/// ```
pub fn sub_with_offset(
    src1: &Image<u8, 1>,
    src2: &Image<u8, 1>,
) -> Result<Image<u8, 1>, ImageError> {
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }

    let mut dst = Image::<u8, 1>::zeros(src1.size())?;

    parallel::par_iter_rows_val_two(src1, src2, &mut dst, |&a, &b, out| {
        *out = (a as i16 - b as i16 + DIFF_OFFSET) as u8;
    });

    Ok(dst)
}
