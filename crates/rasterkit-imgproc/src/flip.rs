use rasterkit_image::Image;
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};

/// Flip the input image horizontally.
///
/// `dst[x, y] = src[width - 1 - x, y]` for every channel.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The flipped image.
///
/// # Example
///
/// ```
/// use rasterkit_image::{Image, ImageSize};
/// use rasterkit_imgproc::flip::horizontal_flip;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0, 1, 2, 3, 4, 5],
/// )
/// .unwrap();
///
/// let flipped = horizontal_flip(&image);
///
/// assert_eq!(flipped.as_slice(), &[1, 0, 3, 2, 5, 4]);
/// ```
pub fn horizontal_flip<T, const C: usize>(src: &Image<T, C>) -> Image<T, C>
where
    T: Copy + Send + Sync,
{
    let mut dst = src.clone();

    if src.is_empty() {
        return dst;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(src.cols() * C)
        .for_each(|row| {
            let cols = row.len() / C;
            for i in 0..cols / 2 {
                let j = cols - 1 - i;
                for c in 0..C {
                    row.swap(i * C + c, j * C + c);
                }
            }
        });

    dst
}

/// Flip the input image vertically.
///
/// `dst[x, y] = src[x, height - 1 - y]` for every channel.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The flipped image.
///
/// # Example
///
/// ```
/// use rasterkit_image::{Image, ImageSize};
/// use rasterkit_imgproc::flip::vertical_flip;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0, 1, 2, 3, 4, 5],
/// )
/// .unwrap();
///
/// let flipped = vertical_flip(&image);
///
/// assert_eq!(flipped.as_slice(), &[4, 5, 2, 3, 0, 1]);
/// ```
pub fn vertical_flip<T, const C: usize>(src: &Image<T, C>) -> Image<T, C>
where
    T: Copy + Send + Sync,
{
    let mut dst = src.clone();

    if src.is_empty() {
        return dst;
    }

    let stride = src.cols() * C;

    dst.as_slice_mut()
        .par_chunks_exact_mut(stride)
        .zip_eq(src.as_slice().par_chunks_exact(stride).rev())
        .for_each(|(dst_row, src_row)| dst_row.copy_from_slice(src_row));

    dst
}
