use num_traits::Zero;
use rasterkit_image::{Image, ImageError};
use thiserror::Error;

use super::{Kernel, KernelError, KernelWeight};
use crate::parallel::{self, ExecutionStrategy, ParallelError};

/// Errors raised by the filter operations.
#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    /// The kernel could not be built.
    #[error(transparent)]
    Kernel(#[from] KernelError),

    /// Error related to image.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The execution strategy could not be honoured.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}

/// How the convolution treats pixels whose neighbourhood leaves the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderPolicy {
    /// Only pixels with full kernel support are computed.
    ///
    /// The `margin` wide border of the output keeps its zero initialized value.
    Cropped,

    /// Every pixel is computed and samples outside the image contribute 0.
    ///
    /// Example: ...0 0 | a b c d | 0 0...
    #[default]
    ZeroPadded,
}

/// Convolve an 8 bit image with an odd square kernel.
///
/// For every output coordinate `(x, y)` in the range selected by `border`:
///
/// ```text
/// sum = Σ src(x + i, y + j) * kernel[margin + j][margin + i],  i, j ∈ [-margin, margin]
/// dst(x, y) = (sum / divisor) as u8
/// ```
///
/// The quotient is truncated toward zero and narrowed with a truncating cast, so
/// results outside `[0, 255]` wrap around instead of being clamped. Every channel
/// is convolved independently with the same kernel. Float kernels sum in `f64`
/// and snap quotients within `1e-3` of an integer before truncating.
///
/// Rows are processed in parallel on the global thread pool, see [`filter2d_with`]
/// to choose another [`ExecutionStrategy`].
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `kernel` - The convolution kernel.
/// * `border` - The border policy.
///
/// # Returns
///
/// A new image with the same size as `src`.
///
/// # Example
///
/// ```
/// use rasterkit_image::Image;
/// use rasterkit_imgproc::filter::{filter2d, kernels, BorderPolicy};
///
/// let image = Image::<u8, 1>::from_size_val([5, 5].into(), 255).unwrap();
///
/// let padded = filter2d(&image, &kernels::box_3x3(), BorderPolicy::ZeroPadded).unwrap();
/// // 4 of the 9 neighbours of a corner are inside the image: 255 * 4 / 9
/// assert_eq!(padded.get_pixel(0, 0, 0).unwrap(), 113);
/// assert_eq!(padded.get_pixel(2, 2, 0).unwrap(), 255);
///
/// let cropped = filter2d(&image, &kernels::box_3x3(), BorderPolicy::Cropped).unwrap();
/// assert_eq!(cropped.get_pixel(0, 0, 0).unwrap(), 0);
/// assert_eq!(cropped.get_pixel(1, 1, 0).unwrap(), 255);
/// ```
pub fn filter2d<const C: usize, W: KernelWeight>(
    src: &Image<u8, C>,
    kernel: &Kernel<W>,
    border: BorderPolicy,
) -> Result<Image<u8, C>, FilterError> {
    filter2d_with(src, kernel, border, ExecutionStrategy::default())
}

/// Convolve an 8 bit image with an odd square kernel using the given strategy.
///
/// Same semantics as [`filter2d`]; the output is identical for every strategy.
///
/// # Errors
///
/// [`FilterError::Parallel`] if the strategy is invalid, e.g. `Fixed(0)`.
pub fn filter2d_with<const C: usize, W: KernelWeight>(
    src: &Image<u8, C>,
    kernel: &Kernel<W>,
    border: BorderPolicy,
    strategy: ExecutionStrategy,
) -> Result<Image<u8, C>, FilterError> {
    let mut dst = Image::<u8, C>::zeros(src.size())?;

    let (cols, rows) = (src.cols(), src.rows());
    let margin = kernel.margin();

    let (x_range, y_range) = match border {
        BorderPolicy::Cropped => (
            margin..cols.saturating_sub(margin),
            margin..rows.saturating_sub(margin),
        ),
        BorderPolicy::ZeroPadded => (0..cols, 0..rows),
    };

    log::debug!(
        "filter2d: {}x{}x{} kernel {}x{} {:?} {:?}",
        cols,
        rows,
        C,
        kernel.size(),
        kernel.size(),
        border,
        strategy
    );

    if x_range.is_empty() || y_range.is_empty() {
        if !src.is_empty() {
            log::warn!(
                "filter2d: image {} is smaller than the {}x{} kernel support, output left blank",
                src.size(),
                kernel.size(),
                kernel.size()
            );
        }
        // still validate the strategy so that callers see the same errors
        parallel::execute_rows(&mut dst, strategy, |_, _| {})?;
        return Ok(dst);
    }

    let src_data = src.as_slice();
    let stride = cols * C;
    let divisor = kernel.divisor();

    parallel::execute_rows(&mut dst, strategy, |y, dst_row| {
        if !y_range.contains(&y) {
            return;
        }

        for x in x_range.clone() {
            let mut sum = [<W::Acc as Zero>::zero(); C];

            for ky in 0..kernel.size() {
                // rows above or below the image contribute 0
                let Some(sy) = (y + ky).checked_sub(margin).filter(|&sy| sy < rows) else {
                    continue;
                };
                let src_row = &src_data[sy * stride..(sy + 1) * stride];

                for kx in 0..kernel.size() {
                    let Some(sx) = (x + kx).checked_sub(margin).filter(|&sx| sx < cols) else {
                        continue;
                    };

                    let weight = kernel.weight(kx, ky);
                    let src_pixel = &src_row[sx * C..(sx + 1) * C];
                    sum.iter_mut()
                        .zip(src_pixel.iter())
                        .for_each(|(acc, &sample)| *acc = *acc + weight.weigh(sample));
                }
            }

            dst_row[x * C..(x + 1) * C]
                .iter_mut()
                .zip(sum.iter())
                .for_each(|(out, &acc)| *out = W::narrow(acc, divisor));
        }
    })?;

    Ok(dst)
}
