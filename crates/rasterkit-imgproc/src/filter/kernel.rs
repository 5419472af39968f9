use num_traits::Zero;
use thiserror::Error;

/// Errors raised while building a convolution kernel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// The kernel has no weights.
    #[error("kernel is empty")]
    EmptyKernel,

    /// The kernel rows do not form a square matrix.
    #[error("kernel must be square, got {rows} rows with a row of {cols} columns")]
    NonSquareKernel {
        /// Number of rows of the kernel.
        rows: usize,
        /// Length of the first offending row.
        cols: usize,
    },

    /// The kernel side length is even, so it has no center.
    #[error("kernel side length must be odd, got {0}")]
    EvenSizedKernel(usize),

    /// The normalizing divisor is zero.
    #[error("kernel divisor must be nonzero")]
    ZeroDivisor,

    /// The kernel area does not fit the `i32` divisor of a box kernel.
    #[error("kernel side length {0} is too large")]
    KernelTooLarge(usize),

    /// The sigma of a sampled gaussian kernel is not a positive finite number.
    #[error("gaussian sigma must be positive and finite, got {0}")]
    InvalidSigma(f32),
}

/// A weight type usable in a [`Kernel`].
///
/// The accumulator must hold `255 * max|weight| * k * k` for the kernel sizes in
/// use; integer weights accumulate in `i64`, float weights in `f64`.
pub trait KernelWeight: Copy + Send + Sync + Zero + std::fmt::Debug {
    /// Accumulator used for the weighted sum.
    type Acc: Copy + Send + Sync + Zero + std::ops::Add<Output = Self::Acc>;

    /// Weight a single 8 bit sample.
    fn weigh(self, sample: u8) -> Self::Acc;

    /// Divide the accumulated sum by `divisor` and narrow it to a sample.
    ///
    /// The quotient is truncated toward zero and then cast to `u8`, keeping only
    /// the low 8 bits. Values outside `[0, 255]` wrap instead of saturating.
    fn narrow(sum: Self::Acc, divisor: Self) -> u8;
}

impl KernelWeight for i32 {
    type Acc = i64;

    #[inline]
    fn weigh(self, sample: u8) -> i64 {
        self as i64 * sample as i64
    }

    #[inline]
    fn narrow(sum: i64, divisor: i32) -> u8 {
        (sum / divisor as i64) as u8
    }
}

/// Float quotients closer than this to an integer are snapped to it before truncation.
const FLOAT_SNAP_EPSILON: f64 = 1e-3;

impl KernelWeight for f32 {
    type Acc = f64;

    #[inline]
    fn weigh(self, sample: u8) -> f64 {
        self as f64 * sample as f64
    }

    #[inline]
    fn narrow(sum: f64, divisor: f32) -> u8 {
        let quotient = sum / divisor as f64;
        let nearest = quotient.round();
        let value = if (quotient - nearest).abs() < FLOAT_SNAP_EPSILON {
            nearest
        } else {
            quotient.trunc()
        };
        value as i64 as u8
    }
}

/// An odd sized square convolution kernel with a normalizing divisor.
///
/// Weights are stored row-major, so `weight(col, row)` is `weights[row * size + col]`.
/// A `Kernel` can only be obtained through validating constructors, so a value of
/// this type is always square, odd sized and has a nonzero divisor.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel<W> {
    pub(super) size: usize,
    pub(super) weights: Vec<W>,
    pub(super) divisor: W,
}

impl<W: KernelWeight> Kernel<W> {
    /// Create a kernel from its rows.
    ///
    /// # Arguments
    ///
    /// * `rows` - The kernel rows, top to bottom.
    /// * `divisor` - The normalizing divisor applied to the weighted sum.
    ///
    /// # Errors
    ///
    /// * [`KernelError::EmptyKernel`] if there are no rows.
    /// * [`KernelError::NonSquareKernel`] if any row length differs from the number of rows.
    /// * [`KernelError::EvenSizedKernel`] if the side length is even.
    /// * [`KernelError::ZeroDivisor`] if `divisor` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit_imgproc::filter::{Kernel, KernelError};
    ///
    /// let kernel = Kernel::from_rows(&[[1, 2, 1], [2, 4, 2], [1, 2, 1]], 16).unwrap();
    /// assert_eq!(kernel.size(), 3);
    /// assert_eq!(kernel.margin(), 1);
    ///
    /// let even = Kernel::from_rows(&[[1, 1], [1, 1]], 4);
    /// assert_eq!(even, Err(KernelError::EvenSizedKernel(2)));
    /// ```
    pub fn from_rows<R: AsRef<[W]>>(rows: &[R], divisor: W) -> Result<Self, KernelError> {
        let size = rows.len();
        if size == 0 {
            return Err(KernelError::EmptyKernel);
        }

        if let Some(row) = rows.iter().find(|row| row.as_ref().len() != size) {
            return Err(KernelError::NonSquareKernel {
                rows: size,
                cols: row.as_ref().len(),
            });
        }

        let weights = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();

        Self::new(size, weights, divisor)
    }

    /// Create a kernel from a row-major vector of `size * size` weights.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Kernel::from_rows`]; a weight count different from
    /// `size * size` is reported as [`KernelError::NonSquareKernel`].
    pub fn new(size: usize, weights: Vec<W>, divisor: W) -> Result<Self, KernelError> {
        if size == 0 || weights.is_empty() {
            return Err(KernelError::EmptyKernel);
        }

        if weights.len() != size * size {
            return Err(KernelError::NonSquareKernel {
                rows: size,
                cols: weights.len() / size,
            });
        }

        if size % 2 == 0 {
            return Err(KernelError::EvenSizedKernel(size));
        }

        if divisor.is_zero() {
            return Err(KernelError::ZeroDivisor);
        }

        Ok(Self {
            size,
            weights,
            divisor,
        })
    }

    /// Rebuild the kernel with the same weights and a different divisor.
    ///
    /// # Errors
    ///
    /// [`KernelError::ZeroDivisor`] if `divisor` is zero.
    pub fn with_divisor(self, divisor: W) -> Result<Self, KernelError> {
        Self::new(self.size, self.weights, divisor)
    }

    /// Side length of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Border width of the kernel, `size / 2`.
    pub fn margin(&self) -> usize {
        self.size / 2
    }

    /// The normalizing divisor.
    pub fn divisor(&self) -> W {
        self.divisor
    }

    /// The row-major kernel weights.
    pub fn weights(&self) -> &[W] {
        &self.weights
    }

    /// Weight at column `col` and row `row` of the kernel.
    #[inline]
    pub fn weight(&self, col: usize, row: usize) -> W {
        self.weights[row * self.size + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_from_rows() -> Result<(), KernelError> {
        let kernel = Kernel::from_rows(&[[0, -1, 0], [-1, 4, -1], [0, -2, 0]], 1)?;
        assert_eq!(kernel.size(), 3);
        assert_eq!(kernel.margin(), 1);
        assert_eq!(kernel.divisor(), 1);
        assert_eq!(kernel.weight(1, 1), 4);
        assert_eq!(kernel.weight(1, 2), -2);
        assert_eq!(kernel.weight(2, 1), -1);
        Ok(())
    }

    #[test]
    fn kernel_from_vec_rows() -> Result<(), KernelError> {
        let rows = vec![vec![1.0f32; 5]; 5];
        let kernel = Kernel::from_rows(&rows, 25.0)?;
        assert_eq!(kernel.size(), 5);
        assert_eq!(kernel.margin(), 2);
        Ok(())
    }

    #[test]
    fn kernel_even_sized() {
        let res = Kernel::from_rows(&[[1, 1], [1, 1]], 4);
        assert_eq!(res, Err(KernelError::EvenSizedKernel(2)));

        let res = Kernel::new(4, vec![1.0f32; 16], 16.0);
        assert_eq!(res, Err(KernelError::EvenSizedKernel(4)));
    }

    #[test]
    fn kernel_non_square() {
        let rows: Vec<Vec<i32>> = vec![vec![1, 1, 1], vec![1, 1, 1]];
        let res = Kernel::from_rows(&rows, 6);
        assert_eq!(res, Err(KernelError::NonSquareKernel { rows: 2, cols: 3 }));

        let ragged: Vec<Vec<i32>> = vec![vec![1, 1, 1], vec![1, 1], vec![1, 1, 1]];
        let res = Kernel::from_rows(&ragged, 8);
        assert_eq!(res, Err(KernelError::NonSquareKernel { rows: 3, cols: 2 }));

        let res = Kernel::new(3, vec![1; 8], 8);
        assert!(matches!(res, Err(KernelError::NonSquareKernel { .. })));
    }

    #[test]
    fn kernel_empty() {
        let rows: Vec<[i32; 0]> = vec![];
        assert_eq!(Kernel::from_rows(&rows, 1), Err(KernelError::EmptyKernel));
        assert_eq!(Kernel::<i32>::new(0, vec![], 1), Err(KernelError::EmptyKernel));
    }

    #[test]
    fn kernel_zero_divisor() -> Result<(), KernelError> {
        let res = Kernel::from_rows(&[[1]], 0);
        assert_eq!(res, Err(KernelError::ZeroDivisor));

        let kernel = Kernel::from_rows(&[[1.0f32]], 1.0)?;
        assert_eq!(kernel.with_divisor(0.0), Err(KernelError::ZeroDivisor));
        Ok(())
    }

    #[test]
    fn narrow_truncates_and_wraps() {
        assert_eq!(i32::narrow(1020, 9), 113);
        assert_eq!(i32::narrow(-1020, 9), 143);
        assert_eq!(i32::narrow(2295, 9), 255);
        assert_eq!(i32::narrow(256, 1), 0);
        assert_eq!(f32::narrow(1020.0, 9.0), 113);
        assert_eq!(f32::narrow(-1020.0, 9.0), 143);
        assert_eq!(f32::narrow(254.99, 1.0), 254);
    }

    #[test]
    fn narrow_float_snaps_rounding_noise() {
        assert_eq!(f32::narrow(254.99998, 1.0), 255);
        assert_eq!(f32::narrow(99.99999, 1.0), 100);
        assert_eq!(f32::narrow(-112.99999, 1.0), 143);
        assert_eq!(f32::narrow(100.5, 1.0), 100);
    }
}
