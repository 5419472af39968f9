use super::{Kernel, KernelError};

/// Create a box blur kernel: all ones divided by `kernel_size^2`.
///
/// # Arguments
///
/// * `kernel_size` - The side length of the kernel. Must be odd.
///
/// # Errors
///
/// [`KernelError::EmptyKernel`] for a zero size, [`KernelError::EvenSizedKernel`]
/// for an even size and [`KernelError::KernelTooLarge`] when the area does not fit
/// the `i32` divisor.
pub fn box_kernel(kernel_size: usize) -> Result<Kernel<i32>, KernelError> {
    let area = kernel_size
        .checked_mul(kernel_size)
        .ok_or(KernelError::KernelTooLarge(kernel_size))?;
    let divisor =
        i32::try_from(area.max(1)).map_err(|_| KernelError::KernelTooLarge(kernel_size))?;
    Kernel::new(kernel_size, vec![1; area], divisor)
}

/// 3x3 box blur kernel, divisor 9.
pub fn box_3x3() -> Kernel<i32> {
    Kernel {
        size: 3,
        weights: vec![1; 9],
        divisor: 9,
    }
}

/// 5x5 box blur kernel, divisor 25.
pub fn box_5x5() -> Kernel<i32> {
    Kernel {
        size: 5,
        weights: vec![1; 25],
        divisor: 25,
    }
}

/// 3x3 binomial approximation of a gaussian, divisor 16.
///
/// ```text
/// 1 2 1
/// 2 4 2
/// 1 2 1
/// ```
pub fn gaussian_3x3() -> Kernel<i32> {
    Kernel {
        size: 3,
        weights: vec![1, 2, 1, 2, 4, 2, 1, 2, 1],
        divisor: 16,
    }
}

/// 3x3 four-neighbour laplacian, divisor 1.
///
/// ```text
///  0 -1  0
/// -1  4 -1
///  0 -1  0
/// ```
///
/// Flat regions map to 0 and edges to large positive or (wrapped) negative values.
pub fn laplacian_3x3() -> Kernel<i32> {
    Kernel {
        size: 3,
        weights: vec![0, -1, 0, -1, 4, -1, 0, -1, 0],
        divisor: 1,
    }
}

/// Create a sampled 2d gaussian kernel normalized to sum 1.
///
/// # Arguments
///
/// * `kernel_size` - The side length of the kernel. Must be odd.
/// * `sigma` - The standard deviation of the gaussian.
///
/// # Returns
///
/// A float kernel with divisor 1.0, built as the outer product of the 1d kernel.
pub fn gaussian_kernel(kernel_size: usize, sigma: f32) -> Result<Kernel<f32>, KernelError> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(KernelError::InvalidSigma(sigma));
    }

    let kernel_1d = gaussian_kernel_1d(kernel_size, sigma);

    let weights = kernel_1d
        .iter()
        .flat_map(|&ky| kernel_1d.iter().map(move |&kx| kx * ky))
        .collect();

    Kernel::new(kernel_size, weights, 1.0)
}

fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = kernel_size.saturating_sub(1) as f32 / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f32 - mean;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}
