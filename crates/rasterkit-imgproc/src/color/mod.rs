mod gray;

pub use gray::{gray_from_rgb8, gray_from_rgba8, gray_from_rgba8_luma, rgba_from_gray};
