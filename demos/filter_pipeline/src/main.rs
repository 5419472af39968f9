use argh::FromArgs;
use std::path::PathBuf;

use rasterkit::image::Image;
use rasterkit::imgproc::{
    color, core,
    filter::{self, kernels, BorderPolicy},
    parallel::ExecutionStrategy,
    threshold,
};
use rasterkit::io::{functional as F, png, timing};

#[derive(FromArgs)]
/// Run the grayscale, threshold and convolution pipeline and time every stage
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// directory where the result images are written
    #[argh(option, short = 'o', default = "PathBuf::from(\"img\")")]
    output_dir: PathBuf,

    /// number of runs averaged per stage
    #[argh(option, short = 'n', default = "10")]
    iterations: u32,

    /// binarization threshold
    #[argh(option, short = 't', default = "128")]
    threshold: u8,

    /// border policy of the filters: zero or cropped
    #[argh(option, default = "BorderPolicy::ZeroPadded", from_str_fn(parse_border))]
    border: BorderPolicy,

    /// run every filter on the calling thread
    #[argh(switch)]
    serial: bool,

    /// use weighted luma instead of the channel average for grayscale
    #[argh(switch)]
    luma: bool,
}

fn parse_border(value: &str) -> Result<BorderPolicy, String> {
    match value {
        "zero" => Ok(BorderPolicy::ZeroPadded),
        "cropped" => Ok(BorderPolicy::Cropped),
        _ => Err(format!("unknown border policy `{value}`, expected zero or cropped")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let strategy = if args.serial {
        ExecutionStrategy::Serial
    } else {
        ExecutionStrategy::ParallelRows
    };

    // read the image
    let image: Image<u8, 4> = F::read_image_any_rgba8(&args.image_path)?;

    std::fs::create_dir_all(&args.output_dir)?;
    let out = |name: &str| args.output_dir.join(name);

    println!(
        "{} ({})\nAverage Elapsed Time(Iteration: {})",
        args.image_path.display(),
        image.size(),
        args.iterations
    );

    let n = args.iterations;
    let mut records = Vec::new();

    // gray
    let (record, gray) = timing::time_average("Gray", n, || {
        if args.luma {
            color::gray_from_rgba8_luma(&image)
        } else {
            color::gray_from_rgba8(&image)
        }
    });
    let gray = gray?;
    records.push(record);
    png::write_image_png_gray8(out("gray.png"), &gray)?;

    // binarization
    let (record, bin) = timing::time_average("Binarization", n, || {
        threshold::threshold_binary(&gray, args.threshold)
    });
    let bin = bin?;
    records.push(record);
    png::write_image_png_gray8(out("binarization.png"), &bin)?;

    // simple
    let box3 = kernels::box_3x3();
    let (record, simple) = timing::time_average("Simple(Gray)", n, || {
        filter::filter2d_with(&gray, &box3, args.border, strategy)
    });
    let simple = simple?;
    records.push(record);
    png::write_image_png_gray8(out("simple.png"), &simple)?;

    // rgba filter
    let (record, simple_rgba) = timing::time_average("Simple(RGBA)", n, || {
        filter::filter2d_with(&image, &box3, args.border, strategy)
    });
    records.push(record);
    png::write_image_png_rgba8(out("simpleRgba.png"), &simple_rgba?)?;

    // gaussian
    let gaussian3 = kernels::gaussian_3x3();
    let (record, gaussian) = timing::time_average("Gaussian(Gray)", n, || {
        filter::filter2d_with(&gray, &gaussian3, args.border, strategy)
    });
    let gaussian = gaussian?;
    records.push(record);
    png::write_image_png_gray8(out("gaussian.png"), &gaussian)?;

    // sharpening, applied to the binarized image
    let sharpen = kernels::laplacian_3x3().with_divisor(9)?;
    let (record, sharpened) = timing::time_average("Sharpening(Gray)", n, || {
        filter::filter2d_with(&bin, &sharpen, args.border, strategy)
    });
    records.push(record);
    png::write_image_png_gray8(out("sharpening.png"), &sharpened?)?;

    // gray - gaussian + 128
    png::write_image_png_gray8(
        out("subGaussian.png"),
        &core::sub_with_offset(&gray, &gaussian)?,
    )?;

    // gray - simple + 128
    png::write_image_png_gray8(out("subSimple.png"), &core::sub_with_offset(&gray, &simple)?)?;

    log::info!("results written to {}", args.output_dir.display());

    for record in &records {
        println!("{record}");
    }

    Ok(())
}
