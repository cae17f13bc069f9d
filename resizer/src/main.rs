use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use image::{DynamicImage, ImageReader};
use log::debug;
use pixel_resample as pr;
use pixel_resample::PixelBuffer;

mod structs;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
#[clap(disable_help_flag = true)]
struct Cli {
    #[clap(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,

    /// Path to source image file
    #[clap(value_parser)]
    source_path: PathBuf,

    /// Path to result image file
    #[clap(value_parser)]
    destination_path: Option<PathBuf>,

    /// Width of result image, in pixels or percentage of the source image's width
    #[clap(short, long, value_parser)]
    width: Option<structs::Size>,

    /// Height of result image in pixels or percentage of the source image's height
    #[clap(short, long, value_parser)]
    height: Option<structs::Size>,

    /// Overwrite destination file
    #[clap(short, long, action)]
    overwrite: bool,

    /// Algorithm used to resize image
    #[clap(short, long, value_enum, default_value_t = structs::Algorithm::Area)]
    algorithm: structs::Algorithm,

    /// Crop JPEG source image before resizing: "left,top,width,height"
    #[clap(long, value_parser)]
    crop: Option<structs::Crop>,

    /// Scale JPEG source image while decoding: "num/denom"
    #[clap(long, value_parser)]
    scale: Option<structs::Scale>,

    /// Quality of JPEG result image (1-100)
    #[clap(long, default_value_t = 95)]
    quality: u8,

    /// Chroma subsampling of JPEG result image
    #[clap(long, value_enum, default_value_t = structs::Subsampling::S420)]
    subsampling: structs::Subsampling,

    /// Write progressive JPEG
    #[clap(long, action)]
    progressive: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    resize(&cli)
}

fn resize(cli: &Cli) -> Result<()> {
    let src_image = open_source_image(cli)?;
    let (dst_width, dst_height) = destination_size(cli, &src_image);

    let mut resizer = pr::Resizer::new(cli.algorithm.into());
    debug!(
        "Resize the source image {}x{} into {}x{} with {:?}",
        src_image.width(),
        src_image.height(),
        dst_width,
        dst_height,
        resizer.algorithm
    );
    let dst_image = resizer
        .resize(&src_image, dst_width, dst_height)
        .with_context(|| "Failed to resize image")?;

    save_result(cli, &dst_image)
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
        .unwrap_or(false)
}

fn open_source_image(cli: &Cli) -> Result<PixelBuffer> {
    let source_path = &cli.source_path;
    debug!("Opening the source image {:?}", source_path);

    if is_jpeg(source_path) {
        let mut options = pr::DecodeOptions::new();
        if let Some(crop) = cli.crop {
            options = options.crop(crop.0);
        }
        if let Some(scale) = cli.scale {
            options = options.scale(scale.num, scale.denom);
        }
        let data = std::fs::read(source_path)
            .with_context(|| format!("Failed to read source file from {:?}", source_path))?;
        let image = pr::decode(&data, &options).with_context(|| "Failed to decode source image")?;
        debug!(
            "Decoded {}x{} of {}x{} source image",
            image.width(),
            image.height(),
            image.origin_width(),
            image.origin_height()
        );
        return Ok(image);
    }

    if cli.scale.is_some() {
        return Err(anyhow!("Decoding scale is supported for JPEG images only"));
    }
    let image = ImageReader::open(source_path)
        .with_context(|| format!("Failed to read source file from {:?}", source_path))?
        .decode()
        .with_context(|| "Failed to decode source image")?;
    let color_type = image.color();
    let mut image = PixelBuffer::try_from(&image).map_err(|_| {
        anyhow!(
            "Unsupported pixel's format of source image: {:?}",
            color_type
        )
    })?;
    if let Some(crop) = cli.crop {
        debug!("Crop the source image with {:?}", crop.0);
        image = image
            .crop(crop.0)
            .with_context(|| "Failed to crop source image")?;
    }
    Ok(image)
}

fn destination_size(cli: &Cli, src_image: &PixelBuffer) -> (u32, u32) {
    if src_image.is_empty() {
        return (0, 0);
    }

    let aspect_ratio = src_image.width() as f32 / src_image.height() as f32;

    match (cli.width, cli.height) {
        (None, None) => (src_image.width(), src_image.height()),
        (Some(width), None) => {
            let width = width.calculate_size(src_image.width());
            (width, (width as f32 / aspect_ratio).round() as u32)
        }
        (None, Some(height)) => {
            let height = height.calculate_size(src_image.height());
            ((height as f32 * aspect_ratio).round() as u32, height)
        }
        (Some(width), Some(height)) => (
            width.calculate_size(src_image.width()),
            height.calculate_size(src_image.height()),
        ),
    }
}

fn save_result(cli: &Cli, image: &PixelBuffer) -> Result<()> {
    let result_path = if let Some(path) = cli.destination_path.clone() {
        path
    } else {
        let mut path = PathBuf::from("./");
        let ext = cli
            .source_path
            .extension()
            .unwrap_or_else(|| OsStr::new("jpg"));
        path.push("result");
        path.set_extension(ext);
        path
    };
    if result_path.exists() && !cli.overwrite {
        return Err(anyhow!(
            "Destination path {:?} already exists.",
            result_path
        ));
    };

    debug!("Save the result image into the file {:?}", result_path);
    if is_jpeg(&result_path) {
        let options = pr::EncodeOptions::new()
            .quality(cli.quality)
            .subsampling(cli.subsampling.into())
            .progressive(cli.progressive);
        let data = pr::encode(image, &options).with_context(|| "Failed to encode the result image")?;
        std::fs::write(&result_path, data).with_context(|| "Failed to save the result image")?;
    } else {
        let dyn_image = DynamicImage::try_from(image.clone()).map_err(|_| {
            anyhow!(
                "Unsupported color space of result image: {:?}",
                image.color_space()
            )
        })?;
        dyn_image
            .save(&result_path)
            .with_context(|| "Failed to save the result image")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }

    #[test]
    fn jpeg_extensions() {
        assert!(is_jpeg(Path::new("photo.jpg")));
        assert!(is_jpeg(Path::new("photo.JPEG")));
        assert!(!is_jpeg(Path::new("photo.png")));
        assert!(!is_jpeg(Path::new("photo")));
    }
}
