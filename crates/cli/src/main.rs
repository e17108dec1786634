use std::error::Error;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use fade_core::effects::domain::region_effect::RegionEffect;
use fade_core::effects::infrastructure::alpha_scale::AlphaScale;
use fade_core::shared::frame::Frame;
use fade_core::shared::parallel::ParallelOptions;
use fade_core::shared::pixel::Rgba8;
use fade_core::shared::region::Region;

/// Scale the opacity of an image region.
#[derive(Parser)]
#[command(name = "fade")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file.
    output: PathBuf,

    /// Opacity multiplier (0.0-1.0).
    #[arg(long, default_value = "0.5")]
    opacity: f32,

    /// Target region as X,Y,WIDTH,HEIGHT (default: whole image).
    #[arg(long, value_parser = parse_region)]
    region: Option<Region>,

    /// Worker threads for the row loop (default: all cores).
    #[arg(long)]
    threads: Option<NonZeroUsize>,
}

fn parse_region(s: &str) -> Result<Region, String> {
    let parts: Vec<i32> = s
        .split(',')
        .map(|p| p.trim().parse::<i32>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid region '{s}': {e}"))?;
    match parts[..] {
        [x, y, width, height] => Ok(Region::new(x, y, width, height)),
        _ => Err(format!("invalid region '{s}': expected X,Y,WIDTH,HEIGHT")),
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let options = match cli.threads {
        Some(n) => ParallelOptions::with_max_workers(n)?,
        None => ParallelOptions::new(),
    };

    fade_image(&cli.input, &cli.output, cli.opacity, cli.region, &options)
}

/// Decodes `input` as RGBA8, scales alpha over `region` (whole image when
/// `None`), and encodes the result to `output`.
fn fade_image(
    input: &Path,
    output: &Path,
    opacity: f32,
    region: Option<Region>,
    options: &ParallelOptions,
) -> Result<(), Box<dyn Error>> {
    let effect = AlphaScale::new(opacity)?;

    let image = image::open(input)?.to_rgba8();
    let (width, height) = image.dimensions();
    let mut frame: Frame<Rgba8> = Frame::new(bytemuck::cast_vec(image.into_raw()), width, height);

    let region = region.unwrap_or_else(|| frame.bounds());
    log::info!(
        "fading {width}x{height} image, region {:?}, opacity {}",
        region,
        effect.opacity()
    );
    effect.apply(&mut frame, region, options);

    let raw: Vec<u8> = bytemuck::cast_vec(frame.into_data());
    image::RgbaImage::from_raw(width, height, raw)
        .ok_or("pixel buffer does not match image dimensions")?
        .save(output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_region_valid() {
        assert_eq!(parse_region("2,3,4,5"), Ok(Region::new(2, 3, 4, 5)));
    }

    #[test]
    fn test_parse_region_allows_negative_origin() {
        assert_eq!(parse_region("-3, -3, 5, 5"), Ok(Region::new(-3, -3, 5, 5)));
    }

    #[test]
    fn test_parse_region_wrong_arity() {
        assert!(parse_region("1,2,3").is_err());
        assert!(parse_region("1,2,3,4,5").is_err());
    }

    #[test]
    fn test_parse_region_non_numeric() {
        assert!(parse_region("a,b,c,d").is_err());
    }

    fn write_test_image(dir: &Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join("test.png");
        let mut img = image::RgbaImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgba([50, 100, 200, 255]);
        }
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_fade_image_region_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_test_image(dir.path(), 10, 10);
        let output = dir.path().join("out.png");

        fade_image(
            &input,
            &output,
            0.5,
            Some(Region::new(2, 2, 4, 4)),
            &ParallelOptions::new(),
        )
        .unwrap();

        let result = image::open(&output).unwrap().to_rgba8();
        // Inside the region: alpha halved (255 * 0.5 rounds to 128)
        assert_eq!(result.get_pixel(3, 3).0, [50, 100, 200, 128]);
        // Outside: untouched
        assert_eq!(result.get_pixel(0, 0).0, [50, 100, 200, 255]);
        assert_eq!(result.get_pixel(7, 7).0, [50, 100, 200, 255]);
    }

    #[test]
    fn test_fade_image_defaults_to_whole_image() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_test_image(dir.path(), 6, 4);
        let output = dir.path().join("out.png");

        fade_image(&input, &output, 0.0, None, &ParallelOptions::new()).unwrap();

        let result = image::open(&output).unwrap().to_rgba8();
        assert!(result.pixels().all(|p| p.0 == [50, 100, 200, 0]));
    }

    #[test]
    fn test_fade_image_rejects_invalid_opacity() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_test_image(dir.path(), 4, 4);
        let output = dir.path().join("out.png");

        let result = fade_image(&input, &output, 1.5, None, &ParallelOptions::new());
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
