use std::time::Instant;

use argh::FromArgs;
use filtra_image::Image;
use filtra_imgproc::filter::{filter_3x3, FilterKind};
use filtra_imgproc::parallel::resolve_thread_count;
use filtra_io::png::{
    write_image_png_gray8, write_image_png_graya8, write_image_png_rgb8, write_image_png_rgba8,
};
use filtra_io::{read_image_any, GenericImage};

const OUTPUT_PATH: &str = "output.png";

/// Apply a named 3x3 convolution filter to an image
#[derive(Debug, FromArgs)]
struct Args {
    /// path to the input image
    #[argh(positional)]
    input: String,

    /// filter name, one of edge|sharpen|blur|gauss|emboss|identity;
    /// unrecognized names apply identity
    #[argh(positional)]
    filter: String,

    /// number of worker threads (falls back to the THREADS env var, else
    /// the available parallelism)
    #[argh(option, short = 't')]
    threads: Option<usize>,
}

impl Args {
    fn thread_hint(&self) -> Option<usize> {
        self.threads
            .or_else(|| std::env::var("THREADS").ok().and_then(|s| s.parse().ok()))
    }
}

fn apply<const C: usize>(
    src: &Image<u8, C>,
    kind: FilterKind,
    num_threads: usize,
) -> Result<Image<u8, C>, Box<dyn std::error::Error>> {
    let mut dst = Image::from_size_val(src.size(), 0)?;
    filter_3x3(src, &mut dst, &kind.kernel(), num_threads)?;
    Ok(dst)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();
    let start = Instant::now();

    let kind = FilterKind::from_name(&args.filter);
    let image = read_image_any(&args.input)?;
    let num_threads = resolve_thread_count(args.thread_hint()).min(image.size().height.max(1));

    log::info!(
        "applying {:?} to {} ({}, {} channels) with {} thread(s)",
        kind,
        args.input,
        image.size(),
        image.num_channels(),
        num_threads
    );

    match image {
        GenericImage::L8(src) => {
            write_image_png_gray8(OUTPUT_PATH, &apply(&src, kind, num_threads)?)?
        }
        GenericImage::La8(src) => {
            write_image_png_graya8(OUTPUT_PATH, &apply(&src, kind, num_threads)?)?
        }
        GenericImage::Rgb8(src) => {
            write_image_png_rgb8(OUTPUT_PATH, &apply(&src, kind, num_threads)?)?
        }
        GenericImage::Rgba8(src) => {
            write_image_png_rgba8(OUTPUT_PATH, &apply(&src, kind, num_threads)?)?
        }
    }

    log::info!(
        "wrote {} in {:.3?} using {} thread(s)",
        OUTPUT_PATH,
        start.elapsed(),
        num_threads
    );

    Ok(())
}
