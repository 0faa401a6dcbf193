use clap::Parser;
use lib_sweep::{remove_orphans, snap_to_local_palette, BufferError, PixelBuffer};
use log::info;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "cli-sweep")]
#[command(version)]
#[command(about = "Clean up flat-color pixel art: snap near-duplicate colors and remove stray pixels")]
struct Args {
    /// Input image path
    input: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "result.png")]
    output: PathBuf,

    /// Number of orphan-removal passes (0 disables cleaning)
    #[arg(long, default_value_t = 0)]
    clean: u32,

    /// Palette merge threshold in RGB distance (values <= 0 disable snapping)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    snap: i32,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("file not found '{}'", .0.display())]
    FileNotFound(PathBuf),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("pixel buffer error: {0}")]
    Buffer(#[from] BufferError),
}

/// The image crate hands pixels back in (r, g, b, a) byte order; the core
/// operates on the stored (b, g, r, a) layout. Swapping the red and blue
/// bytes converts in either direction.
fn swap_red_blue(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
}

fn main() -> Result<(), CliError> {
    lib_sweep::init_logging();

    let args = Args::parse();

    if !args.input.exists() {
        return Err(CliError::FileNotFound(args.input));
    }

    let mut img = image::open(&args.input)?.to_rgba8();
    let (width, height) = img.dimensions();
    println!("loaded: {} ({}x{})", args.input.display(), width, height);
    info!("decoded {} as {}x{} rgba", args.input.display(), width, height);

    swap_red_blue(&mut img);
    let stride = width as usize * 4;

    {
        let mut buffer = PixelBuffer::new(&mut img, width, height, stride)?;

        if args.snap > 0 {
            print!("Snapping palette (T:{})... ", args.snap);
            snap_to_local_palette(&mut buffer, args.snap as f64)?;
            println!("done.");
        }

        if args.clean > 0 {
            print!("Removing orphans ({} passes)... ", args.clean);
            for _ in 0..args.clean {
                remove_orphans(&mut buffer)?;
            }
            println!("done.");
        }
    }

    swap_red_blue(&mut img);
    img.save(&args.output)?;
    println!("Saved to: {}", args.output.display());

    Ok(())
}
