pub mod cleanup;
pub mod raster;

use log::*;
use std::fs::File;
use std::io::Write;

pub use crate::cleanup::{remove_orphans, snap_to_local_palette};
pub use crate::raster::{Bgr, BufferError, PixelBuffer};

pub fn init_logging() {
    let target = Box::new(File::create("log.txt").expect("Can't create file"));

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(target))
        .filter(Some("lib_sweep"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
