pub mod orphan;
pub mod snap;

pub use orphan::remove_orphans;
pub use snap::snap_to_local_palette;
