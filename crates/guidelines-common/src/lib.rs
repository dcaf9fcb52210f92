pub mod error;
pub mod lockfile;
pub mod version;
