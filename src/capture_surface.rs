pub mod impl_fake;
pub mod impl_files;
pub mod interface;
