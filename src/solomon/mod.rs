pub use convert::convert;

mod convert;
mod error;
mod line;
mod section;
