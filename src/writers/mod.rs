pub mod text_writer;

pub use text_writer::{write_line, write_values};
