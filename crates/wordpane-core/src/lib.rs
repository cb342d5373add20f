pub mod formatter;
pub mod normalize;
pub mod render;

pub use formatter::format;

#[cfg(test)]
mod tests;
