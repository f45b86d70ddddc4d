/// Importer capability and recognition command.
pub mod info;
/// Declared import options command.
pub mod options;
#[cfg(test)]
mod test_support;
mod util;
/// Option visibility command.
pub mod visibility;
