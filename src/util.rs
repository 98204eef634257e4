/// Number rendering helpers.
///
/// Formats evaluation results the way a calculator display shows them.
pub mod num;
