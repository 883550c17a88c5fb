/// Natural-language quick capture
///
/// Parses inline shorthand (`!high`, `p1`, `#category`, `@context`,
/// `tomorrow`, `at 5pm`) out of free text.

pub mod parsed;
pub mod parser;
mod phrases;
pub mod preview;

pub use parsed::ParsedCapture;
pub use parser::{contains_recognized_tokens, parse};
pub use preview::render_preview;
