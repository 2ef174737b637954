mod display;
mod script;
mod terminal;

pub use display::{DisplayError, TerminalDisplay, glyph};
pub use script::{Intent, ParseError, ScriptedClicks};
pub use terminal::{Notice, apply_intent, run_interactive_terminal};
