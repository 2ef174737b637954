use std::collections::VecDeque;

use thiserror::Error;

use crate::board::Coord;

/// Error when parsing a click script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid token: '{0}'")]
pub struct ParseError(String);

/// Something the player asked the game to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A clicked square: selects a piece or completes a move.
    Click(Coord),
    /// Answer to a pending promotion prompt.
    Promote(String),
    /// The current player gives up.
    Concede,
    /// Start over from the initial position.
    Reset,
}

/// A queue of intents parsed from a click script.
///
/// New script can be appended at any time for interactive use.
#[derive(Debug, Clone, Default)]
pub struct ScriptedClicks {
    pending: VecDeque<Intent>,
}

impl ScriptedClicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and queue additional script.
    ///
    /// Format: whitespace-separated tokens
    /// - a square name (e.g. `e2`) clicks that square
    /// - `=X` answers a promotion prompt with `X` (`=` alone answers empty)
    /// - `resign` concedes, `reset` restarts
    ///
    /// Example: `"e2 e4 e7 e5 g1 f3"` plays three moves.
    ///
    /// On error nothing is queued.
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseError> {
        let intents = parse_script(script)?;
        self.pending.extend(intents);
        Ok(())
    }

    /// Pop the next pending intent.
    pub fn next_intent(&mut self) -> Option<Intent> {
        self.pending.pop_front()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Hand every pending intent to the callback in order.
    pub fn drain<F>(&mut self, mut on_intent: F)
    where
        F: FnMut(Intent),
    {
        while let Some(intent) = self.next_intent() {
            on_intent(intent);
        }
    }
}

/// Parse a click script into intents.
fn parse_script(script: &str) -> Result<Vec<Intent>, ParseError> {
    script.split_whitespace().map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<Intent, ParseError> {
    if let Some(answer) = token.strip_prefix('=') {
        return Ok(Intent::Promote(answer.to_string()));
    }
    match token {
        "resign" => Ok(Intent::Concede),
        "reset" => Ok(Intent::Reset),
        _ => token
            .parse()
            .map(Intent::Click)
            .map_err(|_| ParseError(token.to_string())),
    }
}
