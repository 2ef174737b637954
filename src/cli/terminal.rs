use std::fmt;
use std::io::{self, Write};

use shakmaty::Color;

use super::script::{Intent, ScriptedClicks};
use crate::BoardDisplay;
use crate::board::{Board, Coord};
use crate::feedback::compute_feedback;
use crate::game_logic::{ClickOutcome, GameState, MoveOutcome, MoveRejection, player_number};

/// A message the front end shows in response to an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A piece was selected with this many legal destinations.
    Selected { origin: Coord, destinations: usize },
    /// The intent was refused; nothing changed but the selection.
    Rejected(MoveRejection),
    /// A pawn reached the back rank and needs a promotion answer.
    PromotionRequested(Coord),
    /// The game ended in favour of this player and was reset.
    Winner(Color),
    /// It is now this player's turn.
    Turn(Color),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Selected {
                origin,
                destinations,
            } => write!(f, "Selected {origin} ({destinations} legal moves)"),
            Notice::Rejected(rejection) => write!(f, "{rejection}"),
            Notice::PromotionRequested(_) => write!(f, "Promote to (Q/R/B/N/K):"),
            Notice::Winner(color) => write!(f, "Player {} Wins!", player_number(*color)),
            Notice::Turn(color) => write!(f, "Player {}'s turn", player_number(*color)),
        }
    }
}

/// Forward one intent to the game and collect what the player should be told.
pub fn apply_intent(game: &mut GameState, intent: Intent) -> Vec<Notice> {
    match intent {
        Intent::Click(at) => match game.click(at) {
            Ok(ClickOutcome::Selected {
                origin,
                destinations,
            }) => vec![Notice::Selected {
                origin,
                destinations: destinations.len(),
            }],
            Ok(ClickOutcome::Ignored) => Vec::new(),
            Ok(ClickOutcome::Moved(outcome)) => outcome_notices(game, outcome),
            Err(rejection) => vec![Notice::Rejected(rejection)],
        },
        Intent::Promote(answer) => match game.resolve_promotion(&answer) {
            Ok(outcome) => outcome_notices(game, outcome),
            Err(rejection) => vec![Notice::Rejected(rejection)],
        },
        Intent::Concede => {
            let winner = game.concede();
            vec![Notice::Winner(winner), Notice::Turn(game.current_player())]
        }
        Intent::Reset => {
            game.reset_game();
            vec![Notice::Turn(game.current_player())]
        }
    }
}

fn outcome_notices(game: &GameState, outcome: MoveOutcome) -> Vec<Notice> {
    match outcome {
        MoveOutcome::Moved => vec![Notice::Turn(game.current_player())],
        MoveOutcome::PromotionPending(at) => vec![Notice::PromotionRequested(at)],
        MoveOutcome::Won(winner) => {
            vec![Notice::Winner(winner), Notice::Turn(game.current_player())]
        }
    }
}

/// Runs an interactive terminal game on the given display.
///
/// Each line is a click script (see [`ScriptedClicks::push_script`]). While
/// a promotion is pending the whole line is taken as the answer.
pub fn run_interactive_terminal<D: BoardDisplay>(mut display: D) {
    let mut game = GameState::new();
    let mut script = ScriptedClicks::new();

    if let Err(e) = redraw(&mut display, &game) {
        eprintln!("Failed to draw board: {}", e);
        return;
    }

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {}", e);
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        }

        let line = input.trim();
        let mut notices = Vec::new();

        if game.pending_promotion().is_some() {
            notices.extend(apply_intent(&mut game, Intent::Promote(line.to_string())));
        } else {
            let (command, args) = line
                .split_once(' ')
                .map_or((line, ""), |(cmd, rest)| (cmd, rest.trim()));
            match (command, args) {
                ("", _) => continue,
                ("q", _) => break,
                ("p", _) => {}
                ("load", fen) => match load_position(fen) {
                    Ok(loaded) => {
                        game = loaded;
                        notices.push(Notice::Turn(game.current_player()));
                    }
                    Err(e) => println!("❌ Invalid position: {}", e),
                },
                _ => match script.push_script(line) {
                    Ok(()) => script.drain(|intent| {
                        notices.extend(apply_intent(&mut game, intent));
                    }),
                    Err(e) => println!("❌ {}", e),
                },
            }
        }

        if let Err(e) = redraw(&mut display, &game) {
            eprintln!("Failed to draw board: {}", e);
            break;
        }
        for notice in notices {
            println!("{notice}");
        }
    }
}

/// Loads `<board fen> [w|b]`, White to move by default.
fn load_position(args: &str) -> Result<GameState, String> {
    let mut parts = args.split_whitespace();
    let board: Board = parts
        .next()
        .ok_or("usage: load <board fen> [w|b]")?
        .parse()
        .map_err(|e| format!("{e}"))?;
    let to_move = match parts.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(format!("unknown side to move '{other}'")),
    };
    Ok(GameState::from_board(board, to_move))
}

fn redraw<D: BoardDisplay>(display: &mut D, game: &GameState) -> Result<(), D::Error> {
    print!("\x1B[2J\x1B[H");
    println!("♟️  Elimination Chess");
    println!("Commands: <square> | =<Q/R/B/N/K> | resign | reset | load <fen> [w|b] | p | q");
    println!();
    display.show(game.board(), &compute_feedback(game))?;
    println!();
    println!("{}", game.status());
    Ok(())
}
