use elimination_chess::cli::{TerminalDisplay, run_interactive_terminal};

fn main() {
    env_logger::init();
    log::info!("Elimination Chess - terminal");
    run_interactive_terminal(TerminalDisplay::from_env());
}
