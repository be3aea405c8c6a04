pub mod colors;
pub mod input_handler;
pub mod interactive;
pub mod rendering;
pub mod terminal_manager;

pub use input_handler::{ResumeScreen, Screen, Transition, handle_key};
pub use interactive::run_interactive_ui;
pub use rendering::{draw, menu_lines, stats_lines, team_option_lines, team_page_lines, to_plain_text};
pub use terminal_manager::{TerminalConfig, TerminalManager};
