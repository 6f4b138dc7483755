//! Command handler modules for the Sequence CLI.
//!
//! Each subcommand lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`. Output streams
//! are passed in as `&mut dyn Write` so tests can capture them.

pub mod board;
pub mod cfg;
pub mod play;
pub mod sim;

pub use board::handle_board_command;
pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
