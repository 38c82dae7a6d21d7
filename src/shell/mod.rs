pub mod command;
pub mod command_tests;
pub mod shell;

pub use shell::spawn_stdin_reader;
pub use shell::Shell;
