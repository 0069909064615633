pub mod classify;
pub mod cli;
pub mod codegen;
pub mod error;
pub mod naming;
pub mod shape;
pub mod type_map;

use colored::Colorize;

fn main() {
    let command_line_interface = cli::CommandLineInterface::load();
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
