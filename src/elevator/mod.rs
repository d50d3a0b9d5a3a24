pub mod output;
pub mod parser;
pub mod travel;

mod output_tests;

pub use output::print_output;
pub use parser::parse_args;
