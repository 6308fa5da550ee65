mod keyword_parser;
mod path_validator;

pub use keyword_parser::{format_keywords, parse_keywords};
pub use path_validator::ensure_directory_exists;
