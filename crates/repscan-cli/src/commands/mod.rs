pub mod detect;
pub mod languages;
pub mod parse;
