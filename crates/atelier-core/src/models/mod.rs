pub mod evaluation;
pub mod image;
pub mod iteration;
pub mod token_count;
