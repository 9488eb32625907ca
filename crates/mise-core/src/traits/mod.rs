pub mod source;
pub mod suggester;

pub use source::ISuggestionSource;
pub use suggester::ISuggester;
