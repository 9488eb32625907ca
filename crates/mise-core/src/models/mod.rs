pub mod prep_item;
pub mod shift;
pub mod suggestion_context;

pub use prep_item::PrepItem;
pub use shift::Shift;
pub use suggestion_context::SuggestionContext;
