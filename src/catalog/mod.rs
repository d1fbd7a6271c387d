mod export;
mod loader;
pub mod texts;

pub use export::write_shopping_csv;
pub use loader::{load_meals, load_texts};
pub use texts::TextAssets;
