pub mod prompts;
pub mod render;
pub mod session;

pub use prompts::{
    prompt_selected_meals, ConsoleInput, LineSource, SelectionPrompt, SelectionState,
};
pub use render::{available_meal_lines, format_quantity, shopping_list_lines, Presenter};
pub use session::run_session;
