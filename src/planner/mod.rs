pub mod aggregation;
pub mod selection;

pub use aggregation::{aggregate_ingredients, UnitPolicy};
pub use selection::{parse_selection, select_items, NOT_INTEGERS_MESSAGE, OUT_OF_RANGE_MESSAGE};
