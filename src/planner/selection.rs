use tracing::debug;

use crate::error::{Result, ShoppingError};

pub const NOT_INTEGERS_MESSAGE: &str = "The input must be integers separated by spaces.";
pub const OUT_OF_RANGE_MESSAGE: &str = "The numbers must be part of those proposed.";

/// Parse a raw selection into ascending, duplicate-free 1-based indices.
///
/// The input must contain only whitespace and ASCII digit runs. An input
/// without any number is a valid empty selection. Every index must lie in
/// `1..=available`, otherwise the whole selection is rejected.
pub fn parse_selection(input: &str, available: usize) -> Result<Vec<usize>> {
    if !input.chars().all(|c| c.is_ascii_digit() || c.is_whitespace()) {
        return Err(ShoppingError::InvalidInput(NOT_INTEGERS_MESSAGE.to_string()));
    }

    let mut indices = Vec::new();
    for token in input.split_whitespace() {
        // Only overflow can fail here; such a number is never proposed.
        let index: usize = token
            .parse()
            .map_err(|_| ShoppingError::InvalidInput(OUT_OF_RANGE_MESSAGE.to_string()))?;
        indices.push(index);
    }

    indices.sort_unstable();
    indices.dedup();

    if let (Some(&first), Some(&last)) = (indices.first(), indices.last()) {
        if first == 0 || last > available {
            return Err(ShoppingError::InvalidInput(OUT_OF_RANGE_MESSAGE.to_string()));
        }
    }

    debug!(?indices, available, "parsed selection");
    Ok(indices)
}

/// Resolve a raw selection against `items`, returning them in index order.
pub fn select_items<'a, T>(input: &str, items: &'a [T]) -> Result<Vec<&'a T>> {
    let indices = parse_selection(input, items.len())?;
    Ok(indices.into_iter().map(|i| &items[i - 1]).collect())
}
