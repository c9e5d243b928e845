//! Recognition rules: lexical tables, the date and time strategies, and the
//! title normalizer.

use crate::{DateStrategy, TimeStrategy};
use once_cell::sync::Lazy;

pub mod date;
pub mod helpers;
pub mod lexicon;
pub mod time;
pub mod title;

#[cfg(test)]
mod tests;

/// Date strategies in priority order.
pub static DATE_STRATEGIES: Lazy<Vec<DateStrategy>> = Lazy::new(date::strategies);

/// Time strategies in priority order.
pub static TIME_STRATEGIES: Lazy<Vec<TimeStrategy>> = Lazy::new(time::strategies);
