//! Terminal rendering helpers shared by the command handlers.

pub mod summary;
pub mod tables;

pub use summary::{VAT_RATE, format_price, grand_total, print_order_summary, vat_amount};
pub use tables::{print_separator, truncate_string};
