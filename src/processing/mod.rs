//! Computation engines.
//!
//! This module contains the pure evaluation logic behind each calculator:
//! - [`subnet`] - IPv4/CIDR subnet derivation
//! - [`calculator`] - the basic-calculator reducer
//! - [`scientific`] - scientific function dispatch
//! - [`budget`] - budget-allocation tables

pub mod budget;
pub mod calculator;
pub mod scientific;
pub mod subnet;

// Re-export the main entry points
pub use budget::{calculate_budget, BudgetAllocation, BudgetModel, BudgetSummary, Period};
pub use calculator::{
    calculate, format_display_value, handle_backspace, handle_clear, handle_clear_entry,
    handle_equals, handle_memory_add, handle_memory_clear, handle_memory_recall,
    handle_memory_subtract, handle_number, handle_operation, handle_percentage,
    handle_square_root, handle_toggle_sign,
};
pub use scientific::{AngleMode, ScientificOp};
pub use subnet::calculate_ip_info;
