mod aging;
mod allocate;
mod date;

pub use aging::{calculate, calculate_all, BillStatus, CalculatedBill, InterestPolicy};
pub use allocate::allocate_receipt;
pub use date::normalize_date;
