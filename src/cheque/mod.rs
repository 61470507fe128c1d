mod extract;

pub use extract::{extract_cheque_fields, ChequeFields};
