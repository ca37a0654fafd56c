pub mod access_gate;
pub mod data_table;
pub mod pagination;

pub use access_gate::{evaluate_gate, AccessGate, GateOutcome};
pub use data_table::{ColumnSpec, DataTable};
pub use pagination::Pager;
