// Utils compartidos

pub mod constants;
pub mod debounce;
pub mod storage;

pub use constants::*;
pub use debounce::{Debouncer, RequestSeq};
pub use storage::*;
