pub mod denomination;

pub use denomination::{Denomination, DENOMINATIONS};
