pub mod compute;
pub mod conversions;

pub use compute::get_compute_units;
