pub mod numeric_cmp;
pub mod numeric_str;
pub mod sort;
