mod global_stat;

pub use global_stat::*;
