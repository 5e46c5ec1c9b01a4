pub mod pool;
pub mod report;
pub mod vehicle;

pub type Weight = u32;
