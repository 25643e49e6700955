pub mod funnel;
pub mod quiz;
pub mod wheel;
