pub mod dispatch;
pub mod tracking;
