pub mod dispatch;
pub mod normalize;
