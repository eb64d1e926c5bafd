pub mod post;
pub mod record;
pub mod task;
