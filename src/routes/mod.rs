mod health_check;
mod member_info;

pub use health_check::*;
pub use member_info::*;
