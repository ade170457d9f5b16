pub mod address;
pub mod benefit;
pub mod member_id;
pub mod member_info;
pub mod status_type;
