mod health_check;
mod helpers;
mod member_info;
