pub mod capability;
pub mod member;
pub mod member_field;
pub mod notice;
pub mod seed;
