pub mod moderation;
pub mod records;
