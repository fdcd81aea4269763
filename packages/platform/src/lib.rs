pub mod emit;
pub mod error;
pub mod object_id;
pub mod transaction;
pub mod type_tag;
