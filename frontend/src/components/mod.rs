pub mod activate_access;
pub mod common;
pub mod layout;
pub mod nav;
