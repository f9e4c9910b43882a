//! Gateway identity types shared by services behind the auth gateway.

pub mod identity;
