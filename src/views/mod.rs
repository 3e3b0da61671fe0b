//! Server-rendered HTML
//!
//! Plain string rendering; every piece of user data goes through
//! [`layout::escape`].

pub mod layout;
pub mod pages;
