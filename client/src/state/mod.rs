//! Client-side reactive state.

pub mod session;
