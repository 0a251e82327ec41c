//! Birthbook - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use
//! `birthbook_test::component::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    pub use birthbook_contacts::*;
    pub use birthbook_core::*;

    pub mod dates {
        pub use birthbook_dates::*;
    }
}
