//! End-to-end tests of the picker over the JSON snapshot source.

mod helpers;
mod picker_test;
mod tree_test;
