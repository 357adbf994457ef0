//! Unit test modules.

mod kv_store_test;
mod picker_test;
mod validation_test;
