#![allow(dead_code)]

pub use coresched_test_utils::builders;
pub use coresched_test_utils::init_tracing;
