pub(crate) mod common;

mod rollup;
