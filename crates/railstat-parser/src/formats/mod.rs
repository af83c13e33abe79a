mod common;
mod delimited;

pub use delimited::DelimitedParser;

pub(crate) use common::{hash_content, strip_bom};
