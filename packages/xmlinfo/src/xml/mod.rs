//! XML utilities on top of `roxmltree`.

mod utils;

pub use utils::{describe_node_type, get_attribute, get_tag_name, parse_document, read_document};
