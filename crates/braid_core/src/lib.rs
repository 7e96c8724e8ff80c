mod all_html_tags;
mod filters;
mod fragment;
mod host;
mod structs;

pub use all_html_tags::{is_html_tag, HtmlElements};
pub use filters::Filters;
pub use fragment::*;
pub use host::{DirectiveParser, ElementRegistry, FilterRegistry};
pub use structs::*;
