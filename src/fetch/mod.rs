pub mod http;
pub mod source;

pub use http::HttpFragmentSource;
pub use source::{FetchError, Fragment, FragmentSource};
