mod generation_request;
mod prompt;
mod template_kind;

pub use generation_request::*;
pub use prompt::*;
pub use template_kind::*;
