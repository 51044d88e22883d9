//! Format implementations
//!
//! Each format is a textual projection of a draft:
//!
//! | Name         | Direction       | Output                                      |
//! |--------------|-----------------|---------------------------------------------|
//! | `json`       | parse + export  | draft snapshot in, full export record out   |
//! | `json-quick` | export          | quick-copy export record                    |
//! | `html`       | export          | self-contained preview page                 |
//! | `tag`        | export          | XML-like dump of the article preview        |
//! | `treeviz`    | export          | icon tree of the rendered body              |

pub mod html;
pub mod icons;
pub mod json;
pub mod tag;
pub mod treeviz;

pub use html::{get_default_css, HtmlFormat, HtmlOptions, HtmlTheme};
pub use json::{JsonFormat, QuickJsonFormat};
pub use tag::TagFormat;
pub use treeviz::TreevizFormat;
