//! Handing the roster to another screen as text.
//!
//! The home screen renders the roster, form-encodes it, and carries it as the
//! single `listData` parameter of the result route. The result screen decodes
//! the parameter back to display text; it never rebuilds students from it.

mod codec;
mod error;
mod route;

pub use codec::{decode, encode, encode_text, render};
pub use error::RouteError;
pub use route::{HOME_ROUTE, LIST_DATA, RESULT_ROUTE, Route};
