//! View models: resolved, gated, template-ready page data.
//!
//! Views are built per request from the shared snapshot. Everything a
//! template shows is already resolved here; a block whose controlling value
//! is blank arrives as `None` or an empty list and is left out.

mod common;
mod landing;
mod product;

pub use common::{FormState, PageMeta, SectionSource};
pub use landing::LandingView;
pub use product::{NotFoundView, ProductForms, ProductIndexView, ProductView};
