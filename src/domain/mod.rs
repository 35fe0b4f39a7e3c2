//! Domain logic - input validation and naming rules independent of git

pub mod package;
pub mod tag;
pub mod version;

pub use package::PackageName;
pub use tag::TagPattern;
pub use version::TagVersion;
