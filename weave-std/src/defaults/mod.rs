//! Default implementations of the mandatory capabilities.
//!
//! Defaults marked "generic over facets" take a dependencies handle `D` and
//! read sibling capabilities through it at call time, never at construction.

mod decoder;
mod navigation;
mod operations;
mod repository;
mod storage;
mod ui;
mod url;

pub use decoder::ComponentDecoder;
pub use navigation::Navigator;
pub use operations::{DefaultOperations, builtin_operations};
pub use repository::{DefaultImageDownloader, DefaultRepository, PrefetchHelper};
pub use storage::{DefaultGlobalContext, InMemoryFormDataStore, MainBundle};
pub use ui::{
    AppTheme, DefaultRenderer, DefaultStyleConfigurator, DefaultUrlOpener,
    DefaultViewConfigurator, DefaultWindowManager, StyleFn,
};
pub use url::UrlBuilder;
