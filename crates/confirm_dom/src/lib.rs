//! # confirm_dom
//!
//! Integration layer between [`confirm_core`] and a document of clickable
//! elements.
//!
//! - [`Element`] / [`Document`]: a minimal element model implementing
//!   [`confirm_core::PresentationSurface`]
//! - [`element_options`]: element-level options from `data-*` attributes
//! - [`Page`]: the single-threaded event loop routing clicks, method calls
//!   and timer firings
//! - [`parse_defaults`] / [`load_defaults`]: page-wide defaults from TOML
//!
//! ## Example
//!
//! ```
//! use confirm_dom::{ClickOutcome, Document, Element, Page};
//! use confirm_core::{ElementId, PresentationSurface};
//! use std::time::Duration;
//!
//! let id = ElementId::from_raw(1);
//! let mut doc = Document::new();
//! doc.insert(Element::button(id, "Delete").with_attr("data-toggle", "double-confirm"));
//!
//! let mut page = Page::new(doc);
//! assert_eq!(page.click(id), ClickOutcome::Suppressed);
//! assert_eq!(page.element(id).unwrap().label(), "Really Delete? (2)");
//!
//! page.advance(Duration::from_secs(2));
//! assert_eq!(page.click(id), ClickOutcome::Proceeded);
//! ```

mod config_file;
mod data_attrs;
mod document;
mod element;
mod page;

pub use config_file::{LoadError, load_defaults, parse_defaults};
pub use data_attrs::{
    DATA_PREFIX, TOGGLE_ATTR, TOGGLE_VALUE, element_options, is_declarative_trigger,
};
pub use document::Document;
pub use element::Element;
pub use page::{ClickOutcome, Page};
