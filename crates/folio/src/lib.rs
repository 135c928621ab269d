//! `folio` - A static personal portfolio site
//!
//! This library provides the pages of a small portfolio site (About,
//! Projects, Contact), the validated contact form behind the Contact page,
//! and a builder that writes the site out as static HTML.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod logging;
pub mod project;
pub mod render;
pub mod router;
pub mod site;
pub mod store;

pub use config::Config;
pub use contact::{ContactForm, ContactFormController, Field, SubmitOutcome};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use project::{MalformedRecord, ProjectCandidate, ProjectRecord};
pub use router::{Route, Shell};
pub use site::{BuildReport, Site};
pub use store::ProjectStore;
