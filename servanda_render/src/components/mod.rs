//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── DesktopNav / MobileNav (+ drawer)
//! │   └── LanguageSwitcher
//! ├── PageSection: Hero
//! ├── PageSection: Product      → JumpArrow
//! ├── PageSection: Security     → JumpArrow
//! ├── PageSection: Team         → JumpArrow
//! │   ├── TabBar
//! │   └── TabContent ×2
//! ├── PageSection: News         → JumpArrow
//! │   └── VersionsCarousel
//! ├── PageSection: Contact
//! ├── Footer
//! └── ScrollTopButton
//! ```
//!
//! Components only produce markup. Interactive state lives in
//! `servanda_core` and is driven in the browser by the WASM runtime, which
//! finds its elements through the `data-*` hooks emitted here.

mod contact;
mod document;
mod footer;
mod hero;
mod icons;
mod nav;
mod news;
mod product;
mod section;
mod security;
mod tabs;
mod team;

pub use contact::{Contact, LINKEDIN_URL, tel_href};
pub use document::{PAGE_DESCRIPTION, PAGE_TITLE, SiteDocument};
pub use footer::{COPYRIGHT_YEAR, Footer, ORG_NUMBER};
pub use hero::Hero;
pub use icons::*;
pub use nav::{DesktopNav, LOCALE_ACTION, LanguageSwitcher, MobileNav};
pub use news::{News, VersionsCarousel};
pub use product::{InfoCard, Product};
pub use section::{JumpArrow, PageSection, SCROLL_TOP_ID, ScrollTopButton};
pub use security::Security;
pub use tabs::{TabBar, TabContent};
pub use team::Team;
