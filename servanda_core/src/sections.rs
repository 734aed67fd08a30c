//! Page sections, in the order they appear on the page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::messages::MessageKey;

/// One addressable region of the landing page.
///
/// The lowercase name doubles as the element id and the `#fragment` of the
/// navigation links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Company name and motto
    Hero,
    /// Juridisk DB
    Product,
    /// Security and privacy
    Security,
    /// Team and values
    Team,
    /// Product updates and versions
    News,
    /// Contact details
    Contact,
}

impl SectionId {
    /// Declared page order.
    pub const ORDER: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::Product,
        SectionId::Security,
        SectionId::Team,
        SectionId::News,
        SectionId::Contact,
    ];

    /// Sections linked from the navigation bar.
    pub const NAV_LINKS: [SectionId; 5] = [
        SectionId::Product,
        SectionId::Security,
        SectionId::Team,
        SectionId::News,
        SectionId::Contact,
    ];

    /// Element id.
    pub fn id(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Product => "product",
            SectionId::Security => "security",
            SectionId::Team => "team",
            SectionId::News => "news",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label, if the section has a nav link.
    pub fn nav_label(&self) -> Option<MessageKey> {
        match self {
            SectionId::Hero => None,
            SectionId::Product => Some(MessageKey::NavProduct),
            SectionId::Security => Some(MessageKey::NavSecurity),
            SectionId::Team => Some(MessageKey::NavTeam),
            SectionId::News => Some(MessageKey::NavNews),
            SectionId::Contact => Some(MessageKey::NavContact),
        }
    }

    /// Target of the section's "jump down" arrow.
    ///
    /// The hero is a full-screen splash without one; contact is last.
    pub fn jump_target(&self) -> Option<SectionId> {
        match self {
            SectionId::Product => Some(SectionId::Security),
            SectionId::Security => Some(SectionId::Team),
            SectionId::Team => Some(SectionId::News),
            SectionId::News => Some(SectionId::Contact),
            SectionId::Hero | SectionId::Contact => None,
        }
    }

    /// First section of the page.
    pub fn first() -> SectionId {
        SectionId::ORDER[0]
    }
}

impl Default for SectionId {
    fn default() -> Self {
        SectionId::first()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SectionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ORDER
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or(())
    }
}
