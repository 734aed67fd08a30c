//! Full-screen splash with the company name and motto.

use leptos::prelude::*;
use servanda_core::{MessageKey, SectionId};

use super::PageSection;
use crate::types::Strings;

/// Hero section
#[component]
pub fn Hero(strings: Strings) -> impl IntoView {
    let name = strings.t(MessageKey::HomeServanda);
    let motto = strings.t(MessageKey::HomeMotto);

    view! {
        <PageSection section=SectionId::Hero strings=strings class="hero">
            <div class="hero-inner">
                <h1 class="hero-title">{name}</h1>
                <p class="hero-motto">{motto}</p>
            </div>
        </PageSection>
    }
}
