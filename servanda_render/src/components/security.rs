//! Privacy and database security.

use leptos::prelude::*;
use servanda_core::{MessageKey, SectionId};

use super::{ICON_SHIELD, Icon, InfoCard, PageSection};
use crate::types::Strings;

/// Security section
#[component]
pub fn Security(strings: Strings) -> impl IntoView {
    let t = |key| strings.t(key);
    let title = t(MessageKey::PrivacyTitle);

    let general = view! {
        <InfoCard
            title=t(MessageKey::PrivacyTabGeneral)
            paragraphs=vec![t(MessageKey::PrivacyGeneralIntro), t(MessageKey::PrivacyUserData)]
            bullets=vec![t(MessageKey::PrivacyUserDataPoint1), t(MessageKey::PrivacyUserDataPoint2)]
        />
    };
    let database = view! {
        <InfoCard
            title=t(MessageKey::PrivacyTabDatabase)
            paragraphs=vec![t(MessageKey::PrivacyDatabaseSecurity)]
            bullets=vec![
                t(MessageKey::PrivacyDatabasePoint1),
                t(MessageKey::PrivacyDatabasePoint2),
                t(MessageKey::PrivacyDatabasePoint3),
                t(MessageKey::PrivacyDatabasePoint4),
            ]
        />
    };

    view! {
        <PageSection section=SectionId::Security strings=strings.clone() title=title>
            <div class="security-badge">
                <Icon path=ICON_SHIELD size="40" />
            </div>
            <div class="card-grid">
                {general}
                {database}
            </div>
        </PageSection>
    }
}
