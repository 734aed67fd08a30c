//! Page footer.

use leptos::prelude::*;
use servanda_core::MessageKey;

use crate::types::Strings;

/// Registered organisation number.
pub const ORG_NUMBER: &str = "934118642";

/// Copyright year shown in the footer.
pub const COPYRIGHT_YEAR: u16 = 2025;

/// Footer with copyright and organisation number.
#[component]
pub fn Footer(strings: Strings) -> impl IntoView {
    let company = strings.t(MessageKey::ContactCompanyName);
    let org = strings.t(MessageKey::ContactOrg);

    view! {
        <footer class="site-footer">
            <span>{format!("© {COPYRIGHT_YEAR} {company}")}</span>
            <span>{format!("{org} {ORG_NUMBER}")}</span>
        </footer>
    }
}
