//! Contact details.

use leptos::prelude::*;
use servanda_core::{MessageKey, SectionId};

use super::{ICON_LINKEDIN, ICON_MAIL, ICON_PHONE, Icon, PageSection};
use crate::types::Strings;

/// Company page on LinkedIn.
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/servanda-as";

/// `tel:` URI for a human-formatted phone number.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

/// Contact section
#[component]
pub fn Contact(strings: Strings) -> impl IntoView {
    let title = strings.t(MessageKey::NavContact);
    let email = strings.t(MessageKey::ContactEmail);
    let phone = strings.t(MessageKey::ContactPhone);
    let company = strings.t(MessageKey::ContactCompanyName);
    let mailto = format!("mailto:{email}");
    let tel = tel_href(&phone);

    view! {
        <PageSection section=SectionId::Contact strings=strings title=title>
            <p class="section-lead">{company}</p>
            <div class="contact-links">
                <a class="contact-link" href=LINKEDIN_URL target="_blank" rel="noopener noreferrer">
                    <Icon path=ICON_LINKEDIN />
                    <span>"LinkedIn"</span>
                </a>
                <a class="contact-link" href=mailto>
                    <Icon path=ICON_MAIL />
                    <span>{email}</span>
                </a>
                <a class="contact-link" href=tel>
                    <Icon path=ICON_PHONE />
                    <span>{phone}</span>
                </a>
            </div>
        </PageSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_href_keeps_digits_and_plus() {
        assert_eq!(tel_href("+47 400 00 000"), "tel:+4740000000");
    }
}
