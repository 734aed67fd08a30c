//! Juridisk DB product presentation.

use leptos::prelude::*;
use servanda_core::{MessageKey, SectionId};

use super::PageSection;
use crate::types::Strings;

/// Card with a heading, optional paragraphs and an optional bullet list.
#[component]
pub fn InfoCard(
    title: String,
    #[prop(optional)] paragraphs: Vec<String>,
    #[prop(optional)] bullets: Vec<String>,
) -> impl IntoView {
    let paragraphs = paragraphs
        .into_iter()
        .map(|text| view! { <p>{text}</p> })
        .collect::<Vec<_>>();
    let list = (!bullets.is_empty()).then(|| {
        let items = bullets
            .into_iter()
            .map(|text| view! { <li>{text}</li> })
            .collect::<Vec<_>>();
        view! { <ul>{items}</ul> }
    });

    view! {
        <article class="card">
            <h3>{title}</h3>
            {paragraphs}
            {list}
        </article>
    }
}

/// Product section
#[component]
pub fn Product(strings: Strings) -> impl IntoView {
    let t = |key| strings.t(key);
    let title = t(MessageKey::ProductTitle);
    let subtitle = t(MessageKey::ProductSubtitle);

    let overview = view! {
        <InfoCard
            title=t(MessageKey::ProductOverview)
            paragraphs=vec![t(MessageKey::ProductPurpose)]
        />
    };
    let access = view! {
        <InfoCard
            title=t(MessageKey::ProductUniqueAccessTitle)
            paragraphs=vec![t(MessageKey::ProductUniqueAccessContent)]
            bullets=vec![
                t(MessageKey::ProductBullet1),
                t(MessageKey::ProductBullet2),
                t(MessageKey::ProductBullet3),
            ]
        />
    };
    let security = view! {
        <InfoCard
            title=t(MessageKey::ProductSecurityTitle)
            paragraphs=vec![t(MessageKey::ProductSecurityIntro)]
            bullets=vec![
                t(MessageKey::ProductSecurityPoint1),
                t(MessageKey::ProductSecurityPoint2),
                t(MessageKey::ProductSecurityPoint3),
            ]
        />
    };
    let conclusion = t(MessageKey::ProductConclusion);

    view! {
        <PageSection section=SectionId::Product strings=strings.clone() title=title>
            <p class="section-lead">{subtitle}</p>
            <div class="card-grid">
                {overview}
                {access}
                {security}
                <article class="card card-conclusion">
                    <p>{conclusion}</p>
                </article>
            </div>
        </PageSection>
    }
}
