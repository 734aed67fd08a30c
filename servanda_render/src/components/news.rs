//! Product updates and the versions carousel.
//!
//! The strip renders with the controller's initial state, so the current
//! version is emphasized before the runtime loads. The runtime owns the
//! scroll position and re-applies the classes on every index change.

use leptos::prelude::*;
use servanda_core::{CarouselController, MessageKey, SectionId};

use super::{ICON_CHEVRON_LEFT, ICON_CHEVRON_RIGHT, Icon, PageSection};
use crate::types::{Strings, VersionItem, versions};

#[component]
fn VersionCard(item: VersionItem, index: usize, class: &'static str) -> impl IntoView {
    view! {
        <article class=class data-carousel-index=index.to_string()>
            <span class="version-label">{item.label}</span>
            <h3>{item.title}</h3>
            <p>{item.description}</p>
        </article>
    }
}

/// Horizontally scrolling strip of versions with prev/next arrows.
#[component]
pub fn VersionsCarousel(strings: Strings) -> impl IntoView {
    let items = versions(&strings);
    let controller = CarouselController::default();
    let cards = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let class = controller.emphasis(index).class();
            view! { <VersionCard item=item index=index class=class /> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="versions" data-carousel="">
            <h3>{strings.t(MessageKey::VersionsTitle)}</h3>
            <div class="versions-frame">
                <button
                    class="carousel-arrow"
                    aria-label=strings.t(MessageKey::VersionsPrevious)
                    data-carousel-prev=""
                >
                    <Icon path=ICON_CHEVRON_LEFT />
                </button>
                <div class="versions-strip" data-carousel-strip="">
                    {cards}
                </div>
                <button
                    class="carousel-arrow"
                    aria-label=strings.t(MessageKey::VersionsNext)
                    data-carousel-next=""
                >
                    <Icon path=ICON_CHEVRON_RIGHT />
                </button>
            </div>
        </div>
    }
}

/// News section
#[component]
pub fn News(strings: Strings) -> impl IntoView {
    let title = strings.t(MessageKey::UpdatesTitle);
    let update_title = strings.t(MessageKey::Update1Title);
    let paragraphs = [
        MessageKey::Update1Paragraph1,
        MessageKey::Update1Paragraph2,
        MessageKey::Update1Paragraph3,
    ]
    .into_iter()
    .map(|key| view! { <p>{strings.t(key)}</p> })
    .collect::<Vec<_>>();

    view! {
        <PageSection section=SectionId::News strings=strings.clone() title=title>
            <article class="card update">
                <h3>{update_title}</h3>
                {paragraphs}
            </article>
            <VersionsCarousel strings=strings.clone() />
        </PageSection>
    }
}
