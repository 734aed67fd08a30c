//! Team members, purpose and values.

use leptos::prelude::*;
use servanda_core::{MessageKey, SectionId};

use super::{InfoCard, PageSection, TabBar, TabContent};
use crate::types::{Strings, TeamMember, team_members};

const TAB_SCOPE: &str = "team";

#[component]
fn MemberCard(member: TeamMember) -> impl IntoView {
    view! {
        <article class="card member">
            <img src=member.image alt=member.name.clone() loading="lazy" draggable="false" />
            <h3>{member.name}</h3>
            <p class="member-role">{member.role}</p>
            <p>{member.description}</p>
        </article>
    }
}

/// Team section
#[component]
pub fn Team(strings: Strings) -> impl IntoView {
    let title = strings.t(MessageKey::TeamAboutUs);
    let tabs = vec![
        ("members", strings.t(MessageKey::TeamOurTeam)),
        ("values", strings.t(MessageKey::TeamPurposeAndValues)),
    ];
    let members = team_members(&strings)
        .into_iter()
        .map(|member| view! { <MemberCard member=member /> })
        .collect::<Vec<_>>();
    let purpose = view! {
        <InfoCard
            title=strings.t(MessageKey::TeamOurPurpose)
            paragraphs=vec![strings.t(MessageKey::TeamPurposeOverview)]
        />
    };
    let values = view! {
        <InfoCard
            title=strings.t(MessageKey::TeamOurValues)
            paragraphs=vec![strings.t(MessageKey::TeamValuesOverview)]
        />
    };

    view! {
        <PageSection section=SectionId::Team strings=strings title=title>
            <TabBar scope=TAB_SCOPE tabs=tabs />
            <TabContent scope=TAB_SCOPE name="members" active=true>
                <div class="team-grid">{members}</div>
            </TabContent>
            <TabContent scope=TAB_SCOPE name="values" active=false>
                <div class="card-grid">
                    {purpose}
                    {values}
                </div>
            </TabContent>
        </PageSection>
    }
}
