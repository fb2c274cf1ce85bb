//! Dashboard card with each team member's appointment count for today.

use leptos::prelude::*;
use scheduling::views::dashboard::team_overview;

use crate::app::{DirectoryHandle, Today};
use crate::components::avatar::Avatar;

#[component]
pub fn TeamOverview() -> impl IntoView {
    let directory = expect_context::<DirectoryHandle>();
    let Today(today) = expect_context::<Today>();

    let rows = team_overview(directory.get(), today)
        .into_iter()
        .map(|row| {
            let member = row.member;
            view! {
                <li class="team-overview__row">
                    <span class="team-overview__avatar">
                        <Avatar name=member.name.clone() src=member.avatar.clone() color=Some(member.color.clone())/>
                        <span class="team-overview__dot" style=format!("background-color: {};", member.color)></span>
                    </span>
                    <div class="team-overview__body">
                        <p class="team-overview__name">{member.name.clone()}</p>
                        <p class="team-overview__role">{member.role.clone()}</p>
                    </div>
                    <span class="team-overview__count">{format!("{} today", row.today)}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="card team-overview">
            <h2 class="card__title">"Team Overview"</h2>
            <ul class="team-overview__list">{rows}</ul>
        </section>
    }
}
