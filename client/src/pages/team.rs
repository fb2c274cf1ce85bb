//! Team page: one card per member with counts, services and weekly hours.

use leptos::prelude::*;
use scheduling::views::team::{member_stats, services_for_member, working_hours_summary};

use crate::app::{DirectoryHandle, Today};
use crate::components::avatar::Avatar;
use crate::components::layout::DashboardLayout;

#[component]
pub fn TeamPage() -> impl IntoView {
    let directory = expect_context::<DirectoryHandle>();
    let Today(today) = expect_context::<Today>();
    let dir = directory.get();

    let cards = dir
        .team_members()
        .iter()
        .map(|member| {
            let stats = member_stats(dir.appointments(), &member.id, today);
            let services = services_for_member(dir.services(), &member.id)
                .into_iter()
                .map(|s| view! { <span class="badge badge--secondary">{s.name.clone()}</span> })
                .collect::<Vec<_>>();
            let hours = working_hours_summary(member)
                .into_iter()
                .map(|day| {
                    view! {
                        <span class="hours__day" class:hours__day--on={day.is_working()} title=day.summary>
                            {day.letter}
                        </span>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <article class="card team-card">
                    <div class="team-card__stripe" style=format!("background-color: {};", member.color)></div>
                    <div class="team-card__head">
                        <Avatar
                            name=member.name.clone()
                            src=member.avatar.clone()
                            color=Some(member.color.clone())
                            large=true
                        />
                        <div>
                            <h3 class="team-card__name">{member.name.clone()}</h3>
                            <p class="team-card__role">{member.role.clone()}</p>
                        </div>
                    </div>
                    <p class="team-card__email">{member.email.clone()}</p>
                    {member.phone.clone().map(|phone| view! { <p class="team-card__phone">{phone}</p> })}
                    <div class="team-card__stats">
                        <div>
                            <p class="team-card__stat">{stats.today}</p>
                            <p class="team-card__stat-label">"Today"</p>
                        </div>
                        <div>
                            <p class="team-card__stat">{stats.this_week}</p>
                            <p class="team-card__stat-label">"This Week"</p>
                        </div>
                    </div>
                    <p class="team-card__section">"Services"</p>
                    <div class="team-card__services">{services}</div>
                    <p class="team-card__section">"Working Hours"</p>
                    <div class="hours">{hours}</div>
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <DashboardLayout>
            <div class="page team-page">
                <header class="page__header">
                    <div>
                        <h1 class="page__title">"Team"</h1>
                        <p class="page__subtitle">"Manage your team members and their schedules"</p>
                    </div>
                    <button class="btn btn--primary">"Add Team Member"</button>
                </header>
                <div class="team-page__grid">{cards}</div>
            </div>
        </DashboardLayout>
    }
}
