use leptos::html;
use leptos::prelude::*;

use super::{reveal_class, stagger};
use crate::config::tel_href;
use crate::content::{TEAM, TeamMember};
use crate::reveal::use_reveal_once;

#[component]
pub fn About() -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let revealed = use_reveal_once(node);

    view! {
        <section node_ref=node id="about" class="about">
            <div class="container">
                <div class=move || reveal_class("section-header", revealed.get())>
                    <h2 class="section-title">"Meet Our Team"</h2>
                    <p class="section-lead">
                        "Our certified appraisers bring decades of experience and expertise to every valuation."
                    </p>
                </div>

                <div class="team-grid">
                    {TEAM
                        .iter()
                        .enumerate()
                        .map(|(index, member)| {
                            view! { <TeamCard member=*member index=index revealed=revealed /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TeamCard(member: TeamMember, index: usize, revealed: ReadSignal<bool>) -> impl IntoView {
    // Alternate cards slide in from opposite sides.
    let base = if index % 2 == 0 {
        "team-card from-left"
    } else {
        "team-card from-right"
    };

    view! {
        <div class=move || reveal_class(base, revealed.get()) style=stagger(index, 300)>
            <div class="team-photo">
                <img src=member.image alt=member.name />
            </div>
            <div class="team-info">
                <h3>{member.name}</h3>
                <p class="team-role">{member.title}</p>
                <p class="team-experience">{format!("{} of experience", member.experience)}</p>
                <strong>"Specialties:"</strong>
                <div class="chips">
                    {member
                        .specialties
                        .iter()
                        .map(|specialty| view! { <span class="chip">{*specialty}</span> })
                        .collect_view()}
                </div>
                <a class="btn btn-primary" href=tel_href(member.phone)>
                    {format!("📞 {}", member.phone)}
                </a>
            </div>
        </div>
    }
}
