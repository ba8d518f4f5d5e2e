use leptos::prelude::*;

use super::use_navigator;
use crate::config::{
    COMPANY_NAME, CONTACT_EMAIL, COPYRIGHT_YEAR, TAGLINE, YEARS_EXPERIENCE, mailto_href, tel_href,
};
use crate::content::TEAM;
use crate::router::PageId;

const QUICK_LINKS: [(PageId, &str); 4] = [
    (PageId::Services, "Services"),
    (PageId::About, "About Us"),
    (PageId::Areas, "Areas We Serve"),
    (PageId::Contact, "Contact"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let navigate = use_navigator();
    let blurb = format!(
        "Professional real estate appraisal services with over {YEARS_EXPERIENCE} years of experience."
    );

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3>{COMPANY_NAME}</h3>
                        <p>{blurb}</p>
                        <p class="footer-muted">{TAGLINE}</p>
                    </div>

                    <div>
                        <h4>"Quick Links"</h4>
                        <ul class="footer-links">
                            {QUICK_LINKS
                                .into_iter()
                                .map(|(page, label)| {
                                    view! {
                                        <li>
                                            <button class="footer-link" on:click=move |_| navigate(page)>
                                                {label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4>"Contact Info"</h4>
                        {TEAM
                            .iter()
                            .map(|member| {
                                view! {
                                    <p>
                                        <a class="footer-link" href=tel_href(member.phone)>
                                            {format!("📞 {}", member.phone)}
                                        </a>
                                    </p>
                                }
                            })
                            .collect_view()}
                        <p>
                            <a class="footer-link" href=mailto_href(CONTACT_EMAIL)>
                                {format!("✉️ {CONTACT_EMAIL}")}
                            </a>
                        </p>
                    </div>
                </div>

                <div class="footer-bottom">
                    {format!("© {COPYRIGHT_YEAR} {COMPANY_NAME}. All rights reserved.")}
                </div>
            </div>
        </footer>
    }
}
