use leptos::prelude::*;

use super::Navigator;
use crate::config::COMPANY_NAME;
use crate::router::PageId;

/// Disclosure state of the narrow-viewport menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompactMenu {
    open: bool,
}

impl CompactMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// A nav entry was clicked: `target` becomes the current page and the
/// compact menu folds away.
pub fn select(target: PageId, current: &mut PageId, menu: &mut CompactMenu) {
    *current = target;
    menu.close();
}

fn link_class(base: &'static str, active: bool) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

#[component]
pub fn Nav(current: ReadSignal<PageId>, navigator: Navigator) -> impl IntoView {
    let (menu, set_menu) = signal(CompactMenu::default());

    let choose = move |target: PageId| {
        // `select` decides both the page and the menu; the current page is
        // only its starting value.
        let mut page = current.get_untracked();
        let mut next_menu = menu.get_untracked();
        select(target, &mut page, &mut next_menu);
        set_menu.set(next_menu);
        navigator.go(page);
    };

    let toggle_menu = move |_| {
        set_menu.update(CompactMenu::toggle);
        tracing::debug!(open = menu.get_untracked().is_open(), "compact menu toggled");
    };

    view! {
        <nav class="nav">
            <div class="container">
                <div class="nav-inner">
                    <button class="nav-brand" on:click=move |_| choose(PageId::Home)>
                        {COMPANY_NAME}
                    </button>
                    <div class="nav-links">
                        {PageId::ALL
                            .into_iter()
                            .map(move |page| {
                                view! {
                                    <button
                                        class=move || link_class("nav-link", current.get() == page)
                                        on:click=move |_| choose(page)
                                    >
                                        {page.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="nav-burger"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=toggle_menu
                    >
                        <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M4 6h16M4 12h16M4 18h16"
                            />
                        </svg>
                    </button>
                </div>
            </div>

            <Show when=move || menu.get().is_open()>
                <div class="nav-drawer">
                    {PageId::ALL
                        .into_iter()
                        .map(move |page| {
                            view! {
                                <button
                                    class=move || link_class("nav-drawer-link", current.get() == page)
                                    on:click=move |_| choose(page)
                                >
                                    {page.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
