use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, Icon};
use crate::content::{Glyph, NAV_LINKS};
use crate::scroll::watch_scrolled;

/// Fixed header. Transparent over the hero, solid once the page is
/// scrolled past the threshold. Owns the mobile menu state.
#[component]
pub fn Nav() -> impl IntoView {
    let scrolled = watch_scrolled();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class=move || {
            if scrolled.get() { "site-header scrolled" } else { "site-header" }
        }>
            <div class="container header-inner">
                <div class="brand">
                    <div class="brand-mark">
                        <span>"I"</span>
                    </div>
                    <a href="#" class="brand-name">
                        "Imperium"
                    </a>
                </div>

                <nav class="desktop-nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.target class="nav-link">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <Button variant=ButtonVariant::Primary href="#contato">
                        "Agendar Consulta"
                    </Button>
                </nav>

                <button
                    class="menu-toggle"
                    aria-label="Menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        if menu_open.get() {
                            view! { <Icon glyph=Glyph::Close /> }.into_any()
                        } else {
                            view! { <Icon glyph=Glyph::Menu /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Full-screen overlay for small viewports; closes on link click.
            <div class=move || {
                if menu_open.get() { "mobile-menu open" } else { "mobile-menu" }
            }>
                <div class="mobile-menu-inner">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.target
                                    class="mobile-link"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <Button
                        variant=ButtonVariant::Primary
                        href="#contato"
                        on_click=Callback::new(move |_| set_menu_open.set(false))
                    >
                        "Falar Conosco"
                    </Button>
                </div>
            </div>
        </header>
    }
}
