//! Shared presentational pieces: call-to-action button, section heading,
//! inline SVG icons.

use leptos::prelude::*;

use crate::content::Glyph;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    White,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::White => "btn-white",
        }
    }
}

/// Renders an anchor when `href` is given, a plain button otherwise.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] href: Option<&'static str>,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let classes = if class.is_empty() {
        format!("btn {}", variant.class())
    } else {
        format!("btn {} {}", variant.class(), class)
    };
    let click = move |_| {
        if let Some(callback) = on_click {
            callback.run(());
        }
    };

    match href {
        Some(href) => view! {
            <a class=classes href=href on:click=click>
                {children()}
            </a>
        }
        .into_any(),
        None => view! {
            <button class=classes on:click=click>
                {children()}
            </button>
        }
        .into_any(),
    }
}

/// Centered eyebrow + title + rule used at the top of each section.
#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)] subtitle: &'static str,
    #[prop(optional)] light: bool,
) -> impl IntoView {
    let classes = if light {
        "section-title light"
    } else {
        "section-title"
    };
    view! {
        <div class=classes>
            <span class="section-eyebrow">{subtitle}</span>
            <h2 class="section-heading">{title}</h2>
            <div class="section-rule"></div>
        </div>
    }
}

#[component]
pub fn Icon(glyph: Glyph, #[prop(optional)] class: &'static str) -> impl IntoView {
    let markup = match glyph {
        Glyph::Scale => {
            r#"<path d="m16 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z"/><path d="m2 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z"/><path d="M7 21h10"/><path d="M12 3v18"/><path d="M3 7h2c2 0 5-1 7-2 2 1 5 2 7 2h2"/>"#
        }
        Glyph::Users => {
            r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
        }
        Glyph::Briefcase => {
            r#"<path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/><rect width="20" height="14" x="2" y="6" rx="2"/>"#
        }
        Glyph::Building => {
            r#"<path d="M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z"/><path d="M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2"/><path d="M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2"/><path d="M10 6h4"/><path d="M10 10h4"/><path d="M10 14h4"/><path d="M10 18h4"/>"#
        }
        Glyph::Menu => {
            r#"<line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="18" y2="18"/>"#
        }
        Glyph::Close => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        Glyph::Check => r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#,
        Glyph::Chevron => r#"<path d="m9 18 6-6-6-6"/>"#,
        Glyph::Phone => {
            r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.79 19.79 0 0 1 2.08 4.18 2 2 0 0 1 4.06 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"/>"#
        }
        Glyph::Mail => {
            r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
        }
        Glyph::MapPin => {
            r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
        }
    };

    let classes = if class.is_empty() {
        "icon".to_string()
    } else {
        format!("icon {class}")
    };

    view! {
        <svg
            class=classes
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=markup
        ></svg>
    }
}
