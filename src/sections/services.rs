use leptos::prelude::*;

use crate::components::{Icon, SectionTitle};
use crate::content::{Glyph, SERVICES};
use crate::reveal::FadeIn;

/// Staggered card reveal, one step per grid position.
const STAGGER_STEP_MS: u32 = 150;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="servicos" class="services">
            <div class="container">
                <FadeIn>
                    <SectionTitle title="Áreas de Atuação" subtitle="Expertise Jurídica" />
                </FadeIn>

                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, service)| {
                            let delay = index as u32 * STAGGER_STEP_MS;
                            view! {
                                <FadeIn delay=delay class="service-cell">
                                    <article class="service-card">
                                        <div class="service-icon">
                                            <Icon glyph=service.glyph />
                                        </div>
                                        <h3 class="service-title">{service.title}</h3>
                                        <p class="service-description">{service.description}</p>
                                        <a href="#contato" class="service-more">
                                            "Saiba Mais"
                                            <Icon glyph=Glyph::Chevron class="chevron" />
                                        </a>
                                    </article>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
