use leptos::prelude::*;

use crate::components::{Icon, SectionTitle};
use crate::content::{DIFFERENTIATORS, Glyph};
use crate::reveal::FadeIn;

#[component]
pub fn Differentiators() -> impl IntoView {
    view! {
        <section id="diferenciais" class="differentiators">
            <div class="differentiators-accent"></div>
            <div class="container">
                <div class="differentiators-layout">
                    <FadeIn class="differentiators-list">
                        <SectionTitle title="Por que Imperium?" subtitle="Nosso Legado" light=true />
                        <div class="feature-list">
                            {DIFFERENTIATORS
                                .iter()
                                .map(|feature| {
                                    view! {
                                        <div class="feature-row">
                                            <Icon glyph=Glyph::Check class="feature-check" />
                                            <div>
                                                <h4 class="feature-title">{feature.title}</h4>
                                                <p class="feature-description">
                                                    {feature.description}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </FadeIn>

                    <FadeIn delay=300 class="differentiators-figure">
                        <div class="framed-photo">
                            <img
                                src="https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=800&auto=format&fit=crop"
                                alt="Escritório Moderno"
                            />
                            <div class="experience-badge">
                                <p class="experience-count">"15+"</p>
                                <p class="experience-label">"Anos de Experiência"</p>
                            </div>
                        </div>
                    </FadeIn>
                </div>
            </div>
        </section>
    }
}
