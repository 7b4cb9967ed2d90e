use leptos::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::reveal::FadeIn;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="hero-backdrop">
                <img src="https://picsum.photos/id/196/1920/1080" alt="Office background" />
                <div class="hero-overlay"></div>
            </div>

            <div class="container hero-content">
                <FadeIn delay=200>
                    <span class="hero-badge">"Advocacia em Sorocaba/SP"</span>
                </FadeIn>
                <FadeIn delay=400>
                    <h1 class="hero-title">
                        "Advocacia estratégica para "
                        <br />
                        <span class="hero-title-accent">"resultados decisivos."</span>
                    </h1>
                </FadeIn>
                <FadeIn delay=600>
                    <p class="hero-description">
                        "Compromisso inabalável com a excelência técnica e a defesa rigorosa "
                        "dos interesses de nossos clientes nos cenários jurídicos mais complexos."
                    </p>
                </FadeIn>
                <FadeIn delay=800>
                    <div class="hero-actions">
                        <Button variant=ButtonVariant::Primary href="https://wa.me/5511999999999">
                            "Falar com Especialista"
                        </Button>
                        <Button variant=ButtonVariant::Outline href="#servicos">
                            "Conhecer Áreas"
                        </Button>
                    </div>
                </FadeIn>
            </div>
        </section>
    }
}
