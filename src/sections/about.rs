use leptos::prelude::*;

use crate::reveal::FadeIn;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="sobre" class="about">
            <div class="container about-layout">
                <FadeIn delay=200 class="about-figure">
                    <img
                        src="https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=600&auto=format&fit=crop"
                        alt="Sócio Fundador"
                    />
                    <div class="frame-corner bottom-right"></div>
                    <div class="frame-corner top-left"></div>
                </FadeIn>

                <FadeIn class="about-copy">
                    <span class="section-eyebrow">"Sobre o Sócio"</span>
                    <h2 class="about-name">"Dr. Roberto Imperium"</h2>
                    <p>
                        "Fundador do escritório Imperium, Dr. Roberto possui mais de 15 anos de "
                        "atuação destacada nos tribunais superiores. Especialista em Direito Civil "
                        "e Empresarial pela USP, construiu uma carreira pautada na ética e na busca "
                        "incansável pela justiça."
                    </p>
                    <p>
                        "\"Nossa missão não é apenas ganhar casos, mas garantir que o direito do "
                        "nosso cliente seja respeitado e preservado com a máxima dignidade e "
                        "competência técnica.\""
                    </p>
                </FadeIn>
            </div>
        </section>
    }
}
