use leptos::prelude::*;

use crate::components::Icon;
use crate::content::Glyph;
use crate::reveal::FadeIn;

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3659.0254648900777!2d-47.460647323985735!3d-23.49559265918235!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x94c58aa9e8555555%3A0x5555555555555555!2sSorocaba%2C%20SP!5e0!3m2!1spt-BR!2sbr";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contato" class="contact">
            <div class="container">
                <FadeIn>
                    <div class="contact-panel">
                        <div class="contact-copy">
                            <h2 class="contact-heading">"Vamos conversar sobre o seu caso?"</h2>
                            <p class="contact-lead">
                                "Agende uma reunião inicial para entendermos suas necessidades. "
                                "Garantimos total sigilo e uma análise preliminar honesta sobre as "
                                "possibilidades jurídicas."
                            </p>

                            <div class="contact-channels">
                                <ContactChannel
                                    glyph=Glyph::MapPin
                                    label="Endereço"
                                    value="Av. Barão de Tatuí, 1200 - Sorocaba/SP"
                                />
                                <ContactChannel
                                    glyph=Glyph::Mail
                                    label="Email"
                                    value="contato@imperiumadvocacia.com.br"
                                />
                                <ContactChannel
                                    glyph=Glyph::Phone
                                    label="Telefone"
                                    value="(15) 3000-0000"
                                />
                            </div>
                        </div>

                        <div class="contact-map">
                            <iframe
                                src=MAP_EMBED_URL
                                title="Mapa de Localização"
                                {..leptos::attr::loading("lazy")}
                                allowfullscreen="true"
                                referrerpolicy="no-referrer-when-downgrade"
                            ></iframe>
                        </div>
                    </div>
                </FadeIn>
            </div>
        </section>
    }
}

#[component]
fn ContactChannel(glyph: Glyph, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="contact-channel">
            <div class="channel-icon">
                <Icon glyph=glyph />
            </div>
            <div>
                <h4 class="channel-label">{label}</h4>
                <p class="channel-value">{value}</p>
            </div>
        </div>
    }
}
