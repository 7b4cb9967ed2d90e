use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <span class="footer-name">"Imperium"</span>
                    <p class="footer-copyright">
                        "© 2024 Imperium Advocacia. Todos os direitos reservados."
                    </p>
                </div>
                <div class="footer-links">
                    <a href="#" class="footer-link">"Termos"</a>
                    <a href="#" class="footer-link">"Privacidade"</a>
                    <a href="#" class="footer-link">"OAB/SP 00.000"</a>
                </div>
            </div>
        </footer>
    }
}
