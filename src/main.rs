// Imperium Advocacia landing page, Leptos 0.8 CSR edition

mod components;
mod content;
mod reveal;
mod scroll;
mod sections;

use leptos::prelude::*;
use sections::*;
use wasm_bindgen::JsCast;

/// Id of the element the app is mounted into. Missing at startup is fatal.
const MOUNT_POINT_ID: &str = "root";

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mount_point = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MOUNT_POINT_ID));

    let Some(mount_point) = mount_point else {
        log::error!("mount point #{MOUNT_POINT_ID} not found, nothing rendered");
        panic!("could not find #{MOUNT_POINT_ID} element to mount to");
    };

    let mount_point: web_sys::HtmlElement = mount_point
        .dyn_into()
        .unwrap_or_else(|_| panic!("#{MOUNT_POINT_ID} is not an HTML element"));

    log::info!("mounting imperium-landing at #{MOUNT_POINT_ID}");
    leptos::mount::mount_to(mount_point, || view! { <App/> }).forget();
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <Services />
            <Differentiators />
            <About />
            <Contact />
        </main>
        <Footer />
    }
}
