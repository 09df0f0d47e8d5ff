// Lago Azul lead-referral page — Leptos 0.8 CSR

use leptos::prelude::*;

mod components;
mod config;
mod lead;
mod phone;
mod qr;
mod submit;
mod validate;

use components::form::ReferralForm;
use components::slideshow::Slideshow;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    view! {
        <main class="page">
            <div class="container">
                <header class="page-header">
                    <img
                        class="page-logo"
                        src="assets/skan-hous-logo.png"
                        alt="SKAN HOUS Incorporadora"
                    />
                </header>
                <div class="panels">
                    <section class="panel form-panel">
                        <ReferralForm />
                    </section>
                    <section class="panel slideshow-panel">
                        <Slideshow />
                    </section>
                </div>
            </div>
        </main>
    }
}
