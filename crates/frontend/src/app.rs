use leptos::prelude::*;

use crate::catalogo::ui::PaginaCatalogo;
use crate::layout::{Footer, Header};
use crate::shared::config::AppConfig;

/// Root component. Resolves the runtime configuration once and hands it down
/// by value; leaf components never look anything up themselves.
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::desde_window();

    view! {
        <Header />
        <main class="main-content">
            <PaginaCatalogo config=config />
        </main>
        <Footer />
    }
}
