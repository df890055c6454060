use leptos::prelude::*;

/// Shop header shown above every page.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container">
                <h1>{"🧸 Juguetería Mayorista"}</h1>
                <p>{"Catálogo de productos para revendedores"}</p>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <p>{"© 2025 Juguetería Mayorista - Todos los derechos reservados"}</p>
                <p class="site-footer__credit">{"Desarrollado por tu Agencia de Automatización"}</p>
            </div>
        </footer>
    }
}
