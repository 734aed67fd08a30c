//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::{Contact, DesktopNav, Footer, Hero, MobileNav, News, Product, ScrollTopButton, Security, Team};
use crate::styles::{CSP, SITE_CSS};
use crate::types::{ClientConfig, PageAssets, Strings};
use servanda_core::LocaleChoice;

/// Document title.
pub const PAGE_TITLE: &str = "Servanda";

/// `<meta name="description">` content.
pub const PAGE_DESCRIPTION: &str = "Nettsiden til Servanda AS.";

/// The complete HTML document for the landing page
#[component]
pub fn SiteDocument(
    strings: Strings,
    /// What the switcher shows as selected
    choice: LocaleChoice,
    assets: PageAssets,
    client: ClientConfig,
) -> impl IntoView {
    let lang = strings.locale().code();
    let bootstrap = assets.bootstrap_script();
    let client_json = client.to_json();

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=PAGE_DESCRIPTION />
                <title>{PAGE_TITLE}</title>
                <link rel="icon" href=assets.favicon.clone() />
                <link rel="modulepreload" href=assets.wasm_js.clone() />
                <style>{SITE_CSS}</style>
            </head>
            <body data-client-config=client_json>
                <header class="site-header">
                    <DesktopNav strings=strings.clone() choice=choice favicon=assets.favicon.clone() />
                    <MobileNav strings=strings.clone() choice=choice favicon=assets.favicon.clone() />
                </header>
                <main>
                    <Hero strings=strings.clone() />
                    <Product strings=strings.clone() />
                    <Security strings=strings.clone() />
                    <Team strings=strings.clone() />
                    <News strings=strings.clone() />
                    <Contact strings=strings.clone() />
                </main>
                <Footer strings=strings.clone() />
                <ScrollTopButton strings=strings />
                <script type="module">{bootstrap}</script>
            </body>
        </html>
    }
}
