//! Root document component - the complete static page

use super::{ContainerContent, TabBar};
use crate::styles::RATING_CSS;
use crate::types::PageView;
use crate::PageAssets;
use leptos::prelude::*;

/// The complete HTML document: heading, tab bar and table container.
#[component]
pub fn RatingDocument(page: PageView, assets: PageAssets) -> impl IntoView {
    view! {
        <html lang="ru">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{page.title.clone()}</title>
                <style inner_html=RATING_CSS></style>
            </head>
            <body>
                <main class="rating">
                    <h1 class="rating__title">{page.title}</h1>
                    <TabBar tabs=page.tabs />
                    <div id=page.container_id class="rating-table-container">
                        <ContainerContent content=page.container />
                    </div>
                </main>
                <BootScript assets=assets />
            </body>
        </html>
    }
}

/// Module script that boots the browser bundle, when one is configured.
#[component]
fn BootScript(assets: PageAssets) -> impl IntoView {
    assets.web_module_path.map(|path| {
        let boot = format!("import init from \"{}\";\ninit();", path);
        view! { <script type="module" inner_html=boot></script> }
    })
}
