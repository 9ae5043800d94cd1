//! Landing page served at `/`.
//!
//! The page is static: no props, no signals, no hydration. It is rendered to
//! a string once on the server and the same bytes are served for every
//! request.

use leptos::prelude::*;

/// Welcome banner: heading and tagline, centred on a full-height backdrop.
#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"Welcome to Basketball Player Ranking"</h1>
                <p class="text-xl text-gray-600">"Your platform for analyzing and ranking basketball players"</p>
            </div>
        </div>
    }
}

/// Full HTML document wrapping [`WelcomePage`].
pub fn shell() -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Basketball Player Ranking"</title>
                <script src="https://cdn.tailwindcss.com"></script>
            </head>
            <body>
                <WelcomePage/>
            </body>
        </html>
    }
}

/// Render the complete welcome document served at `/`.
#[must_use]
pub fn render_welcome_document() -> String {
    shell().to_html()
}

#[cfg(test)]
#[path = "welcome_test.rs"]
mod tests;
