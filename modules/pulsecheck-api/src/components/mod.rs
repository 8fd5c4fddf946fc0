// Dioxus SSR components for the digest page.

use dioxus::prelude::*;

use pulsecheck_common::{DigestView, FeedbackItem, ThemeCount};

/// Render a digest view into a complete HTML document string.
pub fn render_digest(view: DigestView) -> String {
    let mut dom = VirtualDom::new_with_props(DigestPage, DigestPageProps { view });
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus::ssr::render(&dom)
    )
}

#[allow(non_snake_case)]
#[component]
fn DigestPage(view: DigestView) -> Element {
    let generated = view.generated_at.format("%Y-%m-%d %H:%M UTC").to_string();
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "Daily Feedback Summary" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "max-w-4xl mx-auto px-5 py-8 bg-gray-50 font-sans text-gray-900",
            div { class: "bg-white rounded-xl shadow p-8 mb-8 text-center",
                h1 { class: "text-3xl font-semibold mb-1", "Daily Feedback Summary" }
                div { class: "text-gray-500 text-sm", "Generated: {generated}" }
            }
            div { class: "flex justify-around bg-white rounded-xl shadow p-5 mb-8",
                StatItem { number: view.total.to_string(), label: "Total Feedback".to_string() }
                StatItem { number: view.urgent.len().to_string(), label: "Urgent Items".to_string() }
                StatItem { number: view.top_themes.len().to_string(), label: "Top Themes".to_string() }
            }
            section { class: "bg-white rounded-xl shadow p-6 mb-8",
                h2 { class: "text-xl font-semibold border-b-2 border-gray-100 pb-2 mb-5",
                    "Urgent Feedback"
                }
                if view.urgent.is_empty() {
                    div { class: "text-gray-500 italic text-center py-10",
                        "No urgent items - great job!"
                    }
                } else {
                    for item in view.urgent.iter() {
                        UrgentCard { item: item.clone() }
                    }
                }
            }
            section { class: "bg-white rounded-xl shadow p-6 mb-8",
                h2 { class: "text-xl font-semibold border-b-2 border-gray-100 pb-2 mb-5",
                    "Top Themes"
                }
                if view.top_themes.is_empty() {
                    div { class: "text-gray-500 italic text-center py-10", "No themes identified" }
                } else {
                    div { class: "grid grid-cols-2 md:grid-cols-3 gap-4",
                        for entry in view.top_themes.iter() {
                            ThemeCard { entry: entry.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn StatItem(number: String, label: String) -> Element {
    rsx! {
        div { class: "text-center",
            span { class: "block text-3xl font-bold text-blue-500", "{number}" }
            span { class: "text-gray-500 text-xs uppercase tracking-wide", "{label}" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn UrgentCard(item: FeedbackItem) -> Element {
    let date = item.timestamp.format("%Y-%m-%d").to_string();
    let summary = item.analysis.summary.clone();
    rsx! {
        div { class: "bg-red-50 border-l-4 border-red-500 rounded-lg p-5 mb-4",
            div { class: "flex justify-between items-center mb-2",
                span { class: "text-red-700 bg-red-100 text-xs font-bold px-2 py-1 rounded",
                    "{item.source}"
                }
                span { class: "text-gray-500 text-xs", "{date}" }
            }
            div { class: "text-sm leading-relaxed", "{item.text}" }
            div { class: "bg-blue-50 border-l-4 border-blue-400 rounded px-4 py-3 mt-3 text-sm italic",
                strong { "Summary: " }
                "{summary}"
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn ThemeCard(entry: ThemeCount) -> Element {
    rsx! {
        div { class: "bg-gradient-to-br from-indigo-500 to-purple-600 text-white rounded-xl p-5 text-center",
            div { class: "text-lg font-bold capitalize mb-1", "{entry.theme}" }
            div { class: "text-3xl font-bold", "{entry.count}" }
            div { class: "text-xs uppercase tracking-wide opacity-90", "Mentions" }
        }
    }
}
