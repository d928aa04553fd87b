use leptos::prelude::*;

/// `<img>` that swaps to a placeholder when missing or failing to load
#[component]
pub fn FallbackImage(
    src: Option<String>,
    #[prop(into)] alt: String,
    placeholder: String,
    img_class: &'static str,
) -> impl IntoView {
    let src = src.unwrap_or_else(|| placeholder.clone());

    view! {
        <img
            src=src
            alt=alt
            class=img_class
            on:error=move |ev| {
                let img: web_sys::HtmlImageElement = event_target(&ev);
                // Only once, in case the placeholder itself is unreachable
                if img.src() != placeholder {
                    img.set_src(&placeholder);
                }
            }
        />
    }
}
