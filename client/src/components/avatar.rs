//! Round avatar with an initials fallback.

use leptos::prelude::*;

use crate::util::{color, format};

/// Photo when `src` is set, otherwise initials on a tint of `color`.
#[component]
pub fn Avatar(
    name: String,
    #[prop(default = None)] src: Option<String>,
    #[prop(default = None)] color: Option<String>,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let size = if large { "avatar avatar--lg" } else { "avatar" };
    match src {
        Some(src) => view! { <img class=size src=src alt=name/> }.into_any(),
        None => {
            let style = color.as_deref().map(color::avatar_style).unwrap_or_default();
            let initials = format::initials(&name);
            view! {
                <span class=format!("{size} avatar--fallback") style=style title=name>
                    {initials}
                </span>
            }
            .into_any()
        }
    }
}
