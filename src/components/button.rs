//! Button Component
//!
//! The shared button with the site's variants and sizes.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
}

const BASE_CLASS: &str = "inline-flex items-center justify-center rounded-md font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-primary-500 disabled:opacity-50 disabled:pointer-events-none";

pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "bg-primary-600 text-white hover:bg-primary-700",
        ButtonVariant::Outline => "border border-gray-300 bg-white text-gray-900 hover:bg-gray-50",
        ButtonVariant::Ghost => "text-gray-700 hover:bg-gray-100",
    };
    let size = match size {
        ButtonSize::Default => "px-4 py-2 text-sm",
        ButtonSize::Large => "px-8 py-3 text-lg",
    };
    format!("{BASE_CLASS} {variant} {size}")
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// Render as `type="submit"`
    #[prop(optional)] submit: bool,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=button_class(variant, size)
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |_| {
                if let Some(callback) = on_click {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
