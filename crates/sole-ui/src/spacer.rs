//! Spacing primitive.

use leptos::prelude::*;

/// Which dimensions a [`Spacer`] occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Takes up height only.
    Vertical,
    /// Takes up width only.
    Horizontal,
    #[default]
    Both,
}

/// Inline CSS for a spacer of `size` pixels along `axis`.
pub fn spacer_style(size: u32, axis: Axis) -> String {
    let width = if axis == Axis::Vertical { 1 } else { size };
    let height = if axis == Axis::Horizontal { 1 } else { size };
    format!(
        "display: block; width: {width}px; min-width: {width}px; height: {height}px; min-height: {height}px"
    )
}

/// Empty block that reserves a fixed gap.
#[component]
pub fn Spacer(size: u32, #[prop(optional)] axis: Axis) -> impl IntoView {
    view! { <span class="spacer" style=spacer_style(size, axis)></span> }
}
