use dioxus::prelude::*;

use crate::domain::models::MenuIcon;

/// Outline icon for a sidebar entry
#[component]
pub fn MenuIconView(icon: MenuIcon) -> Element {
    let class = match icon {
        MenuIcon::Dataset => "c-icon c-icon--dataset",
        MenuIcon::Configuration => "c-icon c-icon--configuration",
        MenuIcon::Testing => "c-icon c-icon--testing",
    };

    rsx! {
        svg {
            class: class,
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {match icon {
                // stacked database
                MenuIcon::Dataset => rsx! {
                    ellipse { cx: "12", cy: "5", rx: "8", ry: "3" }
                    path { d: "M4 5v6c0 1.7 3.6 3 8 3s8-1.3 8-3V5" }
                    path { d: "M4 11v6c0 1.7 3.6 3 8 3s8-1.3 8-3v-6" }
                },
                // sliders
                MenuIcon::Configuration => rsx! {
                    path { d: "M4 6h10M18 6h2M4 12h4M12 12h8M4 18h12M20 18h0" }
                    circle { cx: "16", cy: "6", r: "2" }
                    circle { cx: "10", cy: "12", r: "2" }
                    circle { cx: "18", cy: "18", r: "2" }
                },
                // magnifier
                MenuIcon::Testing => rsx! {
                    circle { cx: "11", cy: "11", r: "7" }
                    path { d: "M21 21l-4.3-4.3" }
                },
            }}
        }
    }
}
