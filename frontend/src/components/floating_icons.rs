use log::warn;
use yew::prelude::*;

use crate::motion::curve::{OutputCurve, ScrollRange};
use crate::motion::floating::{parallax, scatter, ICON_COUNT};
use crate::motion::observer::use_scroll_progress;

/// Background layer of drifting, spinning emoji. Drift follows the layer's
/// passage through the viewport; spin runs on its own clock.
#[function_component(FloatingIcons)]
pub fn floating_icons() -> Html {
    let node = use_node_ref();
    let icons = use_state(|| scatter(ICON_COUNT, web_sys::js_sys::Date::now() as u64));
    let progress = use_scroll_progress(node.clone(), ScrollRange::THROUGH_VIEWPORT);
    let drift = use_memo(
        |_| {
            parallax().unwrap_or_else(|e| {
                warn!("icon drift disabled: {}", e);
                OutputCurve::from_unit([0.0, 0.0])
            })
        },
        (),
    );
    let parent_y = drift.sample(progress);

    html! {
        <div ref={node} class="floating-icons">
            { for icons.iter().map(|icon| html! {
                <div key={icon.id} class="floating-icon" style={icon.wrapper_style(parent_y)}>
                    <span class="floating-icon__spin" style={icon.spin_style()}>{ icon.emoji }</span>
                </div>
            }) }
            <style>
                {r#"
                .floating-icons {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                    z-index: 0;
                }
                .floating-icon {
                    position: absolute;
                    font-size: 2.25rem;
                    user-select: none;
                    filter: blur(1px);
                }
                .floating-icon__spin {
                    display: inline-block;
                    opacity: 0;
                    animation: icon-spin 3s linear infinite, icon-fade 1s ease-out forwards;
                }
                @keyframes icon-spin {
                    from { transform: rotate(0deg); }
                    to { transform: rotate(var(--spin)); }
                }
                @keyframes icon-fade {
                    from { opacity: 0; }
                    to { opacity: 0.6; }
                }
                @media (max-width: 767px) {
                    .floating-icons { display: none; }
                }
                "#}
            </style>
        </div>
    }
}
