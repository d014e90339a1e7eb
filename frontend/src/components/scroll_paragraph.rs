use log::warn;
use yew::prelude::*;

use crate::motion::curve::{Reveal, ScrollRange};
use crate::motion::observer::use_scroll_progress;

#[derive(Properties, PartialEq)]
pub struct ScrollParagraphProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Closing block: also settles from a slight shrink and tilt.
    #[prop_or_default]
    pub closing: bool,
}

/// Block that fades and rises into place as its top scrolls from 90% to 50%
/// of the viewport.
#[function_component(ScrollParagraph)]
pub fn scroll_paragraph(props: &ScrollParagraphProps) -> Html {
    let node = use_node_ref();
    let reveal = use_memo(
        |closing| {
            let built = if *closing {
                Reveal::closing()
            } else {
                Reveal::paragraph()
            };
            // falls back to a static block
            built.unwrap_or_else(|e| {
                warn!("scroll reveal disabled: {}", e);
                Reveal::new()
            })
        },
        props.closing,
    );
    let progress = use_scroll_progress(node.clone(), ScrollRange::PARAGRAPH);

    html! {
        <div
            ref={node}
            class={classes!("scroll-paragraph", props.class.clone())}
            style={reveal.sample(progress).to_css()}
        >
            { props.children.clone() }
        </div>
    }
}
