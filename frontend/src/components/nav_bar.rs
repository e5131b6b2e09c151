use shared::{ActiveSection, SectionId, SECTIONS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: ActiveSection,
    pub on_select: Callback<SectionId>,
}

/// Sticky bar with one button per section, in declared order. Exactly the
/// active section's button is highlighted.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let buttons = SECTIONS.iter().map(|section| {
        let id = section.id;
        let is_active = props.active.is_active(id);
        let onclick = props.on_select.reform(move |_: MouseEvent| id);

        html! {
            <button
                key={id.as_str()}
                class={classes!("nav-button", is_active.then_some("nav-button-active"))}
                aria-current={is_active.then_some("true")}
                data-section={id.as_str()}
                {onclick}
            >
                { section.label }
            </button>
        }
    });

    html! {
        <nav class="section-nav">
            { for buttons }
        </nav>
    }
}
