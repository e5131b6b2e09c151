use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Titled box: a header carrying the title above a content body.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            <div class="card-header">
                <h2 class="card-title">{ props.title.clone() }</h2>
            </div>
            <div class="card-content">
                { props.children.clone() }
            </div>
        </div>
    }
}
