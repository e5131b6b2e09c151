mod components;
mod hooks;
mod services;

use shared::PortfolioConfig;
use yew::prelude::*;

use components::Portfolio;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: PortfolioConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <Portfolio config={props.config.clone()} />
    }
}

fn main() {
    let config = PortfolioConfig::default();
    Logger::set_level(config.log_level);
    Logger::info_with_component("app", "Mounting profile page");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
