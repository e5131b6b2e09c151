use shared::{PortfolioConfig, PROFILE, SECTIONS};
use yew::prelude::*;

use super::card::Card;
use super::fade_in::FadeIn;
use super::nav_bar::NavBar;
use super::profile_header::ProfileHeader;
use super::section_content::section_body;
use crate::hooks::use_active_section::{use_active_section, UseActiveSectionResult};

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    #[prop_or_default]
    pub config: PortfolioConfig,
}

/// The whole page: header, sticky section navigation and the five cards.
#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let UseActiveSectionResult { active, navigate } = use_active_section(&props.config);
    let entrance = &props.config.entrance;
    let last = SECTIONS.len() - 1;

    let cards = SECTIONS.iter().enumerate().map(|(index, section)| {
        html! {
            <section id={section.id.as_str()} key={section.id.as_str()} class="portfolio-section">
                <FadeIn
                    duration_ms={entrance.duration_ms}
                    delay_ms={entrance.delay_for(index)}
                    offset_px={entrance.offset_px}
                >
                    <Card title={section.title} class={classes!((index < last).then_some("card-gap"))}>
                        { section_body(section.id, &PROFILE) }
                    </Card>
                </FadeIn>
            </section>
        }
    });

    html! {
        <div class="portfolio">
            <ProfileHeader
                name={PROFILE.name}
                tagline={PROFILE.tagline}
                contact_line={PROFILE.contact.line()}
            />
            <NavBar {active} on_select={navigate} />
            <main>
                { for cards }
            </main>
        </div>
    }
}
