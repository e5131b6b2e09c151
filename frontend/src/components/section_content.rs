use shared::{Profile, SectionId, TextSpan};
use yew::prelude::*;

/// Body of the card for `id`.
pub fn section_body(id: SectionId, profile: &Profile) -> Html {
    match id {
        SectionId::Summary => summary(profile),
        SectionId::Competencies => competencies(profile),
        SectionId::Experience => experience(profile),
        SectionId::Achievements => bullet_list(profile.achievements),
        SectionId::Languages => {
            let items = profile.languages.iter().map(|l| html! { <li>{ l.display() }</li> });
            html! { <ul class="bullet-list">{ for items }</ul> }
        }
    }
}

fn summary(profile: &Profile) -> Html {
    let spans = profile.summary.iter().map(|span| match span {
        TextSpan::Plain(_) => html! { <>{ span.text() }</> },
        TextSpan::Strong(_) => html! { <strong>{ span.text() }</strong> },
    });
    html! { <p>{ for spans }</p> }
}

fn competencies(profile: &Profile) -> Html {
    let items = profile.competencies.iter().map(|c| html! { <li>{ *c }</li> });
    html! { <ul class="bullet-list competency-grid">{ for items }</ul> }
}

fn experience(profile: &Profile) -> Html {
    let last = profile.experience.len().saturating_sub(1);
    let entries = profile.experience.iter().enumerate().map(|(index, entry)| {
        let highlights = entry.highlights.iter().map(|h| html! { <li>{ *h }</li> });
        html! {
            <>
                <h3 class="experience-role">{ entry.role }</h3>
                <p class="experience-organization">{ entry.organization }</p>
                <ul class={classes!("bullet-list", (index < last).then_some("experience-gap"))}>
                    { for highlights }
                </ul>
            </>
        }
    });
    html! { <>{ for entries }</> }
}

fn bullet_list(items: &[&'static str]) -> Html {
    let items = items.iter().map(|item| html! { <li>{ *item }</li> });
    html! { <ul class="bullet-list">{ for items }</ul> }
}
