use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileHeaderProps {
    pub name: AttrValue,
    pub tagline: AttrValue,
    pub contact_line: AttrValue,
}

#[function_component(ProfileHeader)]
pub fn profile_header(props: &ProfileHeaderProps) -> Html {
    html! {
        <header class="profile-header">
            <h1 class="profile-name">{ props.name.clone() }</h1>
            <p class="profile-tagline">{ props.tagline.clone() }</p>
            <p class="profile-contact">{ props.contact_line.clone() }</p>
        </header>
    }
}
