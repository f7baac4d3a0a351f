use yew::prelude::*;

use crate::content::ContactEntry;
use crate::icons::IconView;

#[derive(Properties, PartialEq)]
pub struct ContactRowProps {
    pub entry: ContactEntry,
}

#[function_component(ContactRow)]
pub fn contact_row(props: &ContactRowProps) -> Html {
    let entry = &props.entry;

    let detail = match entry.href() {
        Some(href) => html! { <a class="contact-detail" href={href}>{entry.detail}</a> },
        None => html! { <p class="contact-detail">{entry.detail}</p> },
    };

    html! {
        <div class="contact-row">
            <div class="contact-icon">
                <IconView icon={entry.icon} />
            </div>
            <div>
                <h4 class="contact-heading">{entry.heading}</h4>
                {detail}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactListProps {
    pub entries: &'static [ContactEntry],
}

#[function_component(ContactList)]
pub fn contact_list(props: &ContactListProps) -> Html {
    html! {
        <div class="contact-list">
            { for props.entries.iter().map(|entry| html! {
                <ContactRow key={entry.heading} entry={*entry} />
            }) }
        </div>
    }
}
