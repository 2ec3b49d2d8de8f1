use yew::prelude::*;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
    #[prop_or_default]
    pub refreshing: bool,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar
                title={props.title.clone()}
                on_refresh={props.on_refresh.clone()}
                refreshing={props.refreshing}
            />
            <main class="flex-1 p-6 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}
