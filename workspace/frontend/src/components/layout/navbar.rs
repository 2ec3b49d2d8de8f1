use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
    /// Disables the refresh button while a recompute is running
    #[prop_or_default]
    pub refreshing: bool,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let refresh_button = props.on_refresh.as_ref().map(|on_refresh| {
        let onclick = on_refresh.reform(|_: MouseEvent| ());
        html! {
            <button class="btn btn-sm btn-outline" disabled={props.refreshing} {onclick}>
                if props.refreshing {
                    <span class="loading loading-spinner loading-xs"></span>
                    {"Refreshing..."}
                } else {
                    <i class="fas fa-sync-alt"></i>
                    {"Refresh forecasts"}
                }
            </button>
        }
    });

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                { for refresh_button }
            </div>
        </div>
    }
}
