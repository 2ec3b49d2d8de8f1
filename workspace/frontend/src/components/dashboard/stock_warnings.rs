use compute::dashboard::WarningLine;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub warnings: Option<Vec<WarningLine>>,
}

/// Stock warning panel. Renders nothing when no medicine is flagged.
#[function_component(StockWarnings)]
pub fn stock_warnings(props: &Props) -> Html {
    let Some(warnings) = props.warnings.as_ref().filter(|w| !w.is_empty()) else {
        return html! {};
    };

    html! {
        <div class="card bg-base-100 shadow mt-6">
            <div class="card-body">
                <h2 class="card-title text-warning">
                    <i class="fas fa-exclamation-triangle"></i>
                    {"Stock warnings"}
                </h2>
                <ul class="list-none">
                    { for warnings.iter().map(|line| html! {
                        <li key={line.medicine.clone()} class="py-1">
                            <span class="font-semibold">{&line.medicine}</span>
                            {": "}
                            {&line.warning}
                        </li>
                    })}
                </ul>
            </div>
        </div>
    }
}
