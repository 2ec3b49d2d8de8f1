use common::MedicineName;
use compute::dashboard::{NO_FORECAST_DATA, TableView};
use compute::PageRequest;
use yew::prelude::*;

use crate::components::common::pagination::Pagination;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub table: TableView,
    /// Medicines present in the catalog, in catalog order
    pub medicines: Vec<MedicineName>,
    pub selected: Option<MedicineName>,
    pub on_medicine_change: Callback<MedicineName>,
    pub on_page_change: Callback<PageRequest>,
}

#[function_component(ForecastTable)]
pub fn forecast_table(props: &Props) -> Html {
    let on_select = {
        let on_medicine_change = props.on_medicine_change.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_medicine_change.emit(target.value());
            }
        })
    };

    let selected = props.selected.as_deref().unwrap_or_default();

    html! {
        <>
            <div class="flex items-center gap-4 mb-4">
                <label class="label" for="table-medicine">{"Medicine"}</label>
                <select
                    id="table-medicine"
                    class="select select-sm select-bordered w-full max-w-xs"
                    disabled={props.medicines.is_empty()}
                    onchange={on_select}
                >
                    { for props.medicines.iter().map(|medicine| html! {
                        <option value={medicine.clone()} selected={medicine == selected}>{medicine}</option>
                    })}
                </select>
            </div>

            {match &props.table {
                TableView::Empty => html! {
                    <div class="alert">
                        <i class="fas fa-info-circle"></i>
                        <span>{NO_FORECAST_DATA}</span>
                    </div>
                },
                TableView::Page { page, .. } => html! {
                    <>
                        <div class="overflow-x-auto bg-base-100 rounded-box">
                            <table class="table table-zebra">
                                <thead>
                                    <tr>
                                        <th>{"Date"}</th>
                                        <th class="text-right">{"Forecast Value"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for page.rows.iter().map(|row| html! {
                                        <tr class="hover" key={row.date_key.clone()}>
                                            <td class="whitespace-nowrap">{&row.date_label}</td>
                                            <td class="font-mono text-right">{&row.value}</td>
                                        </tr>
                                    })}
                                </tbody>
                            </table>
                        </div>
                        <Pagination
                            current_page={page.page}
                            page_count={page.page_count}
                            total_items={page.total_items}
                            on_page_change={props.on_page_change.clone()}
                        />
                    </>
                },
            }}
        </>
    }
}
