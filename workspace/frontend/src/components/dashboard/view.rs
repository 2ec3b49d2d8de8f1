use yew::prelude::*;

use super::chart::ForecastChart;
use super::selection_form::SelectionForm;
use super::stock_warnings::StockWarnings;
use super::table::ForecastTable;
use crate::common::loading::Loading;
use crate::common::toast::ToastContext;
use crate::components::layout::layout::Layout;
use crate::hooks::use_dashboard;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let dashboard = use_dashboard();
    let view = dashboard.view;
    let toast_ctx = use_context::<ToastContext>();

    // Failures degrade to "no data"; the reason is only surfaced as a toast.
    // Keyed on the counters so a repeated identical notice still shows.
    {
        let toast_ctx = toast_ctx.clone();
        let error = view.last_error.clone();
        use_effect_with(view.error_seq, move |_| {
            if let (Some(error), Some(toast_ctx)) = (error, toast_ctx) {
                toast_ctx.show_warning(error);
            }
            || ()
        });
    }
    {
        let message = view.last_message.clone();
        use_effect_with(view.message_seq, move |_| {
            if let (Some(message), Some(toast_ctx)) = (message, toast_ctx) {
                toast_ctx.show_info(message);
            }
            || ()
        });
    }

    html! {
        <Layout
            title="Medicine Forecasts"
            on_refresh={Some(dashboard.on_refresh)}
            refreshing={view.refreshing}
        >
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <SelectionForm
                        selection={view.selection.clone()}
                        medicines={view.medicines.clone()}
                        regions={view.regions.clone()}
                        loading={view.loading}
                        on_period_change={dashboard.set_period}
                        on_medicine_change={dashboard.set_medicine}
                        on_region_change={dashboard.set_region}
                        on_submit={dashboard.on_submit}
                    />
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Medicine Usage"}</h2>
                        {match &view.chart {
                            Some(chart) => html! { <ForecastChart chart={chart.clone()} /> },
                            None if view.loading => html! { <Loading text={Some("Loading forecasts...".to_string())} /> },
                            None => html! {
                                <p class="text-sm text-gray-500">{"Choose a period, medicine and state to chart a forecast."}</p>
                            },
                        }}
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Forecast Table"}</h2>
                        <ForecastTable
                            table={view.table.clone()}
                            medicines={view.catalog_medicines.clone()}
                            selected={view.table_medicine.clone()}
                            on_medicine_change={dashboard.on_table_medicine_changed}
                            on_page_change={dashboard.on_page_changed}
                        />
                    </div>
                </div>
            </div>

            <StockWarnings warnings={view.stock_warnings.clone()} />
        </Layout>
    }
}
