use common::{MedicineName, Period, RegionName};
use compute::SelectionState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub selection: SelectionState,
    pub medicines: Vec<MedicineName>,
    pub regions: Vec<RegionName>,
    pub loading: bool,
    pub on_period_change: Callback<Period>,
    pub on_medicine_change: Callback<MedicineName>,
    pub on_region_change: Callback<RegionName>,
    pub on_submit: Callback<()>,
}

fn select_value(e: Event) -> Option<String> {
    e.target_dyn_into::<web_sys::HtmlSelectElement>()
        .map(|target| target.value())
}

/// Period, medicine and region pickers. Submitting is always allowed; an
/// incomplete selection is sent with empty fields.
#[function_component(SelectionForm)]
pub fn selection_form(props: &Props) -> Html {
    let on_period = {
        let on_period_change = props.on_period_change.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(e) {
                match value.parse::<Period>() {
                    Ok(period) => on_period_change.emit(period),
                    Err(err) => log::warn!("Ignoring period selection: {}", err),
                }
            }
        })
    };
    let on_medicine = {
        let on_medicine_change = props.on_medicine_change.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(e) {
                on_medicine_change.emit(value);
            }
        })
    };
    let on_region = {
        let on_region_change = props.on_region_change.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(e) {
                on_region_change.emit(value);
            }
        })
    };
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let selection = &props.selection;

    html! {
        <form class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end" onsubmit={on_submit}>
            <div class="form-control">
                <label class="label" for="period"><span class="label-text">{"Period"}</span></label>
                <select id="period" class="select select-bordered" onchange={on_period}>
                    <option value="" selected={!selection.period.is_selected()}>{Period::Unselected.label()}</option>
                    { for Period::OPTIONS.iter().map(|period| html! {
                        <option value={period.as_wire()} selected={*period == selection.period}>{period.label()}</option>
                    })}
                </select>
            </div>

            <div class="form-control">
                <label class="label" for="medicine"><span class="label-text">{"Medicine"}</span></label>
                <select id="medicine" class="select select-bordered" onchange={on_medicine}>
                    <option value="" selected={selection.medicine.is_empty()}>{"Select medicine"}</option>
                    { for props.medicines.iter().map(|medicine| html! {
                        <option value={medicine.clone()} selected={*medicine == selection.medicine}>{medicine}</option>
                    })}
                </select>
            </div>

            <div class="form-control">
                <label class="label" for="region"><span class="label-text">{"State"}</span></label>
                <select id="region" class="select select-bordered" onchange={on_region}>
                    <option value="" selected={selection.region.is_empty()}>{"Select state"}</option>
                    { for props.regions.iter().map(|region| html! {
                        <option value={region.clone()} selected={*region == selection.region}>{region}</option>
                    })}
                </select>
            </div>

            <button type="submit" class="btn btn-primary">
                if props.loading {
                    <span class="loading loading-spinner loading-sm"></span>
                }
                {"Show forecast"}
            </button>
        </form>
    }
}
