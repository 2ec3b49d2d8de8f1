use std::rc::Rc;

use common::{MedicineName, Period, RegionName};
use compute::dashboard::{DashboardAction, DashboardState, DashboardView, Orchestrator};
use compute::PageRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client::HttpForecastRepository;

/// Dashboard state held by a Yew reducer. Every action goes through
/// [`DashboardState::reduce`], so stale responses are dropped the same way
/// they are on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStore(pub DashboardState);

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::trace!("Dashboard action: {:?}", action);
        let Self(state) = Rc::unwrap_or_clone(self);
        Rc::new(Self(state.reduce(action)))
    }
}

/// What the dashboard page needs to render and react to operator input.
pub struct DashboardHandle {
    pub view: DashboardView,
    pub set_period: Callback<Period>,
    pub set_medicine: Callback<MedicineName>,
    pub set_region: Callback<RegionName>,
    pub on_submit: Callback<()>,
    pub on_refresh: Callback<()>,
    pub on_table_medicine_changed: Callback<MedicineName>,
    pub on_page_changed: Callback<PageRequest>,
}

/// Sync action callback.
fn dispatch_with<T: 'static>(
    store: &UseReducerHandle<DashboardStore>,
    action: impl Fn(T) -> DashboardAction + 'static,
) -> Callback<T> {
    let dispatcher = store.dispatcher();
    Callback::from(move |value| dispatcher.dispatch(action(value)))
}

/// Owns the dashboard state and the orchestrator for one mounted page.
///
/// Loads option lists, catalog and stock warnings once on mount. Submit and
/// refresh spawn their pipelines; the reducer applies whatever comes back.
#[hook]
pub fn use_dashboard() -> DashboardHandle {
    let store = use_reducer(DashboardStore::default);
    let orchestrator = use_memo((), |_| Orchestrator::new(HttpForecastRepository::from_settings()));

    {
        let orchestrator = orchestrator.clone();
        let dispatcher = store.dispatcher();
        use_effect_with((), move |_| {
            log::debug!("Dashboard mounted, loading data");
            spawn_local(async move {
                orchestrator.mount(&|action| dispatcher.dispatch(action)).await;
            });
            || ()
        });
    }

    let on_submit = {
        let orchestrator = orchestrator.clone();
        let dispatcher = store.dispatcher();
        let request = store.0.selection.submit();
        Callback::from(move |_| {
            let orchestrator = orchestrator.clone();
            let dispatcher = dispatcher.clone();
            let request = request.clone();
            log::info!("Submitting selection: {:?}", request);
            spawn_local(async move {
                orchestrator.submit(request, &|action| dispatcher.dispatch(action)).await;
            });
        })
    };

    let on_refresh = {
        let orchestrator = orchestrator.clone();
        let dispatcher = store.dispatcher();
        Callback::from(move |_| {
            let orchestrator = orchestrator.clone();
            let dispatcher = dispatcher.clone();
            log::info!("Refresh requested");
            spawn_local(async move {
                orchestrator.refresh(&|action| dispatcher.dispatch(action)).await;
            });
        })
    };

    DashboardHandle {
        view: store.0.view(),
        set_period: dispatch_with(&store, DashboardAction::SetPeriod),
        set_medicine: dispatch_with(&store, DashboardAction::SetMedicine),
        set_region: dispatch_with(&store, DashboardAction::SetRegion),
        on_submit,
        on_refresh,
        on_table_medicine_changed: dispatch_with(&store, DashboardAction::TableMedicineChanged),
        on_page_changed: dispatch_with(&store, DashboardAction::PageChanged),
    }
}
