use compute::PageRequest;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub page_count: usize,
    pub total_items: usize,
    pub on_page_change: Callback<PageRequest>,
}

/// Page numbers to offer, with `None` standing for an ellipsis.
fn visible_pages(current: usize, total_pages: usize) -> Vec<Option<usize>> {
    let max_visible = 5;
    if total_pages <= max_visible {
        return (1..=total_pages).map(Some).collect();
    }

    // Show first, last, current and neighbors
    let mut pages = vec![Some(1)];
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);

    if start > 2 {
        pages.push(None);
    }
    pages.extend((start..=end).map(Some));
    if end < total_pages - 1 {
        pages.push(None);
    }
    pages.push(Some(total_pages));
    pages
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total_pages = props.page_count;
    if total_pages <= 1 {
        return html! {};
    }

    let current = props.current_page;
    let button = |request: PageRequest, disabled: bool, icon: &'static str, title: &'static str| {
        let on_page_change = props.on_page_change.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_page_change.emit(request);
        });
        html! {
            <button class="btn btn-sm" {title} {disabled} {onclick}>
                <i class={icon}></i>
            </button>
        }
    };

    html! {
        <div class="flex justify-center items-center gap-2 my-4">
            { button(PageRequest::First, current <= 1, "fas fa-angle-double-left", "First page") }
            { button(PageRequest::Prev, current <= 1, "fas fa-chevron-left", "Previous page") }

            {for visible_pages(current, total_pages).into_iter().map(|page| match page {
                None => html! { <span class="px-2">{"..."}</span> },
                Some(page) => {
                    let on_page_change = props.on_page_change.clone();
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_page_change.emit(PageRequest::Goto(page));
                    });
                    html! {
                        <button
                            class={classes!("btn", "btn-sm", (page == current).then_some("btn-primary"))}
                            {onclick}
                        >
                            {page}
                        </button>
                    }
                }
            })}

            { button(PageRequest::Next, current >= total_pages, "fas fa-chevron-right", "Next page") }
            { button(PageRequest::Last, current >= total_pages, "fas fa-angle-double-right", "Last page") }

            <div class="ml-4 text-sm text-base-content/70">
                {format!("Page {} of {} ({} items)", current, total_pages, props.total_items)}
            </div>
        </div>
    }
}
