use common::date_range::RangeKey;
use yew::prelude::*;

const OPTIONS: [RangeKey; 3] = [RangeKey::Last7Days, RangeKey::Last30Days, RangeKey::Last90Days];

#[derive(Properties, PartialEq)]
pub struct TimeFilterSelectorProps {
    pub value: RangeKey,
    pub on_change: Callback<RangeKey>,
    pub is_loading: bool,
}

/// Dropdown over the short presets the dashboard offers. Disabled while a
/// fetch is pending so the pending window cannot be changed mid-flight.
#[function_component(TimeFilterSelector)]
pub fn time_filter_selector(props: &TimeFilterSelectorProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_| is_open.set(!*is_open))
    };

    html! {
        <div class="relative">
            <button
                class="flex items-center space-x-1 bg-white border border-border rounded-md px-3 py-2 text-sm font-medium text-text-primary hover:bg-background"
                onclick={toggle}
                disabled={props.is_loading}
            >
                {if props.is_loading {
                    html! { <span>{"Loading..."}</span> }
                } else {
                    html! { <span>{props.value.label()}</span> }
                }}
            </button>

            {if *is_open {
                html! {
                    <div class="absolute z-10 mt-1 w-48 bg-white rounded-md shadow-lg border border-border">
                        {for OPTIONS.iter().map(|option| {
                            let active = *option == props.value;
                            let class = if active {
                                "w-full text-left px-4 py-2 text-sm bg-blue-50 text-primary font-medium"
                            } else {
                                "w-full text-left px-4 py-2 text-sm text-text-primary hover:bg-background"
                            };
                            let onclick = {
                                let on_change = props.on_change.clone();
                                let is_open = is_open.clone();
                                let option = *option;
                                Callback::from(move |_| {
                                    on_change.emit(option);
                                    is_open.set(false);
                                })
                            };
                            html! {
                                <button key={option.as_value()} class={class} onclick={onclick}>
                                    {option.label()}
                                    {if active { html! { <span class="float-right">{"✓"}</span> } } else { html! {} }}
                                </button>
                            }
                        })}
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
