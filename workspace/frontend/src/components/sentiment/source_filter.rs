use common::models::SentimentSource;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SourceFilterProps {
    pub selected: SentimentSource,
    pub on_change: Callback<SentimentSource>,
}

#[function_component(SourceFilter)]
pub fn source_filter(props: &SourceFilterProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_| is_open.set(!*is_open))
    };

    html! {
        <div class="relative inline-block">
            <button
                class="inline-flex items-center px-4 py-2 bg-white border border-border rounded-md shadow-sm text-sm font-medium text-text-primary hover:bg-background"
                onclick={toggle}
                aria-haspopup="true"
                aria-expanded={is_open.to_string()}
            >
                {props.selected.label()}
            </button>

            {if *is_open {
                html! {
                    <div class="absolute z-10 mt-1 w-56 bg-white rounded-md shadow-lg border border-border">
                        <div class="py-1">
                            {for SentimentSource::ALL.iter().map(|source| {
                                let active = *source == props.selected;
                                let class = if active {
                                    "w-full text-left px-4 py-2 text-sm bg-blue-50 text-primary"
                                } else {
                                    "w-full text-left px-4 py-2 text-sm text-text-primary hover:bg-background"
                                };
                                let onclick = {
                                    let on_change = props.on_change.clone();
                                    let is_open = is_open.clone();
                                    let source = *source;
                                    Callback::from(move |_| {
                                        on_change.emit(source);
                                        is_open.set(false);
                                    })
                                };
                                html! {
                                    <button key={source.value()} class={class} onclick={onclick}>
                                        {source.label()}
                                        {if active { html! { <span class="float-right">{"✓"}</span> } } else { html! {} }}
                                    </button>
                                }
                            })}
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
