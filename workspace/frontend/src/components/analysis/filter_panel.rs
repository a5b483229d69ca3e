use common::date_range::RangeKey;
use common::models::{AnalysisFilters, CrimeType, DataSource};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const CUSTOM_VALUE: &str = "custom";

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub filters: AnalysisFilters,
    pub on_filter_change: Callback<AnalysisFilters>,
}

/// Sidebar filters of the analysis view: crime type, data source and the
/// date window. Choosing "Custom" swaps the window preset for a raw
/// days-back count, which the resolver accepts directly.
#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let custom_days = matches!(props.filters.date_range, RangeKey::Days(_));

    let on_crime_type = {
        let filters = props.filters;
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = filters;
            next.crime_type = CrimeType::from_value(&select.value());
            on_filter_change.emit(next);
        })
    };

    let on_data_source = {
        let filters = props.filters;
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = filters;
            next.data_source = DataSource::from_value(&select.value());
            on_filter_change.emit(next);
        })
    };

    let on_date_range = {
        let filters = props.filters;
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = filters;
            next.date_range = if select.value() == CUSTOM_VALUE {
                RangeKey::Days(30)
            } else {
                RangeKey::parse(&select.value())
            };
            on_filter_change.emit(next);
        })
    };

    let on_custom_days = {
        let filters = props.filters;
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(days) = input.value().parse::<i64>() {
                if days > 0 {
                    let mut next = filters;
                    next.date_range = RangeKey::Days(days);
                    on_filter_change.emit(next);
                }
            }
        })
    };

    let on_reset = {
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |_| on_filter_change.emit(AnalysisFilters::reset()))
    };

    let range_value = if custom_days {
        CUSTOM_VALUE.to_string()
    } else {
        props.filters.date_range.as_value()
    };

    html! {
        <div class="bg-white p-4 rounded-lg border border-border shadow-sm">
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-lg font-semibold text-text-primary">{"Filters"}</h2>
                <button class="text-sm text-primary hover:text-primary-dark" onclick={on_reset}>
                    {"Reset"}
                </button>
            </div>

            <div class="space-y-4">
                <div>
                    <label for="crimeType" class="block text-sm font-medium text-text-secondary mb-1">
                        {"Crime Type"}
                    </label>
                    <select
                        id="crimeType"
                        class="input-field text-sm"
                        value={props.filters.crime_type.value()}
                        onchange={on_crime_type}
                    >
                        {for CrimeType::ALL.iter().map(|t| html! {
                            <option
                                key={t.value()}
                                value={t.value()}
                                selected={*t == props.filters.crime_type}
                            >
                                {t.label()}
                            </option>
                        })}
                    </select>
                </div>

                <div>
                    <label for="dataSource" class="block text-sm font-medium text-text-secondary mb-1">
                        {"Data Source"}
                    </label>
                    <select
                        id="dataSource"
                        class="input-field text-sm"
                        value={props.filters.data_source.value()}
                        onchange={on_data_source}
                    >
                        {for DataSource::ALL.iter().map(|s| html! {
                            <option
                                key={s.value()}
                                value={s.value()}
                                selected={*s == props.filters.data_source}
                            >
                                {s.label()}
                            </option>
                        })}
                    </select>
                </div>

                <div>
                    <label for="dateRange" class="block text-sm font-medium text-text-secondary mb-1">
                        {"Date Range"}
                    </label>
                    <select
                        id="dateRange"
                        class="input-field text-sm"
                        value={range_value}
                        onchange={on_date_range}
                    >
                        {for RangeKey::PRESETS.iter().map(|key| html! {
                            <option
                                key={key.as_value()}
                                value={key.as_value()}
                                selected={*key == props.filters.date_range}
                            >
                                {key.label()}
                            </option>
                        })}
                        <option value={CUSTOM_VALUE} selected={custom_days}>{"Custom Range"}</option>
                    </select>
                </div>

                {if custom_days {
                    let days = match props.filters.date_range {
                        RangeKey::Days(n) => n,
                        _ => 30,
                    };
                    html! {
                        <div>
                            <label for="customDays" class="block text-sm font-medium text-text-secondary mb-1">
                                {"Days Back"}
                            </label>
                            <input
                                id="customDays"
                                type="number"
                                min="1"
                                class="input-field text-sm"
                                value={days.to_string()}
                                onchange={on_custom_days}
                            />
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
