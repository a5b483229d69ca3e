use chrono::NaiveDate;
use common::date_range::{DateRange, RangeKey, resolve};
use web_sys::HtmlInputElement;
use yew::prelude::*;

const PRESETS: [(&str, i64); 5] = [
    ("Last 7 days", 7),
    ("Last 30 days", 30),
    ("Last 90 days", 90),
    ("Last 6 months", 180),
    ("Last year", 365),
];

/// Long display form of a date, e.g. `"May 1, 2023"`.
fn long_date_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[derive(Properties, PartialEq)]
pub struct DateRangeSelectorProps {
    pub date_range: DateRange,
    pub on_change: Callback<DateRange>,
}

/// Dropdown date-range picker: preset windows plus a custom start/end pair
/// behind Apply/Cancel. Inverted custom input is reordered, not rejected.
#[function_component(DateRangeSelector)]
pub fn date_range_selector(props: &DateRangeSelectorProps) -> Html {
    let is_open = use_state(|| false);
    let temp_start = use_state(|| props.date_range.start_iso());
    let temp_end = use_state(|| props.date_range.end_iso());

    let toggle = {
        let is_open = is_open.clone();
        let temp_start = temp_start.clone();
        let temp_end = temp_end.clone();
        let range = props.date_range;
        Callback::from(move |_| {
            if !*is_open {
                temp_start.set(range.start_iso());
                temp_end.set(range.end_iso());
            }
            is_open.set(!*is_open);
        })
    };

    let on_start_input = {
        let temp_start = temp_start.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            temp_start.set(input.value());
        })
    };

    let on_end_input = {
        let temp_end = temp_end.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            temp_end.set(input.value());
        })
    };

    let on_apply = {
        let temp_start = temp_start.clone();
        let temp_end = temp_end.clone();
        let is_open = is_open.clone();
        let on_change = props.on_change.clone();
        let fallback = props.date_range;
        Callback::from(move |_| {
            let parsed = (
                NaiveDate::parse_from_str(&temp_start, "%Y-%m-%d"),
                NaiveDate::parse_from_str(&temp_end, "%Y-%m-%d"),
            );
            match parsed {
                (Ok(start), Ok(end)) => on_change.emit(DateRange::ordered(start, end)),
                _ => {
                    log::warn!("Ignoring malformed custom date range");
                    on_change.emit(fallback);
                }
            }
            is_open.set(false);
        })
    };

    let on_cancel = {
        let is_open = is_open.clone();
        Callback::from(move |_| is_open.set(false))
    };

    html! {
        <div class="relative">
            <button
                class="inline-flex items-center px-3 py-2 border border-border rounded-md bg-white text-sm font-medium text-text-primary hover:bg-background"
                onclick={toggle}
                aria-haspopup="true"
                aria-expanded={is_open.to_string()}
            >
                <span>
                    {format!(
                        "{} - {}",
                        long_date_label(props.date_range.start_date),
                        long_date_label(props.date_range.end_date)
                    )}
                </span>
            </button>

            {if *is_open {
                html! {
                    <div class="absolute right-0 mt-2 w-72 bg-white rounded-md shadow-lg border border-border z-10">
                        <div class="p-4 border-b border-border">
                            <h3 class="font-medium text-text-primary mb-3">{"Select Date Range"}</h3>
                            <div class="space-y-4">
                                <div>
                                    <label for="start-date" class="block text-sm font-medium text-text-secondary mb-1">
                                        {"Start Date"}
                                    </label>
                                    <input
                                        type="date"
                                        id="start-date"
                                        class="w-full px-3 py-2 border border-border rounded-md"
                                        value={(*temp_start).clone()}
                                        onchange={on_start_input}
                                    />
                                </div>
                                <div>
                                    <label for="end-date" class="block text-sm font-medium text-text-secondary mb-1">
                                        {"End Date"}
                                    </label>
                                    <input
                                        type="date"
                                        id="end-date"
                                        class="w-full px-3 py-2 border border-border rounded-md"
                                        value={(*temp_end).clone()}
                                        onchange={on_end_input}
                                    />
                                </div>
                            </div>
                        </div>

                        <div class="p-4 border-b border-border">
                            <h4 class="text-sm font-medium text-text-secondary mb-2">{"Presets"}</h4>
                            <div class="space-y-2">
                                {for PRESETS.iter().map(|(label, days)| {
                                    let onclick = {
                                        let on_change = props.on_change.clone();
                                        let is_open = is_open.clone();
                                        let days = *days;
                                        Callback::from(move |_| {
                                            on_change.emit(resolve(RangeKey::Days(days)));
                                            is_open.set(false);
                                        })
                                    };
                                    html! {
                                        <button
                                            key={*days}
                                            class="block w-full text-left px-3 py-2 text-sm rounded-md hover:bg-background"
                                            onclick={onclick}
                                        >
                                            {*label}
                                        </button>
                                    }
                                })}
                            </div>
                        </div>

                        <div class="p-3 flex justify-end space-x-2">
                            <button
                                class="px-3 py-1.5 border border-border rounded-md text-sm font-medium text-text-primary hover:bg-background"
                                onclick={on_cancel}
                            >
                                {"Cancel"}
                            </button>
                            <button
                                class="px-3 py-1.5 bg-primary text-white rounded-md text-sm font-medium hover:bg-primary-light"
                                onclick={on_apply}
                            >
                                {"Apply"}
                            </button>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_labels_spell_out_month_and_year() {
        let date = NaiveDate::from_ymd_opt(2023, 5, 1).expect("valid date");
        assert_eq!(long_date_label(date), "May 1, 2023");
        let date = NaiveDate::from_ymd_opt(2023, 12, 25).expect("valid date");
        assert_eq!(long_date_label(date), "Dec 25, 2023");
    }
}
