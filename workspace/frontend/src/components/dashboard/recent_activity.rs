use common::models::{ActivityItem, ActivityKind};
use yew::prelude::*;

fn kind_badge(kind: ActivityKind) -> (&'static str, &'static str) {
    match kind {
        ActivityKind::Incident => ("!", "text-danger bg-red-50"),
        ActivityKind::Alert => ("⚠", "text-warning bg-amber-50"),
        ActivityKind::Report => ("≡", "text-info bg-blue-50"),
    }
}

#[derive(Properties, PartialEq)]
pub struct RecentActivityProps {
    pub activities: Vec<ActivityItem>,
}

#[function_component(RecentActivity)]
pub fn recent_activity(props: &RecentActivityProps) -> Html {
    if props.activities.is_empty() {
        return html! {
            <div class="p-6 text-center">
                <p class="text-text-secondary">{"No recent activity to display"}</p>
            </div>
        };
    }

    html! {
        <div class="divide-y divide-border">
            {for props.activities.iter().map(|activity| {
                let (symbol, badge_class) = kind_badge(activity.kind);
                html! {
                    <div key={activity.id} class="p-4 hover:bg-background transition-colors">
                        <div class="flex">
                            <div class={classes!("p-2", "rounded-full", "mr-3", badge_class)}>
                                <span aria-hidden="true">{symbol}</span>
                            </div>
                            <div class="flex-1">
                                <h4 class="font-medium text-text-primary text-sm">{&activity.title}</h4>
                                {if let Some(location) = &activity.location {
                                    html! {
                                        <div class="mt-1 text-xs text-text-secondary">{location}</div>
                                    }
                                } else {
                                    html! {}
                                }}
                                <div class="flex justify-between items-center mt-2">
                                    <span class="text-xs text-text-tertiary">{&activity.time}</span>
                                    <span class="text-xs px-2 py-0.5 bg-slate-100 rounded-full text-text-secondary">
                                        {&activity.category}
                                    </span>
                                </div>
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
