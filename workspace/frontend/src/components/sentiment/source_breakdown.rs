use common::models::{SourceBreakdown, SourceSentiment};
use yew::prelude::*;

fn source_row(name: &str, sentiment: &SourceSentiment, last: bool) -> Html {
    let container = if last { "" } else { "border-b border-border pb-3" };
    html! {
        <div class={container}>
            <div class="flex justify-between items-center mb-1">
                <span class="text-sm font-medium">{name}</span>
                <span class="text-sm text-text-secondary">
                    {format!("{}% Positive", sentiment.positive)}
                </span>
            </div>
            <div class="w-full bg-gray-200 rounded-full h-2.5">
                <div
                    class="bg-success h-2.5 rounded-full"
                    style={format!("width: {}%;", sentiment.positive)}
                ></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SourceBreakdownProps {
    pub sources: SourceBreakdown,
}

/// Per-source positive-share panels: social media, community, news.
#[function_component(SourceBreakdownPanels)]
pub fn source_breakdown_panels(props: &SourceBreakdownProps) -> Html {
    let s = &props.sources;
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-8">
            <div class="bg-white p-6 rounded-lg border border-border shadow-sm">
                <h2 class="text-lg font-semibold text-text-primary mb-4">
                    {"Social Media Sentiment"}
                </h2>
                <div class="space-y-4">
                    {source_row("Twitter", &s.social.twitter, false)}
                    {source_row("Facebook", &s.social.facebook, false)}
                    {source_row("Instagram", &s.social.instagram, true)}
                </div>
            </div>

            <div class="bg-white p-6 rounded-lg border border-border shadow-sm">
                <h2 class="text-lg font-semibold text-text-primary mb-4">
                    {"Community Sentiment"}
                </h2>
                <div class="space-y-4">
                    {source_row("Community Forums", &s.community.forums, false)}
                    {source_row("Direct Reports", &s.community.reports, true)}
                </div>
            </div>

            <div class="bg-white p-6 rounded-lg border border-border shadow-sm">
                <h2 class="text-lg font-semibold text-text-primary mb-4">
                    {"News Media Sentiment"}
                </h2>
                <div class="space-y-4">
                    {source_row("Local News", &s.news.local, false)}
                    {source_row("Regional News", &s.news.regional, true)}
                </div>
            </div>
        </div>
    }
}
