use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// User-facing error box with an optional manual retry action. Data errors
/// stay contained to the page that produced them; this is their one outlet.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="bg-red-50 border border-red-200 rounded-lg p-4 mb-6">
            <div class="flex flex-col items-start">
                <h3 class="font-medium text-danger">{"Something went wrong"}</h3>
                <p class="text-sm text-red-700 mt-1">{&props.message}</p>
                {if let Some(on_retry) = &props.on_retry {
                    let on_retry = on_retry.clone();
                    html! {
                        <button
                            class="mt-2 text-sm font-medium text-danger hover:text-red-800"
                            onclick={Callback::from(move |_| {
                                log::debug!("User clicked retry button");
                                on_retry.emit(());
                            })}
                        >
                            {"Retry"}
                        </button>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
