use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub message: String,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    html! {
        <div class="mb-6 p-3 bg-red-50 border border-red-200 rounded-md" role="alert">
            <p class="text-sm text-danger">{&props.message}</p>
        </div>
    }
}
