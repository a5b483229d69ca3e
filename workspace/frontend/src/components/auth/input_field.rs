use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputFieldProps {
    pub label: String,
    pub id: String,
    #[prop_or_else(|| "text".to_string())]
    pub input_type: String,
    #[prop_or_default]
    pub placeholder: String,
    pub value: String,
    pub on_change: Callback<Event>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(InputField)]
pub fn input_field(props: &InputFieldProps) -> Html {
    html! {
        <div>
            <label
                for={props.id.clone()}
                class="block text-sm font-medium text-text-secondary mb-1"
            >
                {&props.label}
            </label>
            <input
                type={props.input_type.clone()}
                id={props.id.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                onchange={props.on_change.clone()}
                disabled={props.disabled}
                required=true
                class="w-full px-3 py-2 border border-border rounded-md focus:outline-none focus:ring-2 focus:ring-primary"
            />
        </div>
    }
}
