//! Input components for the login form

use dioxus::prelude::*;

use crate::auth::UserType;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    pub disabled: bool,
    pub required: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            id: "{props.id}",
            class: "{props.input_class}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            required: props.required,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct UserTypeRadioProps {
    pub selected: UserType,
    pub disabled: bool,
    pub on_select: EventHandler<UserType>,
}

/// Mutually exclusive radio group for the account role
#[component]
pub fn UserTypeRadio(props: UserTypeRadioProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        div {
            class: "user-type-options",
            for option in [UserType::Professor, UserType::Aluno] {
                label {
                    class: "user-type-option",
                    input {
                        r#type: "radio",
                        name: "userType",
                        value: "{option.wire_name()}",
                        checked: props.selected == option,
                        disabled: props.disabled,
                        onchange: move |_| on_select.call(option),
                    }
                    "{option.label()}"
                }
            }
        }
    }
}
