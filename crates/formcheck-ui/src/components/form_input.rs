//! Input bound to a field's validation state.

use formcheck_core::{MountedObserver, ValidationContext, ValidationDisplayState};
use yew::prelude::*;

use crate::classes::input_class;

/// Properties for [`FormInput`].
#[derive(Properties, PartialEq)]
pub struct FormInputProps {
    /// Event source of the enclosing form.
    pub context: ValidationContext,
    /// Form-control name; only events for this name update the input.
    pub name: AttrValue,
    /// Reference to the rendered element. Not forwarded as an attribute.
    #[prop_or_default]
    pub input_ref: NodeRef,
    /// Caller classes; the validation class is appended after them.
    #[prop_or_default]
    pub class: Classes,
    /// Element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Input type; defaults to `text`.
    #[prop_or_default]
    pub input_type: Option<AttrValue>,
    /// Current value.
    #[prop_or_default]
    pub value: Option<AttrValue>,
    /// Placeholder text.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// Native `pattern` constraint.
    #[prop_or_default]
    pub pattern: Option<AttrValue>,
    /// Native `minlength` constraint.
    #[prop_or_default]
    pub minlength: Option<AttrValue>,
    /// Native `maxlength` constraint.
    #[prop_or_default]
    pub maxlength: Option<AttrValue>,
    /// Autocomplete hint.
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    /// Accessible label.
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Id of the element describing this input, usually its feedback group.
    #[prop_or_default]
    pub aria_describedby: Option<AttrValue>,
    /// Marks the input as required.
    #[prop_or_default]
    pub required: bool,
    /// Disables the input.
    #[prop_or_default]
    pub disabled: bool,
    /// Makes the input read-only.
    #[prop_or_default]
    pub readonly: bool,
    /// Fired on every edit.
    #[prop_or_default]
    pub oninput: Callback<InputEvent>,
    /// Fired when the committed value changes.
    #[prop_or_default]
    pub onchange: Callback<Event>,
    /// Fired when the input loses focus.
    #[prop_or_default]
    pub onblur: Callback<FocusEvent>,
}

/// Input whose class reflects the latest validation outcome of its field.
#[function_component(FormInput)]
pub fn form_input(props: &FormInputProps) -> Html {
    let display = use_state_eq(ValidationDisplayState::default);

    {
        let display = display.clone();
        use_effect_with_deps(
            move |(context, name): &(ValidationContext, AttrValue)| {
                display.set(ValidationDisplayState::Absent);
                let observer = {
                    let display = display.clone();
                    MountedObserver::mount_with(context, name.to_string(), move |state| {
                        display.set(state);
                    })
                };
                move || drop(observer)
            },
            (props.context.clone(), props.name.clone()),
        );
    }

    html! {
        <input
            ref={props.input_ref.clone()}
            class={input_class(&props.class, *display)}
            name={props.name.clone()}
            id={props.id.clone()}
            type={props.input_type.clone().unwrap_or_else(|| AttrValue::from("text"))}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            pattern={props.pattern.clone()}
            minlength={props.minlength.clone()}
            maxlength={props.maxlength.clone()}
            autocomplete={props.autocomplete.clone()}
            aria-label={props.aria_label.clone()}
            aria-describedby={props.aria_describedby.clone()}
            required={props.required}
            disabled={props.disabled}
            readonly={props.readonly}
            oninput={props.oninput.clone()}
            onchange={props.onchange.clone()}
            onblur={props.onblur.clone()}
        />
    }
}
