//! Form wrappers and the feedback elements styled by their class mapping.

use formcheck_core::{FeedbackKind, FieldFeedbackClassNames};
use yew::prelude::*;

use crate::classes::feedback_class;

/// Properties for [`FeedbackForm`].
#[derive(Properties, PartialEq)]
pub struct FeedbackFormProps {
    /// Feedback mapping; replaces the inline preset when supplied.
    #[prop_or(FieldFeedbackClassNames::INLINE)]
    pub class_names: FieldFeedbackClassNames,
    /// Form element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Extra classes on the element.
    #[prop_or_default]
    pub class: Classes,
    /// Suppresses the browser's native validation UI; on by default.
    #[prop_or(true)]
    pub no_validate: bool,
    /// Submit handler.
    #[prop_or_default]
    pub onsubmit: Callback<SubmitEvent>,
    /// Nested content.
    #[prop_or_default]
    pub children: Children,
}

/// Form whose feedback renders inline below each input.
#[function_component(FeedbackForm)]
pub fn feedback_form(props: &FeedbackFormProps) -> Html {
    render_form(
        &props.class_names,
        props.id.clone(),
        props.class.clone(),
        props.no_validate,
        props.onsubmit.clone(),
        &props.children,
    )
}

/// Properties for [`FeedbackFormTooltip`].
#[derive(Properties, PartialEq)]
pub struct FeedbackFormTooltipProps {
    /// Feedback mapping; replaces the tooltip preset when supplied.
    #[prop_or(FieldFeedbackClassNames::TOOLTIP)]
    pub class_names: FieldFeedbackClassNames,
    /// Form element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Extra classes on the element.
    #[prop_or_default]
    pub class: Classes,
    /// Suppresses the browser's native validation UI; on by default.
    #[prop_or(true)]
    pub no_validate: bool,
    /// Submit handler.
    #[prop_or_default]
    pub onsubmit: Callback<SubmitEvent>,
    /// Nested content.
    #[prop_or_default]
    pub children: Children,
}

/// Form whose feedback renders as tooltips.
#[function_component(FeedbackFormTooltip)]
pub fn feedback_form_tooltip(props: &FeedbackFormTooltipProps) -> Html {
    render_form(
        &props.class_names,
        props.id.clone(),
        props.class.clone(),
        props.no_validate,
        props.onsubmit.clone(),
        &props.children,
    )
}

fn render_form(
    class_names: &FieldFeedbackClassNames,
    id: Option<AttrValue>,
    class: Classes,
    no_validate: bool,
    onsubmit: Callback<SubmitEvent>,
    children: &Children,
) -> Html {
    html! {
        <ContextProvider<FieldFeedbackClassNames> context={class_names.clone()}>
            <form id={id} class={class} novalidate={no_validate} onsubmit={onsubmit}>
                { for children.iter() }
            </form>
        </ContextProvider<FieldFeedbackClassNames>>
    }
}

/// Properties for [`FieldFeedbacks`].
#[derive(Properties, PartialEq)]
pub struct FieldFeedbacksProps {
    /// Field the grouped messages describe.
    pub for_field: AttrValue,
    /// Nested content.
    #[prop_or_default]
    pub children: Children,
}

/// Groups the feedback messages of one field.
#[function_component(FieldFeedbacks)]
pub fn field_feedbacks(props: &FieldFeedbacksProps) -> Html {
    html! {
        <div data-feedbacks-for={props.for_field.clone()}>
            { for props.children.iter() }
        </div>
    }
}

/// Properties for [`FieldFeedback`].
#[derive(Properties, PartialEq)]
pub struct FieldFeedbackProps {
    /// Feedback category; selects the class from the mapping.
    pub kind: FeedbackKind,
    /// Whether the engine currently displays this message.
    #[prop_or(true)]
    pub show: bool,
    /// Extra classes on the element.
    #[prop_or_default]
    pub class: Classes,
    /// Nested content.
    #[prop_or_default]
    pub children: Children,
}

/// One feedback message styled by the enclosing form's mapping.
#[function_component(FieldFeedback)]
pub fn field_feedback(props: &FieldFeedbackProps) -> Html {
    let names = use_context::<FieldFeedbackClassNames>().unwrap_or_default();
    if !props.show {
        return Html::default();
    }
    html! {
        <div class={feedback_class(&names, props.kind, &props.class)} data-feedback-kind={props.kind.as_str()}>
            { for props.children.iter() }
        </div>
    }
}
